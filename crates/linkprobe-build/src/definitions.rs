//! Ordered `NAME[=VALUE]` definition sets.
//!
//! The serialized form is `NAME=VALUE;NAME;...`. It is what travels through
//! cargo `links` metadata and `cargo:rustc-env`, so values may not contain
//! `;` and names must be C identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while building or parsing a definition set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The name is empty or not a valid C identifier.
    #[error("invalid definition name '{0}'")]
    InvalidName(String),

    /// The value contains the `;` separator.
    #[error("value of {name} contains ';': '{value}'")]
    InvalidValue { name: String, value: String },
}

/// A single definition, e.g. `FOO_TEST_MACRO=4` or `EXPORT_FOO_API`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub value: Option<String>,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered set of definitions. Redefining a name keeps its position and
/// replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    entries: Vec<Definition>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name`, optionally with a value.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<(), DefinitionError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(DefinitionError::InvalidName(name));
        }
        if let Some(value) = value
            && value.contains(';')
        {
            return Err(DefinitionError::InvalidValue {
                name,
                value: value.to_string(),
            });
        }

        let value = value.map(str::to_string);
        if let Some(existing) = self.entries.iter_mut().find(|d| d.name == name) {
            existing.value = value;
        } else {
            self.entries.push(Definition { name, value });
        }
        Ok(())
    }

    /// Builder form of [`Definitions::define`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        self.define(name, value)?;
        Ok(self)
    }

    /// Merge `other` into `self`; definitions in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for def in &other.entries {
            if let Some(existing) = self.entries.iter_mut().find(|d| d.name == def.name) {
                existing.value.clone_from(&def.value);
            } else {
                self.entries.push(def.clone());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.entries.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Definitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{def}")?;
        }
        Ok(())
    }
}

impl FromStr for Definitions {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut defs = Self::new();
        for segment in s.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            match segment.split_once('=') {
                Some((name, value)) => defs.define(name.trim(), Some(value))?,
                None => defs.define(segment, None)?,
            }
        }
        Ok(defs)
    }
}

/// The cfg name a definition maps to, e.g. `EXPORT_FOO_API` -> `def_export_foo_api`.
pub fn definition_cfg_name(name: &str) -> String {
    format!("def_{}", name.to_ascii_lowercase())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
