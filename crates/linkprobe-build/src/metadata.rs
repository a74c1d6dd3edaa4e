//! Library metadata exported through cargo `links`.
//!
//! This plays the role a generated pkg-config file plays for a C library:
//! a consumer learns the library's public definitions, public include
//! directory and version, and nothing it declared private.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::definitions::{DefinitionError, Definitions};
use crate::emit::Emitter;

const KEY_DEFINITIONS: &str = "definitions";
const KEY_INCLUDE: &str = "include";
const KEY_VERSION: &str = "version";

/// Public face of a native library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMetadata {
    pub definitions: Definitions,
    pub include: Option<PathBuf>,
    pub version: Option<String>,
}

impl LinkMetadata {
    /// Export this metadata from the library's build script.
    pub fn emit<W: Write>(&self, out: &mut Emitter<W>) -> io::Result<()> {
        out.metadata(KEY_DEFINITIONS, &self.definitions.to_string())?;
        if let Some(include) = &self.include {
            out.metadata(KEY_INCLUDE, &include.display().to_string())?;
        }
        if let Some(version) = &self.version {
            out.metadata(KEY_VERSION, version)?;
        }
        Ok(())
    }

    /// Read the metadata a direct dependency with `links = "<links>"` exported.
    pub fn from_dependency(links: &str) -> Result<Self, DefinitionError> {
        Self::from_lookup(links, |key| env::var(key).ok())
    }

    /// Same as [`LinkMetadata::from_dependency`] with an explicit variable lookup.
    pub fn from_lookup(
        links: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DefinitionError> {
        let get = |key: &str| lookup(&dep_var(links, key));

        let definitions = match get(KEY_DEFINITIONS) {
            Some(raw) => raw.parse()?,
            None => Definitions::new(),
        };

        Ok(Self {
            definitions,
            include: get(KEY_INCLUDE).map(PathBuf::from),
            version: get(KEY_VERSION),
        })
    }

    /// Environment variable names a dependent's build script should rerun on.
    pub fn env_vars(links: &str) -> [String; 3] {
        [
            dep_var(links, KEY_DEFINITIONS),
            dep_var(links, KEY_INCLUDE),
            dep_var(links, KEY_VERSION),
        ]
    }
}

fn dep_var(links: &str, key: &str) -> String {
    format!(
        "DEP_{}_{}",
        links.to_ascii_uppercase().replace('-', "_"),
        key.to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_reads_dep_variables() {
        let vars: HashMap<&str, &str> = [
            ("DEP_FOO_DEFINITIONS", "FOO_TEST_MACRO=4"),
            ("DEP_FOO_INCLUDE", "/src/foo/include"),
            ("DEP_FOO_VERSION", "1.0.0"),
        ]
        .into_iter()
        .collect();

        let meta =
            LinkMetadata::from_lookup("foo", |k| vars.get(k).map(|v| (*v).to_string())).unwrap();

        assert!(meta.definitions.contains("FOO_TEST_MACRO"));
        assert_eq!(meta.include, Some(PathBuf::from("/src/foo/include")));
        assert_eq!(meta.version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_missing_dependency_yields_empty_metadata() {
        let meta = LinkMetadata::from_lookup("foo", |_| None).unwrap();
        assert_eq!(meta, LinkMetadata::default());
    }

    #[test]
    fn test_malformed_definitions_are_an_error() {
        let result = LinkMetadata::from_lookup("foo", |k| {
            (k == "DEP_FOO_DEFINITIONS").then(|| "1BAD".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_emit_then_env_names_line_up() {
        let meta = LinkMetadata {
            definitions: "FOO_TEST_MACRO=4".parse().unwrap(),
            include: None,
            version: Some("1.0.0".to_string()),
        };
        let mut out = Emitter::new(Vec::new());
        meta.emit(&mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert_eq!(text, "cargo:definitions=FOO_TEST_MACRO=4\ncargo:version=1.0.0\n");
        assert_eq!(LinkMetadata::env_vars("foo")[0], "DEP_FOO_DEFINITIONS");
    }
}
