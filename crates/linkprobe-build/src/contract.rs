//! The definition contract a consumer enforces on what it inherited.

use thiserror::Error;

use crate::definitions::Definitions;

/// A contract violation. Messages match the `#error` lines of a C consumer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{0} not exported properly")]
    MissingRequired(String),

    #[error("{0} should be private definition")]
    PrivateLeaked(String),
}

/// Names that must be visible and names that must not be.
#[derive(Debug, Clone, Copy)]
pub struct MacroContract<'a> {
    pub required: &'a [&'a str],
    pub private: &'a [&'a str],
}

impl MacroContract<'_> {
    /// Check `defs`, reporting every violation in declaration order,
    /// required names first.
    pub fn violations(&self, defs: &Definitions) -> Vec<ContractViolation> {
        let missing = self
            .required
            .iter()
            .filter(|name| !defs.contains(name))
            .map(|name| ContractViolation::MissingRequired((*name).to_string()));
        let leaked = self
            .private
            .iter()
            .filter(|name| defs.contains(name))
            .map(|name| ContractViolation::PrivateLeaked((*name).to_string()));
        missing.chain(leaked).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: MacroContract<'static> = MacroContract {
        required: &["FOO_TEST_MACRO"],
        private: &["EXPORT_FOO_API"],
    };

    #[test]
    fn test_satisfied() {
        let defs: Definitions = "FOO_TEST_MACRO=4;DEBUG".parse().unwrap();
        assert!(CONTRACT.violations(&defs).is_empty());
    }

    #[test]
    fn test_missing_required() {
        let violations = CONTRACT.violations(&Definitions::new());
        assert_eq!(
            violations,
            [ContractViolation::MissingRequired("FOO_TEST_MACRO".into())]
        );
        assert_eq!(violations[0].to_string(), "FOO_TEST_MACRO not exported properly");
    }

    #[test]
    fn test_private_leaked() {
        let defs: Definitions = "FOO_TEST_MACRO=4;EXPORT_FOO_API".parse().unwrap();
        let violations = CONTRACT.violations(&defs);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "EXPORT_FOO_API should be private definition"
        );
    }

    #[test]
    fn test_all_violations_reported_required_first() {
        let defs: Definitions = "EXPORT_FOO_API".parse().unwrap();
        assert_eq!(
            CONTRACT.violations(&defs),
            vec![
                ContractViolation::MissingRequired("FOO_TEST_MACRO".into()),
                ContractViolation::PrivateLeaked("EXPORT_FOO_API".into()),
            ]
        );
    }
}
