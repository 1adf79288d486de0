//! Builder options.
//!
//! Options are plain data so they can be loaded from whatever configuration
//! source the caller uses (JSON in the `freesql` CLI).

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;

/// Options fixed for the lifetime of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderOptions {
    /// Dialect used to quote identifiers.
    pub dialect: Dialect,
    /// Reject statement-shape calls made out of order.
    pub strict: bool,
}

impl BuilderOptions {
    /// Creates non-strict options for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            strict: false,
        }
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl From<Dialect> for BuilderOptions {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = BuilderOptions::default();
        assert_eq!(opts.dialect, Dialect::Generic);
        assert!(!opts.strict);
    }

    #[test]
    fn test_from_json() {
        let opts: BuilderOptions =
            serde_json::from_str(r#"{ "dialect": "mysql", "strict": true }"#).unwrap();
        assert_eq!(opts, BuilderOptions::new(Dialect::MySql).strict(true));

        let opts: BuilderOptions = serde_json::from_str(r#"{ "dialect": "mssql" }"#).unwrap();
        assert_eq!(opts, BuilderOptions::new(Dialect::SqlServer));

        let opts: BuilderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, BuilderOptions::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let res = serde_json::from_str::<BuilderOptions>(r#"{ "dialekt": "mysql" }"#);
        assert!(res.is_err());
    }
}
