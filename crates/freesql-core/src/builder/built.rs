//! Rendered statement handed to the execution layer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// SQL text plus the number of positional parameters it expects.
///
/// The execution layer binds exactly `placeholder_count` values, left to
/// right. A single `?` standing for an `IN` list is expanded there, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuiltSql {
    pub sql: String,
    pub placeholder_count: usize,
}

impl BuiltSql {
    /// Splits into `(sql, placeholder_count)`.
    #[must_use]
    pub fn into_parts(self) -> (String, usize) {
        (self.sql, self.placeholder_count)
    }
}

impl fmt::Display for BuiltSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
