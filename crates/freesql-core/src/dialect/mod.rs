//! SQL Dialect support.
//!
//! Different databases quote identifiers differently. A [`Dialect`] is picked
//! once when a builder is created and resolves to a single [`QuoteRule`] that
//! is applied to every table and column name the builder renders.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FreeSqlError;

/// How a dialect wraps identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteRule {
    /// Identifiers are emitted verbatim.
    None,
    /// `"name"` (ANSI, Oracle, SQLite and `PostgreSQL`).
    DoubleQuote,
    /// `` `name` `` (`MySQL`).
    Backtick,
    /// `[name]` (SQL Server).
    Brackets,
}

impl QuoteRule {
    /// Returns the opening and closing quote characters, if any.
    #[must_use]
    pub const fn delimiters(self) -> Option<(char, char)> {
        match self {
            Self::None => None,
            Self::DoubleQuote => Some(('"', '"')),
            Self::Backtick => Some(('`', '`')),
            Self::Brackets => Some(('[', ']')),
        }
    }

    /// Writes `name` quoted by this rule into `out`.
    ///
    /// An embedded closing delimiter is doubled so the quoted form always
    /// denotes exactly the raw name.
    pub fn write_quoted(self, name: &str, out: &mut String) {
        let Some((open, close)) = self.delimiters() else {
            out.push_str(name);
            return;
        };
        out.push(open);
        for ch in name.chars() {
            if ch == close {
                out.push(close);
            }
            out.push(ch);
        }
        out.push(close);
    }

    /// Returns `name` quoted by this rule.
    #[must_use]
    pub fn quote(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        self.write_quoted(name, &mut out);
        out
    }
}

/// Target database family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// No identifier quoting at all.
    #[default]
    #[serde(alias = "ansi")]
    Generic,
    /// `MySQL` and `MariaDB`.
    #[serde(alias = "mariadb")]
    MySql,
    /// Microsoft SQL Server.
    #[serde(alias = "mssql")]
    SqlServer,
    /// Oracle.
    Oracle,
    /// `PostgreSQL`.
    #[serde(alias = "postgres", alias = "pg")]
    PostgreSql,
    /// SQLite.
    Sqlite,
}

/// Quote rule per dialect, in declaration order.
const QUOTE_RULES: [(Dialect, QuoteRule); 6] = [
    (Dialect::Generic, QuoteRule::None),
    (Dialect::MySql, QuoteRule::Backtick),
    (Dialect::SqlServer, QuoteRule::Brackets),
    (Dialect::Oracle, QuoteRule::DoubleQuote),
    (Dialect::PostgreSql, QuoteRule::DoubleQuote),
    (Dialect::Sqlite, QuoteRule::DoubleQuote),
];

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Self; 6] = [
        Self::Generic,
        Self::MySql,
        Self::SqlServer,
        Self::Oracle,
        Self::PostgreSql,
        Self::Sqlite,
    ];

    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::MySql => "mysql",
            Self::SqlServer => "sqlserver",
            Self::Oracle => "oracle",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Returns the identifier quoting rule of this dialect.
    #[must_use]
    pub const fn quote_rule(self) -> QuoteRule {
        QUOTE_RULES[self as usize].1
    }

    /// Returns the parameter placeholder.
    ///
    /// Every supported dialect binds positionally with `?`.
    #[must_use]
    pub const fn parameter_placeholder(self) -> &'static str {
        "?"
    }

    /// Quotes an identifier according to [`Self::quote_rule`].
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        self.quote_rule().quote(name)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = FreeSqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "oracle" => Ok(Self::Oracle),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(FreeSqlError::UnknownDialect(s.to_string())),
        }
    }
}
