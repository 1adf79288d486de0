//! Table references accepted by the statement builders.

use crate::error::Result;
use crate::fragment::{Ident, IdentKind};

/// A table name with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: Option<String>,
}

impl Table {
    /// Creates a table reference. The name is validated when it is appended.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Sets the alias rendered after the table name (`users u`).
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the raw table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alias, if any.
    #[must_use]
    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Validates the name and alias into identifiers.
    pub(crate) fn idents(&self) -> Result<(Ident, Option<Ident>)> {
        let name = Ident::new(IdentKind::Table, self.name.as_str())?;
        let alias = self
            .alias
            .as_deref()
            .map(|a| Ident::new(IdentKind::Table, a))
            .transpose()?;
        Ok((name, alias))
    }
}

/// Conversion into a [`Table`].
pub trait IntoTable {
    fn into_table(self) -> Table;
}

impl IntoTable for Table {
    fn into_table(self) -> Table {
        self
    }
}

impl IntoTable for &Table {
    fn into_table(self) -> Table {
        self.clone()
    }
}

impl IntoTable for &str {
    fn into_table(self) -> Table {
        Table::new(self)
    }
}

impl IntoTable for String {
    fn into_table(self) -> Table {
        Table::new(self)
    }
}

impl IntoTable for &String {
    fn into_table(self) -> Table {
        Table::new(self.as_str())
    }
}
