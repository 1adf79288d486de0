//! DELETE statement operations.

use super::free::FreeSqlBuilder;
use super::phase::Operation;
use super::table::IntoTable;
use crate::error::Result;
use crate::fragment::Keyword;

impl FreeSqlBuilder {
    /// Appends `DELETE FROM` and the table name.
    ///
    /// **Warning**: without a following `WHERE` template the statement
    /// deletes every row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a blank table name, or `OutOfOrder`
    /// in strict mode when the builder is not empty.
    pub fn delete_from(&mut self, table: impl IntoTable) -> Result<&mut Self> {
        self.open_statement(Operation::DeleteFrom, Keyword::DeleteFrom, table.into_table())
    }
}
