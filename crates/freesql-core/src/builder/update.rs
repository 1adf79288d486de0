//! UPDATE statement operations.

use super::free::{column_idents, FreeSqlBuilder};
use super::phase::{Operation, Phase};
use super::table::IntoTable;
use crate::error::Result;
use crate::fragment::{Keyword, Punct, Token};

impl FreeSqlBuilder {
    /// Appends `UPDATE` and the table name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a blank table name, or `OutOfOrder`
    /// in strict mode when the builder is not empty.
    pub fn update(&mut self, table: impl IntoTable) -> Result<&mut Self> {
        self.open_statement(Operation::Update, Keyword::Update, table.into_table())
    }

    /// Appends `SET c1=?, c2=?`.
    ///
    /// An empty list appends a bare `SET`. Calling this twice appends a
    /// second `SET` clause.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if any column name is blank, or
    /// `OutOfOrder` in strict mode unless it directly follows
    /// [`FreeSqlBuilder::update`]. Nothing is appended on error.
    pub fn set<I, S>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_phase(Operation::Set)?;
        let columns = column_idents(columns)?;

        let mut assignments = Vec::with_capacity(columns.len() * 4);
        for (i, column) in columns.into_iter().enumerate() {
            if i > 0 {
                assignments.push(Token::Punctuation(Punct::Comma));
            }
            assignments.push(Token::Identifier(column));
            assignments.push(Token::Punctuation(Punct::Equals));
            assignments.push(Self::placeholder());
        }

        self.fragments.append([Token::Keyword(Keyword::Set)]);
        self.fragments.append(assignments);
        self.phase = Phase::reached_by(Operation::Set);
        Ok(self)
    }
}
