//! INSERT statement operations.

use super::free::{column_idents, FreeSqlBuilder};
use super::phase::{Operation, Phase};
use super::table::IntoTable;
use crate::error::Result;
use crate::fragment::{Keyword, Punct, Token};

impl FreeSqlBuilder {
    /// Appends `INSERT INTO` and the table name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a blank table name, or `OutOfOrder`
    /// in strict mode when the builder is not empty.
    pub fn insert_into(&mut self, table: impl IntoTable) -> Result<&mut Self> {
        self.open_statement(Operation::InsertInto, Keyword::InsertInto, table.into_table())
    }

    /// Appends the column list and one placeholder per column:
    /// `(c1, c2) VALUES (?, ?)`.
    ///
    /// An empty list is allowed and renders `() VALUES ()`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if any column name is blank, or
    /// `OutOfOrder` in strict mode unless it directly follows
    /// [`FreeSqlBuilder::insert_into`]. Nothing is appended on error.
    pub fn values<I, S>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_phase(Operation::Values)?;
        let columns = column_idents(columns)?;

        let mut names = Vec::with_capacity(columns.len() * 2 + 1);
        let mut markers = Vec::with_capacity(columns.len() * 2 + 1);
        names.push(Token::Punctuation(Punct::LeftBracket));
        markers.push(Token::Punctuation(Punct::LeftBracket));
        for (i, column) in columns.into_iter().enumerate() {
            if i > 0 {
                names.push(Token::Punctuation(Punct::Comma));
                markers.push(Token::Punctuation(Punct::Comma));
            }
            names.push(Token::Identifier(column));
            markers.push(Self::placeholder());
        }
        names.push(Token::Punctuation(Punct::RightBracket));
        markers.push(Token::Punctuation(Punct::RightBracket));

        self.fragments.append(names);
        self.fragments.append([Token::Keyword(Keyword::Values)]);
        self.fragments.append(markers);
        self.phase = Phase::reached_by(Operation::Values);
        Ok(self)
    }
}
