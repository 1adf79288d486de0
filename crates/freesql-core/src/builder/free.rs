//! The free-form SQL builder and its low-level append operations.
//!
//! Statement-shaped operations live next to this file (`insert.rs`,
//! `update.rs`, `delete.rs`) as further `impl FreeSqlBuilder` blocks.

use core::fmt;

use tracing::{trace, warn};

use super::built::BuiltSql;
use super::phase::{Operation, Phase};
use super::table::{IntoTable, Table};
use crate::config::BuilderOptions;
use crate::dialect::Dialect;
use crate::error::{FreeSqlError, Result};
use crate::fragment::{FragmentSequence, Ident, IdentKind, Keyword, Token};

/// A fluent builder accumulating SQL fragments for one statement.
///
/// Every method appends to the same token sequence and hands the builder
/// back for chaining. Fallible methods validate all of their input before
/// appending anything, so a failed call leaves the builder unchanged.
///
/// A builder is meant for a single statement. Use [`FreeSqlBuilder::reset`]
/// to start over with the same dialect.
#[derive(Debug, Clone)]
pub struct FreeSqlBuilder {
    pub(super) fragments: FragmentSequence,
    options: BuilderOptions,
    pub(super) phase: Phase,
}

impl FreeSqlBuilder {
    /// Creates a non-strict builder for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self::with_options(BuilderOptions::new(dialect))
    }

    /// Creates a builder that rejects out-of-order statement calls.
    #[must_use]
    pub const fn strict(dialect: Dialect) -> Self {
        Self::with_options(BuilderOptions::new(dialect).strict(true))
    }

    /// Creates a builder from options.
    #[must_use]
    pub const fn with_options(options: BuilderOptions) -> Self {
        Self {
            fragments: FragmentSequence::new(options.dialect),
            options,
            phase: Phase::Empty,
        }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// Returns the options the builder was created with.
    #[must_use]
    pub const fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Returns the current statement phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the accumulated tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        self.fragments.tokens()
    }

    /// Returns true if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of positional parameters the rendered SQL expects.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.fragments.placeholder_count()
    }

    /// Appends raw tokens.
    ///
    /// This is the unchecked primitive under every other method. Nothing
    /// stops unbalanced brackets here; they are reported by
    /// [`FreeSqlBuilder::render`].
    pub fn append<I>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = Token>,
    {
        self.fragments.append(tokens);
        self
    }

    /// Appends `tokens` only if `condition` holds.
    pub fn append_when<I>(&mut self, condition: bool, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = Token>,
    {
        if condition {
            self.fragments.append(tokens);
        }
        self
    }

    /// Builds an identifier token, quoted with this builder's dialect on
    /// render.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] for an empty or blank name.
    pub fn quote_identifier(&self, kind: IdentKind, raw_name: &str) -> Result<Token> {
        self.fragments.quote_identifier(kind, raw_name)
    }

    /// Returns a positional placeholder token.
    #[must_use]
    pub const fn placeholder() -> Token {
        FragmentSequence::placeholder()
    }

    /// Appends a table name (and its alias) without a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] for a blank name or alias.
    pub fn append_table(&mut self, table: impl IntoTable) -> Result<&mut Self> {
        let (name, alias) = table.into_table().idents()?;
        self.push_table(name, alias);
        Ok(self)
    }

    /// Appends a quoted column name.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] for a blank name.
    pub fn append_column(&mut self, name: &str) -> Result<&mut Self> {
        let column = Ident::new(IdentKind::Column, name)?;
        self.fragments.append([Token::Identifier(column)]);
        Ok(self)
    }

    /// Appends `column AS alias`.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] for a blank name or alias.
    pub fn append_column_as(&mut self, name: &str, alias: &str) -> Result<&mut Self> {
        let column = Ident::new(IdentKind::Column, name)?;
        let alias = Ident::new(IdentKind::Column, alias)?;
        self.fragments.append([Token::Identifier(column)]);
        self.fragments.append([Token::Keyword(Keyword::As)]);
        self.fragments.append([Token::Identifier(alias)]);
        Ok(self)
    }

    /// Appends caller-written SQL verbatim.
    ///
    /// The text is never parsed. An `IN` clause must be written with a
    /// single placeholder (`WHERE id IN ?`) regardless of how many values
    /// are bound later; expanding it is up to the execution layer. Empty
    /// text appends nothing.
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        let template = template.into();
        if template.is_empty() {
            return self;
        }
        self.fragments.append([Token::RawText(template)]);
        self
    }

    /// Appends `template` only if `condition` holds.
    pub fn set_template_when(&mut self, condition: bool, template: impl Into<String>) -> &mut Self {
        if condition {
            self.set_template(template);
        }
        self
    }

    /// Clears all tokens and the phase, keeping dialect and options.
    pub fn reset(&mut self) -> &mut Self {
        trace!(dropped = self.fragments.len(), "reset builder");
        self.fragments.clear();
        self.phase = Phase::Empty;
        self
    }

    /// Renders the accumulated SQL.
    ///
    /// Rendering does not consume or change the builder.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::MalformedSequence`] if raw [`Self::append`]
    /// calls left brackets unbalanced.
    pub fn render(&self) -> Result<String> {
        self.fragments.render()
    }

    /// Renders the SQL together with its placeholder count.
    ///
    /// # Errors
    ///
    /// Same as [`Self::render`].
    pub fn build(&self) -> Result<BuiltSql> {
        Ok(BuiltSql {
            sql: self.render()?,
            placeholder_count: self.placeholder_count(),
        })
    }

    pub(super) fn check_phase(&self, operation: Operation) -> Result<()> {
        if self.options.strict && !self.phase.permits(operation) {
            warn!(
                operation = operation.name(),
                phase = %self.phase,
                "statement call out of order"
            );
            return Err(FreeSqlError::OutOfOrder {
                operation: operation.name(),
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Appends `keyword` followed by the table; shared by the statement
    /// openers.
    pub(super) fn open_statement(
        &mut self,
        operation: Operation,
        keyword: Keyword,
        table: Table,
    ) -> Result<&mut Self> {
        self.check_phase(operation)?;
        let (name, alias) = table.idents()?;
        self.fragments.append([Token::Keyword(keyword)]);
        self.push_table(name, alias);
        self.phase = Phase::reached_by(operation);
        Ok(self)
    }

    fn push_table(&mut self, name: Ident, alias: Option<Ident>) {
        self.fragments.append([Token::Identifier(name)]);
        if let Some(alias) = alias {
            self.fragments.append([Token::Identifier(alias)]);
        }
    }
}

/// Validates every column name before anything is appended.
pub(super) fn column_idents<I, S>(columns: I) -> Result<Vec<Ident>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .map(|c| Ident::new(IdentKind::Column, c.as_ref()))
        .collect()
}

impl fmt::Display for FreeSqlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(sql) => f.write_str(&sql),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}
