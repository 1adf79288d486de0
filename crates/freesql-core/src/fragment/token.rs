//! Token types for the fragment sequence.

use core::fmt;

use crate::dialect::Dialect;
use crate::error::{FreeSqlError, Result};

/// Statement keywords emitted by the builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    InsertInto,
    Values,
    DeleteFrom,
    Update,
    Set,
    As,
}

impl Keyword {
    /// Returns the SQL text of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsertInto => "INSERT INTO",
            Self::Values => "VALUES",
            Self::DeleteFrom => "DELETE FROM",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::As => "AS",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// `, ` (the comma carries its own trailing space)
    Comma,
    /// `=`
    Equals,
}

impl Punct {
    /// Returns the SQL text of the punctuation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftBracket => "(",
            Self::RightBracket => ")",
            Self::Comma => ", ",
            Self::Equals => "=",
        }
    }
}

/// What an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentKind {
    Table,
    Column,
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Column => "column",
        })
    }
}

/// A validated, not yet quoted, table or column name.
///
/// The raw name is kept as given; quoting happens at render time with the
/// dialect of the sequence that owns the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    kind: IdentKind,
    name: String,
}

impl Ident {
    /// Creates an identifier, rejecting empty and blank names.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] if `name` is empty or only
    /// whitespace.
    pub fn new(kind: IdentKind, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FreeSqlError::InvalidIdentifier { kind, name });
        }
        Ok(Self { kind, name })
    }

    /// Returns what this identifier names.
    #[must_use]
    pub const fn kind(&self) -> IdentKind {
        self.kind
    }

    /// Returns the raw, unquoted name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An atomic unit of a fragment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Keyword(Keyword),
    Identifier(Ident),
    /// Caller-supplied SQL, emitted verbatim.
    RawText(String),
    /// A positional parameter marker.
    Placeholder,
    Punctuation(Punct),
    Whitespace,
}

impl Token {
    /// Returns true if no whitespace may follow this token.
    #[must_use]
    pub const fn binds_right(&self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Punctuation(Punct::LeftBracket | Punct::Comma | Punct::Equals)
        )
    }

    /// Returns true if no whitespace may precede this token.
    #[must_use]
    pub const fn binds_left(&self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Punctuation(Punct::RightBracket | Punct::Comma | Punct::Equals)
        )
    }

    /// Number of positional parameters this token contributes.
    ///
    /// Raw text is scanned for `?` characters outside single-quoted string
    /// literals. The text is not otherwise parsed.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        match self {
            Self::Placeholder => 1,
            Self::RawText(text) => raw_placeholder_count(text),
            _ => 0,
        }
    }

    /// Writes the SQL text of this token into `out`.
    pub fn write_sql(&self, dialect: Dialect, out: &mut String) {
        match self {
            Self::Keyword(kw) => out.push_str(kw.as_str()),
            Self::Identifier(ident) => dialect.quote_rule().write_quoted(ident.name(), out),
            Self::RawText(text) => out.push_str(text),
            Self::Placeholder => out.push_str(dialect.parameter_placeholder()),
            Self::Punctuation(p) => out.push_str(p.as_str()),
            Self::Whitespace => out.push(' '),
        }
    }

    /// Returns the SQL text of this token.
    #[must_use]
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut out = String::new();
        self.write_sql(dialect, &mut out);
        out
    }
}

/// Counts `?` in `text`, skipping `'...'` spans. A doubled `''` toggles twice
/// and so stays inside the literal.
fn raw_placeholder_count(text: &str) -> usize {
    let mut in_literal = false;
    let mut count = 0;
    for ch in text.chars() {
        match ch {
            '\'' => in_literal = !in_literal,
            '?' if !in_literal => count += 1,
            _ => {}
        }
    }
    count
}

impl From<Keyword> for Token {
    fn from(kw: Keyword) -> Self {
        Self::Keyword(kw)
    }
}

impl From<Punct> for Token {
    fn from(p: Punct) -> Self {
        Self::Punctuation(p)
    }
}

impl From<Ident> for Token {
    fn from(ident: Ident) -> Self {
        Self::Identifier(ident)
    }
}
