//! The ordered token sequence and its rendering rules.

use tracing::{debug, trace, warn};

use super::token::{Ident, IdentKind, Punct, Token};
use crate::dialect::Dialect;
use crate::error::{FreeSqlError, Result};

/// An ordered sequence of SQL tokens bound to one dialect.
///
/// Tokens are never reordered. Appending takes care of separating
/// whitespace so that the rendered text never contains two consecutive
/// spaces produced by the sequence itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSequence {
    dialect: Dialect,
    tokens: Vec<Token>,
}

impl FragmentSequence {
    /// Creates an empty sequence for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            tokens: Vec::new(),
        }
    }

    /// Returns the dialect used for quoting.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the accumulated tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Removes every token. The dialect is kept.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Appends tokens.
    ///
    /// One whitespace is placed between the current last token and the first
    /// appended one unless either binds tightly (see [`Token::binds_left`]
    /// and [`Token::binds_right`]). Tokens inside one call are otherwise
    /// concatenated as given. Whitespace at the start of the sequence or
    /// after a token that binds right is dropped, and a trailing whitespace
    /// is removed before a token that binds left.
    pub fn append<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        let before = self.tokens.len();
        let mut first = true;
        for token in tokens {
            if token == Token::Whitespace {
                if matches!(self.tokens.last(), Some(last) if !last.binds_right()) {
                    self.tokens.push(token);
                }
                continue;
            }
            if token.binds_left() && self.tokens.last() == Some(&Token::Whitespace) {
                self.tokens.pop();
            }
            if first {
                if let Some(last) = self.tokens.last() {
                    if !last.binds_right() && !token.binds_left() {
                        self.tokens.push(Token::Whitespace);
                    }
                }
                first = false;
            }
            self.tokens.push(token);
        }
        trace!(
            appended = self.tokens.len() - before,
            total = self.tokens.len(),
            "append"
        );
    }

    /// Builds an identifier token for `raw_name`.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::InvalidIdentifier`] for an empty or blank name.
    #[allow(clippy::unused_self)]
    pub fn quote_identifier(&self, kind: IdentKind, raw_name: &str) -> Result<Token> {
        Ident::new(kind, raw_name).map(Token::Identifier)
    }

    /// Returns a positional placeholder token.
    #[must_use]
    pub const fn placeholder() -> Token {
        Token::Placeholder
    }

    /// Number of positional parameters the rendered SQL expects, in order.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.tokens.iter().map(Token::placeholder_count).sum()
    }

    /// Verifies bracket nesting of punctuation tokens.
    ///
    /// Brackets inside raw text are not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::MalformedSequence`] on a closing bracket with
    /// no opener or on unclosed brackets.
    pub fn check_balance(&self) -> Result<()> {
        let mut depth = 0_usize;
        for (index, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Punctuation(Punct::LeftBracket) => depth += 1,
                Token::Punctuation(Punct::RightBracket) => {
                    if depth == 0 {
                        return Err(FreeSqlError::MalformedSequence {
                            reason: format!("closing bracket at token {index} has no opener"),
                        });
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        if depth > 0 {
            return Err(FreeSqlError::MalformedSequence {
                reason: format!("{depth} unclosed bracket(s)"),
            });
        }
        Ok(())
    }

    /// Renders the sequence to SQL text.
    ///
    /// Rendering does not mutate the sequence; repeated calls return the same
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`FreeSqlError::MalformedSequence`] if brackets are unbalanced.
    pub fn render(&self) -> Result<String> {
        if let Err(err) = self.check_balance() {
            warn!(dialect = %self.dialect, error = %err, "refusing to render");
            return Err(err);
        }
        let mut sql = String::new();
        for token in &self.tokens {
            token.write_sql(self.dialect, &mut sql);
        }
        debug!(
            dialect = %self.dialect,
            placeholders = self.placeholder_count(),
            sql = %sql,
            "rendered fragment sequence"
        );
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Keyword;

    fn column(seq: &FragmentSequence, name: &str) -> Token {
        seq.quote_identifier(IdentKind::Column, name).unwrap()
    }

    #[test]
    fn test_whitespace_between_words() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::Keyword(Keyword::Update)]);
        seq.append([seq.quote_identifier(IdentKind::Table, "users").unwrap()]);
        assert_eq!(seq.render().unwrap(), "UPDATE users");
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_no_whitespace_inside_one_call() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        let a = column(&seq, "a");
        seq.append([a, Token::from(Punct::Equals), FragmentSequence::placeholder()]);
        assert_eq!(seq.render().unwrap(), "a=?");
    }

    #[test]
    fn test_brackets_and_commas_bind_tightly() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::RawText("f".into())]);
        seq.append([Token::from(Punct::LeftBracket)]);
        seq.append([column(&seq, "a")]);
        seq.append([Token::from(Punct::Comma)]);
        seq.append([column(&seq, "b")]);
        seq.append([Token::from(Punct::RightBracket)]);
        assert_eq!(seq.render().unwrap(), "f (a, b)");
    }

    #[test]
    fn test_whitespace_is_never_doubled() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::Whitespace]);
        assert!(seq.is_empty());
        seq.append([Token::Keyword(Keyword::Set)]);
        seq.append([Token::Whitespace, Token::Whitespace]);
        seq.append([Token::Whitespace, Token::RawText("x".into())]);
        let doubled = seq
            .tokens()
            .windows(2)
            .any(|w| w[0] == Token::Whitespace && w[1] == Token::Whitespace);
        assert!(!doubled);
        assert_eq!(seq.render().unwrap(), "SET x");
    }

    #[test]
    fn test_whitespace_after_comma_is_dropped() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([column(&seq, "a")]);
        seq.append([Token::from(Punct::Comma)]);
        seq.append([Token::Whitespace]);
        seq.append([Token::RawText("b = ?".into())]);
        let sql = seq.render().unwrap();
        assert_eq!(sql, "a, b = ?");
        assert!(!sql.contains("  "));
    }

    #[test]
    fn test_whitespace_inside_brackets_is_dropped() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::RawText("f".into())]);
        seq.append([Token::from(Punct::LeftBracket)]);
        seq.append([
            Token::Whitespace,
            Token::Placeholder,
            Token::Whitespace,
            Token::from(Punct::RightBracket),
        ]);
        assert_eq!(seq.render().unwrap(), "f (?)");
    }

    #[test]
    fn test_whitespace_after_equals_is_dropped() {
        let mut seq = FragmentSequence::new(Dialect::MySql);
        seq.append([column(&seq, "a"), Token::from(Punct::Equals)]);
        seq.append([Token::Whitespace, Token::Placeholder]);
        assert_eq!(seq.render().unwrap(), "`a`=?");
    }

    #[test]
    fn test_trailing_whitespace_before_comma_is_removed() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([column(&seq, "a"), Token::Whitespace]);
        seq.append([Token::from(Punct::Comma), column(&seq, "b")]);
        assert_eq!(seq.render().unwrap(), "a, b");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut seq = FragmentSequence::new(Dialect::MySql);
        seq.append([Token::Keyword(Keyword::DeleteFrom)]);
        seq.append([seq.quote_identifier(IdentKind::Table, "t").unwrap()]);
        let snapshot = seq.clone();
        let first = seq.render().unwrap();
        let second = seq.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "DELETE FROM `t`");
        assert_eq!(seq, snapshot);
    }

    #[test]
    fn test_unclosed_bracket_is_malformed() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::from(Punct::LeftBracket), Token::Placeholder]);
        assert!(matches!(
            seq.render(),
            Err(FreeSqlError::MalformedSequence { reason }) if reason == "1 unclosed bracket(s)"
        ));
    }

    #[test]
    fn test_stray_closing_bracket_is_malformed() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::from(Punct::RightBracket), Token::from(Punct::LeftBracket)]);
        assert!(matches!(
            seq.render(),
            Err(FreeSqlError::MalformedSequence { reason })
                if reason == "closing bracket at token 0 has no opener"
        ));
    }

    #[test]
    fn test_brackets_in_raw_text_are_ignored() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::RawText("WHERE (a = ?".into())]);
        assert_eq!(seq.render().unwrap(), "WHERE (a = ?");
    }

    #[test]
    fn test_placeholder_count_includes_raw_text() {
        let mut seq = FragmentSequence::new(Dialect::Generic);
        seq.append([Token::Placeholder, Token::from(Punct::Comma), Token::Placeholder]);
        seq.append([Token::RawText("WHERE id IN ?".into())]);
        assert_eq!(seq.placeholder_count(), 3);
    }

    #[test]
    fn test_clear_keeps_dialect() {
        let mut seq = FragmentSequence::new(Dialect::SqlServer);
        seq.append([Token::Keyword(Keyword::Set)]);
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.dialect(), Dialect::SqlServer);
        assert_eq!(seq.render().unwrap(), "");
    }
}
