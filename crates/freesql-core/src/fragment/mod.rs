//! Fragment engine.
//!
//! A [`FragmentSequence`] owns an ordered list of [`Token`]s and the
//! [`Dialect`](crate::Dialect) used to render them. The statement builders in
//! [`crate::builder`] are thin layers over this module.

mod sequence;
mod token;

pub use sequence::FragmentSequence;
pub use token::{Ident, IdentKind, Keyword, Punct, Token};
