//! # freesql-core
//!
//! A free-form SQL fragment assembler.
//!
//! This crate provides:
//! - A fragment engine that accumulates SQL tokens and manages separators
//!   and dialect-aware identifier quoting
//! - Statement builders for INSERT, UPDATE and DELETE on top of it, plus a
//!   raw template escape hatch
//! - Positional `?` placeholders whose count is reported alongside the SQL
//!
//! It never parses SQL. Templates are appended verbatim.
//!
//! ## Example
//!
//! ```rust
//! use freesql_core::{Dialect, FreeSqlBuilder};
//!
//! let mut b = FreeSqlBuilder::new(Dialect::MySql);
//! b.insert_into("users")?.values(["id", "name"])?;
//!
//! let (sql, placeholders) = b.build()?.into_parts();
//! assert_eq!(sql, "INSERT INTO `users` (`id`, `name`) VALUES (?, ?)");
//! assert_eq!(placeholders, 2);
//! # Ok::<(), freesql_core::FreeSqlError>(())
//! ```
//!
//! ## IN clauses
//!
//! An `IN` list is always written with a single placeholder, however many
//! values are bound at execution time:
//!
//! ```rust
//! use freesql_core::{Dialect, FreeSqlBuilder};
//!
//! let mut b = FreeSqlBuilder::new(Dialect::Generic);
//! b.delete_from("users")?.set_template("WHERE id IN ?");
//! assert_eq!(b.render()?, "DELETE FROM users WHERE id IN ?");
//! # Ok::<(), freesql_core::FreeSqlError>(())
//! ```

pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod fragment;

pub use builder::{BuiltSql, FreeSqlBuilder, IntoTable, Phase, Table};
pub use config::BuilderOptions;
pub use dialect::{Dialect, QuoteRule};
pub use error::{FreeSqlError, Result};
pub use fragment::{FragmentSequence, IdentKind, Token};
