//! Statement builders.
//!
//! [`FreeSqlBuilder`] layers statement-shaped operations over one
//! [`FragmentSequence`](crate::fragment::FragmentSequence).
//!
//! # Example
//!
//! ```rust
//! use freesql_core::builder::FreeSqlBuilder;
//! use freesql_core::Dialect;
//!
//! let mut b = FreeSqlBuilder::new(Dialect::Generic);
//! b.update("users")?.set(["name", "age"])?.set_template("WHERE id IN ?");
//!
//! let built = b.build()?;
//! assert_eq!(built.sql, "UPDATE users SET name=?, age=? WHERE id IN ?");
//! assert_eq!(built.placeholder_count, 3);
//! # Ok::<(), freesql_core::FreeSqlError>(())
//! ```

mod built;
mod delete;
mod free;
mod insert;
mod phase;
mod table;
mod update;

pub use built::BuiltSql;
pub use free::FreeSqlBuilder;
pub use phase::{Operation, Phase, Statement};
pub use table::{IntoTable, Table};
