//! Statement phase tracking for strict mode.

use core::fmt;

/// The statement shape opened by `insert_into`, `update` or `delete_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insert => "INSERT INTO",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE FROM",
        })
    }
}

/// How far a builder has progressed through a statement.
///
/// The phase is always tracked; it is only enforced when the builder runs in
/// strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing statement-shaped has been appended.
    #[default]
    Empty,
    /// A table has been named for the statement.
    TableNamed(Statement),
    /// The column list (`VALUES` or `SET`) has been appended.
    ColumnsAppended(Statement),
}

impl Phase {
    /// Returns true if `operation` may run in this phase under strict mode.
    #[must_use]
    pub const fn permits(self, operation: Operation) -> bool {
        match operation {
            Operation::InsertInto | Operation::Update | Operation::DeleteFrom => {
                matches!(self, Self::Empty)
            }
            Operation::Values => matches!(self, Self::TableNamed(Statement::Insert)),
            Operation::Set => matches!(self, Self::TableNamed(Statement::Update)),
        }
    }

    /// Returns the phase reached once `operation` succeeds.
    #[must_use]
    pub const fn reached_by(operation: Operation) -> Self {
        match operation {
            Operation::InsertInto => Self::TableNamed(Statement::Insert),
            Operation::Update => Self::TableNamed(Statement::Update),
            Operation::DeleteFrom => Self::TableNamed(Statement::Delete),
            Operation::Values => Self::ColumnsAppended(Statement::Insert),
            Operation::Set => Self::ColumnsAppended(Statement::Update),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("an empty builder"),
            Self::TableNamed(stmt) => write!(f, "{stmt} table"),
            Self::ColumnsAppended(stmt) => write!(f, "{stmt} columns"),
        }
    }
}

/// Statement-shape operations subject to phase checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    InsertInto,
    Values,
    DeleteFrom,
    Update,
    Set,
}

impl Operation {
    /// Returns the builder method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InsertInto => "insert_into",
            Self::Values => "values",
            Self::DeleteFrom => "delete_from",
            Self::Update => "update",
            Self::Set => "set",
        }
    }
}
