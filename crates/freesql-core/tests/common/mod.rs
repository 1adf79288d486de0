#![allow(dead_code)]

use freesql_core::{BuiltSql, Dialect, FreeSqlBuilder, Result};

/// Runs `f` on a fresh builder and returns the built statement.
pub fn build(dialect: Dialect, f: impl FnOnce(&mut FreeSqlBuilder) -> Result<()>) -> BuiltSql {
    let mut b = FreeSqlBuilder::new(dialect);
    f(&mut b).unwrap_or_else(|e| panic!("Failed to assemble ({dialect}): {e}"));
    b.build()
        .unwrap_or_else(|e| panic!("Failed to render ({dialect}): {e}"))
}

/// Same as [`build`] for the unquoted dialect, returning only the SQL.
pub fn sql(f: impl FnOnce(&mut FreeSqlBuilder) -> Result<()>) -> String {
    build(Dialect::Generic, f).sql
}

/// Column names `c0`, `c1`, ... `c{n-1}`.
pub fn columns(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

/// Number of `?` markers in rendered SQL.
pub fn markers(sql: &str) -> usize {
    sql.matches('?').count()
}

/// Asserts there is no doubled space and no comma directly before a
/// closing bracket or at the end of the text.
pub fn assert_clean_separators(sql: &str) {
    assert!(!sql.contains("  "), "Doubled whitespace in: {sql}");
    assert!(!sql.contains(", )"), "Trailing comma in list: {sql}");
    assert!(!sql.contains(",)"), "Trailing comma in list: {sql}");
    assert!(!sql.trim_end().ends_with(','), "Trailing comma: {sql}");
}
