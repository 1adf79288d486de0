//! Identifier quoting per dialect.

mod common;
use common::*;

use freesql_core::{BuilderOptions, Dialect, FreeSqlBuilder, IdentKind, QuoteRule};

#[test]
fn same_statement_across_dialects() {
    let expected = [
        (Dialect::Generic, "INSERT INTO users (id) VALUES (?)"),
        (Dialect::MySql, "INSERT INTO `users` (`id`) VALUES (?)"),
        (Dialect::SqlServer, "INSERT INTO [users] ([id]) VALUES (?)"),
        (Dialect::Oracle, "INSERT INTO \"users\" (\"id\") VALUES (?)"),
        (Dialect::PostgreSql, "INSERT INTO \"users\" (\"id\") VALUES (?)"),
        (Dialect::Sqlite, "INSERT INTO \"users\" (\"id\") VALUES (?)"),
    ];
    for (dialect, sql) in expected {
        let built = build(dialect, |b| {
            b.insert_into("users")?.values(["id"])?;
            Ok(())
        });
        assert_eq!(built.sql, sql, "dialect {dialect}");
    }
}

#[test]
fn quoting_is_deterministic() {
    let names = ["id", "user name", "Mixed_Case", "a`b", "x]y", "q\"r", "ünïcödé"];
    for dialect in Dialect::ALL {
        for name in names {
            let b1 = FreeSqlBuilder::new(dialect);
            let b2 = FreeSqlBuilder::new(dialect);
            let t1 = b1.quote_identifier(IdentKind::Column, name).unwrap();
            let t2 = b2.quote_identifier(IdentKind::Column, name).unwrap();
            assert_eq!(t1.to_sql(dialect), t2.to_sql(dialect));
            assert_eq!(t1.to_sql(dialect), dialect.quote_identifier(name));
        }
    }
}

#[test]
fn table_and_column_quote_alike() {
    for dialect in Dialect::ALL {
        let b = FreeSqlBuilder::new(dialect);
        let table = b.quote_identifier(IdentKind::Table, "orders").unwrap();
        let column = b.quote_identifier(IdentKind::Column, "orders").unwrap();
        assert_eq!(table.to_sql(dialect), column.to_sql(dialect));
    }
}

#[test]
fn quote_rules() {
    assert_eq!(Dialect::Generic.quote_rule(), QuoteRule::None);
    assert_eq!(Dialect::MySql.quote_rule(), QuoteRule::Backtick);
    assert_eq!(Dialect::SqlServer.quote_rule(), QuoteRule::Brackets);
    assert_eq!(Dialect::PostgreSql.quote_rule(), QuoteRule::DoubleQuote);
    assert_eq!(QuoteRule::Brackets.delimiters(), Some(('[', ']')));
    assert_eq!(QuoteRule::None.delimiters(), None);
}

#[test]
fn blank_identifiers_fail_in_every_dialect() {
    for dialect in Dialect::ALL {
        let mut b = FreeSqlBuilder::new(dialect);
        assert!(b.insert_into(" ").is_err());
        assert!(b.update("").is_err());
        assert!(b.delete_from("\n").is_err());
        assert!(b.values(["ok", ""]).is_err());
        assert!(b.set([" "]).is_err());
        assert!(b.is_empty());
    }
}

#[test]
fn options_select_dialect() {
    let options: BuilderOptions = serde_json::from_str(r#"{ "dialect": "sqlserver" }"#).unwrap();
    let mut b = FreeSqlBuilder::with_options(options);
    b.delete_from("logs").unwrap();
    assert_eq!(b.render().unwrap(), "DELETE FROM [logs]");
}
