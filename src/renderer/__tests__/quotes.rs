use std::str::FromStr;

use crate::renderer::config::Dialect;
use crate::renderer::ident::{quote_ident, quote_path};

#[test]
fn mysql_uses_backticks() {
    assert_eq!(quote_ident("users", Dialect::MySql), "`users`");
}

#[test]
fn postgres_uses_double_quotes() {
    assert_eq!(quote_ident("users", Dialect::Postgres), "\"users\"");
}

#[test]
fn embedded_quote_is_doubled_not_backslashed() {
    assert_eq!(quote_ident("we\"ird", Dialect::Postgres), "\"we\"\"ird\"");
    assert_eq!(quote_ident("we`ird", Dialect::MySql), "`we``ird`");
    // чужая кавычка не трогается
    assert_eq!(quote_ident("we`ird", Dialect::Postgres), "\"we`ird\"");
}

#[test]
fn empty_identifier_still_quoted() {
    assert_eq!(quote_ident("", Dialect::Postgres), "\"\"");
}

#[test]
fn dotted_path_quotes_each_part() {
    assert_eq!(
        quote_path("users.id", Dialect::Postgres),
        "\"users\".\"id\""
    );
    assert_eq!(quote_path("users.id", Dialect::MySql), "`users`.`id`");
}

#[test]
fn star_passes_through_unquoted() {
    assert_eq!(quote_path("*", Dialect::Postgres), "*");
    assert_eq!(quote_path("t.*", Dialect::MySql), "`t`.*");
}

#[test]
fn dialect_tags_parse_and_display() {
    assert_eq!(Dialect::from_str("mysql").expect("mysql tag"), Dialect::MySql);
    assert_eq!(
        Dialect::from_str("postgresql").expect("postgresql tag"),
        Dialect::Postgres
    );
    assert_eq!(Dialect::Postgres.to_string(), "postgresql");

    let err = Dialect::from_str("sqlite").expect_err("unsupported tag");
    assert_eq!(err.tag, "sqlite");
}
