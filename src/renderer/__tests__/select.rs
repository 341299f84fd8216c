use crate::renderer::{generate_sql, Dialect};
use crate::state::{Aggregate, QueryBuilderState, SelectColumn};

fn first_line(sql: &str) -> String {
    sql.lines().next().expect("non-empty sql").to_string()
}

#[test]
fn empty_projection_renders_star() {
    let st = QueryBuilderState::new("users");
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first_line(&sql), "SELECT *");
}

#[test]
fn distinct_star() {
    let st = QueryBuilderState::new("users").distinct(true);
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first_line(&sql), "SELECT DISTINCT *");
}

#[test]
fn columns_joined_with_comma() {
    let st = QueryBuilderState::new("users")
        .select(SelectColumn::new("id"))
        .select(SelectColumn::new("name"));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first_line(&sql), "SELECT \"id\", \"name\"");
}

#[test]
fn aggregate_wraps_quoted_column() {
    let st = QueryBuilderState::new("orders")
        .select(SelectColumn::new("total").aggregate(Aggregate::Sum));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first_line(&sql), "SELECT SUM(\"total\")");
}

#[test]
fn alias_appended_after_aggregate() {
    let st = QueryBuilderState::new("orders")
        .select(SelectColumn::new("id").aggregate(Aggregate::Count).aliased("total"));
    let sql = generate_sql(&st, Dialect::MySql);
    assert_eq!(first_line(&sql), "SELECT COUNT(`id`) AS `total`");
}

#[test]
fn count_star_is_not_quoted() {
    let st = QueryBuilderState::new("orders")
        .select(SelectColumn::new("*").aggregate(Aggregate::Count));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first_line(&sql), "SELECT COUNT(*)");
}
