use crate::renderer::{generate_sql, Dialect};
use crate::state::{
    FilterCondition, FilterOperator, JoinClause, JoinType, LogicalOperator, OrderByClause,
    OrderDirection, QueryBuilderState,
};

#[test]
fn simple_filtered_select_postgres() {
    let st = QueryBuilderState::new("users").filter(FilterCondition::new(
        "age",
        FilterOperator::Gt,
        "25",
    ));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert_eq!(sql, "SELECT *\nFROM \"users\"\nWHERE \"age\" > 25;");
}

#[test]
fn in_list_values_trimmed_and_quoted_independently() {
    let st = QueryBuilderState::new("users").filter(FilterCondition::new(
        "status",
        FilterOperator::In,
        "active, pending",
    ));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(
        sql.contains("\"status\" IN ('active', 'pending')"),
        "each piece must be trimmed and quoted on its own, got:\n{sql}"
    );
}

#[test]
fn null_check_operator_emits_no_value() {
    let st = QueryBuilderState::new("users").filter(FilterCondition::new(
        "deleted_at",
        FilterOperator::IsNull,
        "",
    ));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(
        sql.contains("WHERE \"deleted_at\" IS NULL;"),
        "no value token after IS NULL, got:\n{sql}"
    );
}

#[test]
fn logical_operator_glues_to_the_next_condition() {
    let st = QueryBuilderState::new("users")
        .filter(
            FilterCondition::new("age", FilterOperator::GtEq, "18")
                .logical(LogicalOperator::Or),
        )
        .filter(FilterCondition::new("vip", FilterOperator::Eq, "1"));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(
        sql.contains("WHERE \"age\" >= 18 OR \"vip\" = 1;"),
        "got:\n{sql}"
    );
}

#[test]
fn last_logical_operator_is_never_emitted() {
    // связка у последнего условия игнорируется
    let st = QueryBuilderState::new("users").filter(
        FilterCondition::new("age", FilterOperator::Gt, "25").logical(LogicalOperator::Or),
    );
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(!sql.contains("OR"), "dangling OR in:\n{sql}");
}

#[test]
fn missing_logical_operator_defaults_to_and() {
    let st = QueryBuilderState::new("users")
        .filter(FilterCondition::new("a", FilterOperator::Eq, "1"))
        .filter(FilterCondition::new("b", FilterOperator::Eq, "2"));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(sql.contains("\"a\" = 1 AND \"b\" = 2"), "got:\n{sql}");
}

#[test]
fn joins_render_one_line_each() {
    let st = QueryBuilderState::new("orders")
        .join(JoinClause::new(JoinType::Left, "users", "orders.user_id", "users.id"))
        .join(JoinClause::new(JoinType::Inner, "items", "orders.id", "items.order_id"))
        .limit(1);
    let sql = generate_sql(&st, Dialect::Postgres);
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(
        lines[2],
        "LEFT JOIN \"users\" ON \"orders\".\"user_id\" = \"users\".\"id\""
    );
    assert_eq!(
        lines[3],
        "INNER JOIN \"items\" ON \"orders\".\"id\" = \"items\".\"order_id\""
    );
}

#[test]
fn schema_prefix_only_for_postgres() {
    let st = QueryBuilderState::new("events").schema("analytics");
    let pg = generate_sql(&st, Dialect::Postgres);
    assert!(pg.contains("FROM \"analytics\".\"events\""), "got:\n{pg}");

    // MySQL-диалект схемы не печатает
    let my = generate_sql(&st, Dialect::MySql);
    assert!(my.contains("FROM `events`"), "got:\n{my}");
    assert!(!my.contains("analytics"), "got:\n{my}");
}

#[test]
fn group_by_quotes_each_column() {
    let st = QueryBuilderState::new("orders").group_by("status").group_by("user_id");
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(
        sql.contains("GROUP BY \"status\", \"user_id\""),
        "got:\n{sql}"
    );
}

#[test]
fn order_by_follows_priority_not_insertion_order() {
    let st = QueryBuilderState::new("users")
        .order_by(OrderByClause::new("name", OrderDirection::Asc, 2))
        .order_by(OrderByClause::new("age", OrderDirection::Desc, 1));
    let sql = generate_sql(&st, Dialect::Postgres);
    assert!(
        sql.contains("ORDER BY \"age\" DESC, \"name\" ASC"),
        "priority must win over insertion order, got:\n{sql}"
    );
}

#[test]
fn order_by_permutation_with_fixed_priorities_is_invariant() {
    let a = QueryBuilderState::new("users")
        .order_by(OrderByClause::new("a", OrderDirection::Asc, 1))
        .order_by(OrderByClause::new("b", OrderDirection::Asc, 2))
        .order_by(OrderByClause::new("c", OrderDirection::Asc, 3));
    let b = QueryBuilderState::new("users")
        .order_by(OrderByClause::new("c", OrderDirection::Asc, 3))
        .order_by(OrderByClause::new("a", OrderDirection::Asc, 1))
        .order_by(OrderByClause::new("b", OrderDirection::Asc, 2));
    assert_eq!(
        generate_sql(&a, Dialect::Postgres),
        generate_sql(&b, Dialect::Postgres)
    );
}

#[test]
fn limit_and_offset_are_separate_lines() {
    let st = QueryBuilderState::new("users").limit(10).offset(20);
    let sql = generate_sql(&st, Dialect::MySql);
    assert!(sql.contains("\nLIMIT 10\nOFFSET 20;"), "got:\n{sql}");
}

#[test]
fn clause_order_is_fixed() {
    let st = QueryBuilderState::new("orders")
        .join(JoinClause::new(JoinType::Inner, "users", "orders.user_id", "users.id"))
        .filter(FilterCondition::new("total", FilterOperator::Gt, "0"))
        .group_by("status")
        .order_by(OrderByClause::new("status", OrderDirection::Asc, 0))
        .limit(5)
        .offset(10);
    let sql = generate_sql(&st, Dialect::Postgres);

    let pos = |needle: &str| sql.find(needle).unwrap_or_else(|| panic!("{needle} missing in:\n{sql}"));
    assert!(pos("SELECT") < pos("FROM"));
    assert!(pos("FROM") < pos("JOIN"));
    assert!(pos("JOIN") < pos("WHERE"));
    assert!(pos("WHERE") < pos("GROUP BY"));
    assert!(pos("GROUP BY") < pos("ORDER BY"));
    assert!(pos("ORDER BY") < pos("LIMIT"));
    assert!(pos("LIMIT") < pos("OFFSET"));
    assert!(sql.ends_with(';'), "statement must end with `;`: {sql}");
}

#[test]
fn generate_sql_is_idempotent() {
    let st = QueryBuilderState::new("users")
        .filter(FilterCondition::new("age", FilterOperator::Gt, "25"))
        .order_by(OrderByClause::new("age", OrderDirection::Asc, 0))
        .limit(3);
    let first = generate_sql(&st, Dialect::Postgres);
    let second = generate_sql(&st, Dialect::Postgres);
    assert_eq!(first, second, "same state must give byte-identical SQL");
}
