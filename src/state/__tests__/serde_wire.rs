use crate::state::{
    Aggregate, FilterCondition, FilterOperator, OrderByClause, OrderDirection, QueryBuilderState,
    SelectColumn,
};

#[test]
fn state_round_trips_through_json() {
    let st = QueryBuilderState::new("users")
        .schema("public")
        .select(SelectColumn::new("id").aggregate(Aggregate::Count).aliased("total"))
        .filter(FilterCondition::new("age", FilterOperator::Gt, "25"))
        .order_by(OrderByClause::new("id", OrderDirection::Desc, 0))
        .limit(10);

    let json = serde_json::to_string(&st).expect("serialize");
    let back: QueryBuilderState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, st, "round-trip must preserve the state exactly");
}

#[test]
fn wire_format_is_camel_case_with_sql_operator_tags() {
    let st = QueryBuilderState::new("users")
        .select(SelectColumn::new("id"))
        .filter(FilterCondition::new("deleted_at", FilterOperator::IsNull, ""));

    let json = serde_json::to_string(&st).expect("serialize");
    // формат обмена с host-стороной: camelCase поля, операторы как в SQL
    assert!(json.contains("\"selectColumns\""), "got: {json}");
    assert!(json.contains("\"groupBy\""), "got: {json}");
    assert!(json.contains("\"IS NULL\""), "got: {json}");
    assert!(json.contains("\"logicalOperator\""), "got: {json}");
}

#[test]
fn partial_json_fills_defaults() {
    let st: QueryBuilderState = serde_json::from_str(r#"{"table":"logs"}"#).expect("deserialize");
    assert_eq!(st.table, "logs");
    assert!(st.filters.is_empty());
    assert_eq!(st.limit, None);
    assert!(!st.distinct);
}

#[test]
fn enum_tags_match_the_ui_strings() {
    let json = serde_json::to_string(&Aggregate::Count).expect("serialize");
    assert_eq!(json, "\"COUNT\"");
    let json = serde_json::to_string(&OrderDirection::Desc).expect("serialize");
    assert_eq!(json, "\"DESC\"");
    let op: FilterOperator = serde_json::from_str("\"NOT IN\"").expect("deserialize");
    assert_eq!(op, FilterOperator::NotIn);
}
