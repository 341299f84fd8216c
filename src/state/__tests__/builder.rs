use crate::state::{
    Aggregate, FilterCondition, FilterOperator, JoinClause, JoinType, LogicalOperator,
    OrderByClause, OrderDirection, QueryBuilderState, SelectColumn,
};

#[test]
fn new_state_is_empty_projection() {
    let st = QueryBuilderState::new("users");
    assert_eq!(st.table, "users");
    assert!(st.schema.is_none());
    assert!(!st.distinct);
    assert!(st.select_columns.is_empty(), "empty projection means SELECT *");
    assert!(st.filters.is_empty());
    assert!(st.joins.is_empty());
    assert!(st.order_by.is_empty());
    assert!(st.group_by.is_empty());
    assert_eq!(st.limit, None);
    assert_eq!(st.offset, None);
}

#[test]
fn fluent_mutators_accumulate_in_order() {
    let st = QueryBuilderState::new("orders")
        .schema("shop")
        .distinct(true)
        .select(SelectColumn::new("id"))
        .select(SelectColumn::new("total").aggregate(Aggregate::Sum).aliased("sum_total"))
        .filter(FilterCondition::new("status", FilterOperator::Eq, "paid").logical(LogicalOperator::Or))
        .filter(FilterCondition::new("archived", FilterOperator::IsNull, ""))
        .join(JoinClause::new(JoinType::Left, "users", "orders.user_id", "users.id"))
        .order_by(OrderByClause::new("total", OrderDirection::Desc, 1))
        .group_by("status")
        .limit(50)
        .offset(100);

    assert_eq!(st.schema.as_deref(), Some("shop"));
    assert!(st.distinct);
    assert_eq!(st.select_columns.len(), 2);
    assert_eq!(st.select_columns[1].alias.as_deref(), Some("sum_total"));
    assert_eq!(st.select_columns[1].aggregate, Aggregate::Sum);
    assert_eq!(st.filters.len(), 2);
    assert_eq!(st.filters[0].logical_operator, Some(LogicalOperator::Or));
    assert_eq!(st.filters[1].logical_operator, None);
    assert_eq!(st.joins[0].join_type, JoinType::Left);
    assert_eq!(st.order_by[0].priority, 1);
    assert_eq!(st.group_by, vec!["status".to_string()]);
    assert_eq!(st.limit, Some(50));
    assert_eq!(st.offset, Some(100));
}

#[test]
fn default_state_has_empty_table() {
    // валидатор такое пометит, но конструируется без паники
    let st = QueryBuilderState::default();
    assert_eq!(st.table, "");
}

#[test]
fn operator_helpers() {
    assert!(FilterOperator::IsNull.is_null_check());
    assert!(FilterOperator::IsNotNull.is_null_check());
    assert!(!FilterOperator::Eq.is_null_check());
    assert!(FilterOperator::In.is_list());
    assert!(FilterOperator::NotIn.is_list());
    assert!(!FilterOperator::Like.is_list());
    assert_eq!(FilterOperator::NotLike.sql(), "NOT LIKE");
}

#[test]
fn aggregate_sql_names() {
    assert_eq!(Aggregate::None.sql_name(), None);
    assert_eq!(Aggregate::Count.sql_name(), Some("COUNT"));
    assert_eq!(Aggregate::Max.sql_name(), Some("MAX"));
}
