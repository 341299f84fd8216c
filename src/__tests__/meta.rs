use crate::meta::{suggest_joins, ColumnInfo, ForeignKeyRef};
use crate::state::JoinType;

fn column(name: &str, fk: Option<ForeignKeyRef>) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        data_type: "integer".to_string(),
        nullable: false,
        primary_key: name == "id",
        foreign_key: fk,
    }
}

#[test]
fn one_suggestion_per_foreign_key() {
    let columns = vec![
        column("id", None),
        column(
            "user_id",
            Some(ForeignKeyRef {
                table: "users".to_string(),
                column: "id".to_string(),
            }),
        ),
        column("total", None),
    ];

    let joins = suggest_joins("orders", &columns);
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].join_type, JoinType::Inner);
    assert_eq!(joins[0].table, "users");
    assert_eq!(joins[0].left_column, "orders.user_id");
    assert_eq!(joins[0].right_column, "users.id");
}

#[test]
fn no_foreign_keys_no_suggestions() {
    let columns = vec![column("id", None), column("name", None)];
    assert!(suggest_joins("users", &columns).is_empty());
}

#[test]
fn column_info_round_trips_through_json() {
    let col = column(
        "user_id",
        Some(ForeignKeyRef {
            table: "users".to_string(),
            column: "id".to_string(),
        }),
    );
    let json = serde_json::to_string(&col).expect("serialize");
    assert!(json.contains("\"dataType\""), "camelCase wire: {json}");
    assert!(json.contains("\"primaryKey\""), "camelCase wire: {json}");
    let back: ColumnInfo = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, col);
}
