use serde::{Deserialize, Serialize};

use crate::state::{JoinClause, JoinType};

/// Колонка из интроспекции схемы. Компилятор эти данные не читает — ими
/// питаются список колонок и подсказки джойнов на стороне UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    #[serde(default)]
    pub foreign_key: Option<ForeignKeyRef>,
}

/// Куда ссылается внешний ключ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

/// По внешним ключам таблицы предлагает INNER JOIN на целевую таблицу,
/// по одному на FK-колонку.
pub fn suggest_joins(table: &str, columns: &[ColumnInfo]) -> Vec<JoinClause> {
    columns
        .iter()
        .filter_map(|col| {
            let fk = col.foreign_key.as_ref()?;
            Some(JoinClause::new(
                JoinType::Inner,
                fk.table.clone(),
                format!("{}.{}", table, col.name),
                format!("{}.{}", fk.table, fk.column),
            ))
        })
        .collect()
}
