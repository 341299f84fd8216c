use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[inline]
    pub fn sql(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Элемент ORDER BY. Порядок вывода определяет `priority` (по возрастанию),
/// а не позиция в списке — UI может переставлять без переиндексации.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderByClause {
    pub column: String,
    #[serde(default)]
    pub direction: OrderDirection,
    #[serde(default)]
    pub priority: i32,
}

impl OrderByClause {
    pub fn new<S: Into<String>>(column: S, direction: OrderDirection, priority: i32) -> Self {
        Self {
            column: column.into(),
            direction,
            priority,
        }
    }
}
