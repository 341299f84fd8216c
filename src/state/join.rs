use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    #[inline]
    pub fn sql(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
        }
    }
}

/// `<TYPE> JOIN <table> ON <left> = <right>` — всегда одно условие ON,
/// составные связки не поддерживаются.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClause {
    pub table: String,
    #[serde(rename = "type")]
    pub join_type: JoinType,
    pub left_column: String,
    pub right_column: String,
}

impl JoinClause {
    pub fn new<T, L, R>(join_type: JoinType, table: T, left_column: L, right_column: R) -> Self
    where
        T: Into<String>,
        L: Into<String>,
        R: Into<String>,
    {
        Self {
            table: table.into(),
            join_type,
            left_column: left_column.into(),
            right_column: right_column.into(),
        }
    }
}
