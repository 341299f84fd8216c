use serde::{Deserialize, Serialize};

/// Оператор сравнения в условии WHERE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
    #[serde(rename = "IS NULL")]
    IsNull,
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl FilterOperator {
    #[inline]
    pub fn sql(self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::NotEq => "!=",
            FilterOperator::Lt => "<",
            FilterOperator::Gt => ">",
            FilterOperator::LtEq => "<=",
            FilterOperator::GtEq => ">=",
            FilterOperator::Like => "LIKE",
            FilterOperator::NotLike => "NOT LIKE",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT IN",
            FilterOperator::IsNull => "IS NULL",
            FilterOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Оператор без значения справа (`IS [NOT] NULL`).
    #[inline]
    pub fn is_null_check(self) -> bool {
        matches!(self, FilterOperator::IsNull | FilterOperator::IsNotNull)
    }

    /// Оператор со списком значений (`IN`, `NOT IN`).
    #[inline]
    pub fn is_list(self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::NotIn)
    }
}

/// Связка условия со *следующим* в списке.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    #[inline]
    pub fn sql(self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

/// Одно условие WHERE. `value` хранится сырой строкой и экранируется только
/// при рендере; для `IN`/`NOT IN` это список через запятую.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub column: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: String,
    /// Связка со следующим условием; у последнего не печатается.
    #[serde(default)]
    pub logical_operator: Option<LogicalOperator>,
}

impl FilterCondition {
    pub fn new<C, V>(column: C, operator: FilterOperator, value: V) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            logical_operator: None,
        }
    }

    /// Задаёт связку со следующим условием (по умолчанию AND).
    #[inline]
    pub fn logical(mut self, op: LogicalOperator) -> Self {
        self.logical_operator = Some(op);
        self
    }
}
