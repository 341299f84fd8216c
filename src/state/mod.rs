mod __tests__;
mod column;
mod filter;
mod join;
mod order;

pub use column::{Aggregate, SelectColumn};
pub use filter::{FilterCondition, FilterOperator, LogicalOperator};
pub use join::{JoinClause, JoinType};
pub use order::{OrderByClause, OrderDirection};

use serde::{Deserialize, Serialize};

/// Полное сериализуемое описание одного SELECT в процессе сборки.
///
/// Чистые данные: без ссылок на живое соединение, можно сериализовать,
/// сохранить и воспроизвести. Компиляция (`generate_sql`) и проверка
/// (`validate`) — независимые чистые функции над этим состоянием.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryBuilderState {
    pub table: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub distinct: bool,
    /// Пустой список означает `SELECT *`.
    #[serde(default)]
    pub select_columns: Vec<SelectColumn>,
    /// Условия WHERE; порядок значим — рендер последовательный, не дерево.
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
    #[serde(default)]
    pub joins: Vec<JoinClause>,
    #[serde(default)]
    pub order_by: Vec<OrderByClause>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl QueryBuilderState {
    /// Пустое состояние для таблицы: проекция по умолчанию `*`, без условий.
    pub fn new<S: Into<String>>(table: S) -> Self {
        Self {
            table: table.into(),
            schema: None,
            distinct: false,
            select_columns: Vec::new(),
            filters: Vec::new(),
            joins: Vec::new(),
            order_by: Vec::new(),
            group_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Схема (namespace) для FROM; печатается только диалектом со схемами.
    pub fn schema<S: Into<String>>(mut self, schema: S) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[inline]
    pub fn distinct(mut self, on: bool) -> Self {
        self.distinct = on;
        self
    }

    /// Добавляет колонку в проекцию.
    pub fn select(mut self, column: SelectColumn) -> Self {
        self.select_columns.push(column);
        self
    }

    /// Добавляет условие WHERE в конец списка.
    pub fn filter(mut self, filter: FilterCondition) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    pub fn order_by(mut self, order: OrderByClause) -> Self {
        self.order_by.push(order);
        self
    }

    pub fn group_by<S: Into<String>>(mut self, column: S) -> Self {
        self.group_by.push(column.into());
        self
    }

    /// LIMIT <n>
    #[inline]
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// OFFSET <n>
    #[inline]
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }
}

impl Default for QueryBuilderState {
    fn default() -> Self {
        Self::new("")
    }
}
