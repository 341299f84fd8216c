use serde::{Deserialize, Serialize};

/// Агрегатная функция над колонкой проекции.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregate {
    #[default]
    None,
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregate {
    /// Имя SQL-функции; `None` для неагрегированной колонки.
    #[inline]
    pub fn sql_name(self) -> Option<&'static str> {
        match self {
            Aggregate::None => None,
            Aggregate::Count => Some("COUNT"),
            Aggregate::Sum => Some("SUM"),
            Aggregate::Avg => Some("AVG"),
            Aggregate::Min => Some("MIN"),
            Aggregate::Max => Some("MAX"),
        }
    }
}

/// Одна колонка проекции: `col`, `AGG(col)`, `col AS alias`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectColumn {
    pub column: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub aggregate: Aggregate,
}

impl SelectColumn {
    pub fn new<S: Into<String>>(column: S) -> Self {
        Self {
            column: column.into(),
            alias: None,
            aggregate: Aggregate::None,
        }
    }

    /// `... AS <alias>`
    pub fn aliased<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Оборачивает колонку в агрегатную функцию.
    #[inline]
    pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = aggregate;
        self
    }
}
