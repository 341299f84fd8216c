use std::fmt::Display;
use std::str::FromStr;

/// Поддерживаемые диалекты. Вся диалектная логика (символ квотирования,
/// схемы в FROM) сосредоточена здесь, а не размазана по рендерам.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Postgres,
}

impl Dialect {
    /// Символ квотирования идентификаторов: `` ` `` или `"`.
    #[inline]
    pub fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Postgres => '"',
        }
    }

    /// Печатать ли префикс схемы в FROM.
    #[inline]
    pub fn supports_schema(self) -> bool {
        matches!(self, Dialect::Postgres)
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySql => write!(f, "mysql"),
            Dialect::Postgres => write!(f, "postgresql"),
        }
    }
}

/// Тег диалекта не из набора `mysql` / `postgresql`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown dialect tag: {tag}")]
pub struct UnknownDialect {
    pub tag: String,
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Dialect::MySql),
            "postgresql" => Ok(Dialect::Postgres),
            other => Err(UnknownDialect {
                tag: other.to_string(),
            }),
        }
    }
}
