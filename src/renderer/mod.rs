mod __tests__;
mod config;
mod ident;
mod select;
mod value;
mod writer;

pub use config::{Dialect, UnknownDialect};
pub use ident::quote_ident;
pub use value::escape_value;

use crate::state::QueryBuilderState;

/// High-level API: компиляция состояния билдера в текст SELECT.
///
/// Детерминированная чистая функция: одно и то же состояние даёт байт в байт
/// одинаковую строку. Состояние не проверяется — вызывающий обязан сначала
/// пройти `validate`.
pub fn generate_sql(state: &QueryBuilderState, dialect: Dialect) -> String {
    select::render_query(state, dialect)
}
