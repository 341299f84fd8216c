mod __tests__;
pub mod meta;
mod parse;
pub mod renderer;
mod saved;
pub mod state;
mod validate;

pub use parse::parse_sql;
pub use renderer::{escape_value, generate_sql, quote_ident, Dialect, UnknownDialect};
pub use saved::{Result as StoreResult, SavedQuery, SavedQueryStore, StoreError};
pub use state::{
    Aggregate, FilterCondition, FilterOperator, JoinClause, JoinType, LogicalOperator,
    OrderByClause, OrderDirection, QueryBuilderState, SelectColumn,
};
pub use validate::{validate, ValidationReport};
