use crate::state::{
    FilterCondition, JoinClause, LogicalOperator, OrderByClause, QueryBuilderState, SelectColumn,
};

use super::config::Dialect;
use super::ident::{quote_ident, quote_path};
use super::value::escape_value;
use super::writer::SqlWriter;

/// Рендер всего запроса: фиксированный порядок SELECT, FROM, JOIN*, WHERE*,
/// GROUP BY*, ORDER BY*, LIMIT*, OFFSET* (звёздочные — только при непустом
/// источнике), клаузы через перевод строки, в конце `;`.
///
/// Никакой валидации: на невалидном состоянии честно печатается мусорный SQL,
/// проверка — забота `validate` до вызова.
pub(super) fn render_query(state: &QueryBuilderState, dialect: Dialect) -> String {
    let mut w = SqlWriter::new(128);

    push_select_clause(&mut w, state, dialect);

    w.push_char('\n');
    push_from_clause(&mut w, state, dialect);

    for join in &state.joins {
        w.push_char('\n');
        push_join(&mut w, join, dialect);
    }

    if !state.filters.is_empty() {
        w.push_char('\n');
        push_where_clause(&mut w, &state.filters, dialect);
    }

    if !state.group_by.is_empty() {
        w.push_char('\n');
        push_group_by_clause(&mut w, &state.group_by, dialect);
    }

    if !state.order_by.is_empty() {
        w.push_char('\n');
        push_order_by_clause(&mut w, &state.order_by, dialect);
    }

    if let Some(n) = state.limit {
        w.push("\nLIMIT ");
        w.push_i64(n);
    }
    if let Some(n) = state.offset {
        w.push("\nOFFSET ");
        w.push_i64(n);
    }

    w.push_char(';');
    w.finish()
}

fn push_select_clause(w: &mut SqlWriter, state: &QueryBuilderState, dialect: Dialect) {
    w.push("SELECT ");
    if state.distinct {
        w.push("DISTINCT ");
    }

    // пустая проекция = все колонки
    if state.select_columns.is_empty() {
        w.push_char('*');
        return;
    }

    for (i, col) in state.select_columns.iter().enumerate() {
        w.push_sep(i, ", ");
        push_select_column(w, col, dialect);
    }
}

fn push_select_column(w: &mut SqlWriter, col: &SelectColumn, dialect: Dialect) {
    let expr = quote_path(&col.column, dialect);
    match col.aggregate.sql_name() {
        Some(func) => {
            w.push(func);
            w.push_char('(');
            w.push(expr);
            w.push_char(')');
        }
        None => w.push(expr),
    }
    if let Some(alias) = &col.alias {
        w.push(" AS ");
        w.push(quote_ident(alias, dialect));
    }
}

fn push_from_clause(w: &mut SqlWriter, state: &QueryBuilderState, dialect: Dialect) {
    w.push("FROM ");
    if dialect.supports_schema() {
        if let Some(schema) = state.schema.as_deref().filter(|s| !s.is_empty()) {
            w.push(quote_ident(schema, dialect));
            w.push_char('.');
        }
    }
    w.push(quote_ident(&state.table, dialect));
}

fn push_join(w: &mut SqlWriter, join: &JoinClause, dialect: Dialect) {
    w.push(join.join_type.sql());
    w.push(" JOIN ");
    w.push(quote_ident(&join.table, dialect));
    w.push(" ON ");
    w.push(quote_path(&join.left_column, dialect));
    w.push(" = ");
    w.push(quote_path(&join.right_column, dialect));
}

fn push_where_clause(w: &mut SqlWriter, filters: &[FilterCondition], dialect: Dialect) {
    w.push("WHERE ");
    for (i, f) in filters.iter().enumerate() {
        if i > 0 {
            w.push_char(' ');
        }
        push_filter(w, f, dialect);
        // связка печатается после каждого элемента, кроме последнего
        if i + 1 < filters.len() {
            w.push_char(' ');
            w.push(f.logical_operator.unwrap_or(LogicalOperator::And).sql());
        }
    }
}

fn push_filter(w: &mut SqlWriter, f: &FilterCondition, dialect: Dialect) {
    w.push(quote_path(&f.column, dialect));
    w.push_char(' ');
    w.push(f.operator.sql());

    if f.operator.is_null_check() {
        return;
    }

    if f.operator.is_list() {
        // "a, b, c" → ('a', 'b', 'c'): каждое значение обрезается и
        // экранируется независимо
        w.push(" (");
        for (i, piece) in f.value.split(',').enumerate() {
            w.push_sep(i, ", ");
            w.push(escape_value(piece.trim()));
        }
        w.push_char(')');
        return;
    }

    w.push_char(' ');
    w.push(escape_value(&f.value));
}

fn push_group_by_clause(w: &mut SqlWriter, group_by: &[String], dialect: Dialect) {
    w.push("GROUP BY ");
    for (i, col) in group_by.iter().enumerate() {
        w.push_sep(i, ", ");
        w.push(quote_path(col, dialect));
    }
}

fn push_order_by_clause(w: &mut SqlWriter, order_by: &[OrderByClause], dialect: Dialect) {
    // порядок вывода задаёт priority, не позиция в списке; сортировка
    // стабильная, чтобы равные приоритеты сохраняли порядок вставки
    let mut items: Vec<&OrderByClause> = order_by.iter().collect();
    items.sort_by_key(|o| o.priority);

    w.push("ORDER BY ");
    for (i, o) in items.iter().enumerate() {
        w.push_sep(i, ", ");
        w.push(quote_path(&o.column, dialect));
        w.push_char(' ');
        w.push(o.direction.sql());
    }
}
