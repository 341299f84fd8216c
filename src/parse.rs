use sqlparser::ast::{
    Distinct, Expr, LimitClause, ObjectName, ObjectNamePart, SetExpr, Statement, TableFactor,
    UnaryOperator, Value,
};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

use crate::state::QueryBuilderState;

/// Грубое обратное преобразование: из готового SQL восстанавливаются только
/// таблица, схема, DISTINCT и LIMIT/OFFSET. Фильтры, джойны и сортировка не
/// реконструируются.
///
/// Контракт: на любом неразборчивом входе — `None`, никогда не паника и не
/// ошибка; вызывающие опираются на это, чтобы молча пропустить
/// реконструкцию.
pub fn parse_sql(sql: &str, schema_hint: Option<&str>) -> Option<QueryBuilderState> {
    let dialect = GenericDialect {};
    let stmts = Parser::parse_sql(&dialect, sql).ok()?;

    let query = match stmts.into_iter().next()? {
        Statement::Query(q) => q,
        _ => return None,
    };

    let select = match &*query.body {
        SetExpr::Select(s) => s,
        _ => return None,
    };

    // FROM: берём первую таблицу; без неё восстанавливать нечего
    let twj = select.from.first()?;
    let (schema, table) = match &twj.relation {
        TableFactor::Table { name, .. } => split_object_name(name)?,
        _ => return None,
    };

    let mut state = QueryBuilderState::new(table);
    // явный квалификатор в самом SQL важнее подсказки
    state.schema = schema.or_else(|| schema_hint.map(str::to_string));
    state.distinct = matches!(select.distinct, Some(Distinct::Distinct));

    if let Some(clause) = query.limit_clause.as_ref() {
        match clause {
            LimitClause::LimitOffset { limit, offset, .. } => {
                if let Some(e) = limit {
                    state.limit = literal_i64(e);
                }
                if let Some(o) = offset {
                    state.offset = literal_i64(&o.value);
                }
            }
            LimitClause::OffsetCommaLimit { offset, limit } => {
                state.offset = literal_i64(offset);
                state.limit = literal_i64(limit);
            }
        }
    }

    Some(state)
}

/// `schema.table` → (Some(schema), table); одиночное имя → (None, table).
/// У более длинных путей (catalog.schema.table) берём два последних звена.
fn split_object_name(name: &ObjectName) -> Option<(Option<String>, String)> {
    let mut parts = Vec::with_capacity(name.0.len());
    for part in &name.0 {
        match part {
            ObjectNamePart::Identifier(id) => parts.push(id.value.clone()),
            _ => return None,
        }
    }
    let table = parts.pop()?;
    let schema = parts.pop();
    Some((schema, table))
}

fn literal_i64(e: &Expr) -> Option<i64> {
    match e {
        Expr::Value(v) => match &v.value {
            Value::Number(s, _) => s.parse::<i64>().ok(),
            _ => None,
        },
        Expr::UnaryOp {
            op: UnaryOperator::Plus,
            expr,
        } => literal_i64(expr),
        // отрицательные пропускаем дальше — их отловит validate
        Expr::UnaryOp {
            op: UnaryOperator::Minus,
            expr,
        } => literal_i64(expr).map(|v| -v),
        _ => None,
    }
}
