use std::fmt;

use smallvec::SmallVec;

use crate::state::{Aggregate, QueryBuilderState};

/// Результат структурной проверки состояния билдера.
///
/// Нарушения не бросаются исключениями — собираются все, в порядке правил.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "ok");
        }
        for (i, line) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {line}")?;
        }
        Ok(())
    }
}

/// Проверяет состояние перед компиляцией. Правила независимые, без
/// короткого замыкания; чистая функция без I/O — можно дёргать на каждое
/// изменение состояния для живой подсветки в UI.
pub fn validate(state: &QueryBuilderState) -> ValidationReport {
    let mut errors: SmallVec<[String; 4]> = SmallVec::new();

    if state.table.trim().is_empty() {
        errors.push("Table name is required".to_string());
    }

    if let Some(n) = state.limit {
        if n < 0 {
            errors.push("LIMIT must be a non-negative integer".to_string());
        }
    }
    if let Some(n) = state.offset {
        if n < 0 {
            errors.push("OFFSET must be a non-negative integer".to_string());
        }
    }

    for (i, f) in state.filters.iter().enumerate() {
        if f.column.trim().is_empty() {
            errors.push(format!("Filter #{}: column is required", i + 1));
        }
        if !f.operator.is_null_check() && f.value.is_empty() {
            errors.push(format!(
                "Filter #{}: value is required for operator {}",
                i + 1,
                f.operator.sql()
            ));
        }
    }

    for (i, j) in state.joins.iter().enumerate() {
        if j.table.trim().is_empty() {
            errors.push(format!("Join #{}: table is required", i + 1));
        }
        if j.left_column.trim().is_empty() || j.right_column.trim().is_empty() {
            errors.push(format!("Join #{}: both ON columns are required", i + 1));
        }
    }

    for (i, o) in state.order_by.iter().enumerate() {
        if o.column.trim().is_empty() {
            errors.push(format!("ORDER BY #{}: column is required", i + 1));
        }
    }

    // Смесь агрегатов и простых колонок требует GROUP BY. Проверяется только
    // наличие списка, не членство каждой простой колонки — мягче
    // стандартного SQL.
    let has_aggregated = state
        .select_columns
        .iter()
        .any(|c| c.aggregate != Aggregate::None);
    let has_plain = state
        .select_columns
        .iter()
        .any(|c| c.aggregate == Aggregate::None);
    if has_aggregated && has_plain && state.group_by.is_empty() {
        errors.push(
            "Mixing aggregated and non-aggregated columns requires a GROUP BY clause".to_string(),
        );
    }

    let errors = errors.into_vec();
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
