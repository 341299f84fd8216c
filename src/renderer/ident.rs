use std::borrow::Cow;

use super::config::Dialect;

/// Удвоение кавычки своего вида внутри тела идентификатора.
fn escape_body(s: &str, quote: char) -> Cow<'_, str> {
    if !s.contains(quote) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Квотирует идентификатор под диалект. Всегда квотим, без списков
/// зарезервированных слов и ограничений длины.
pub fn quote_ident(name: &str, dialect: Dialect) -> String {
    let quote = dialect.quote_char();
    let body = escape_body(name, quote);
    let mut out = String::with_capacity(body.len() + 2);
    out.push(quote);
    out.push_str(&body);
    out.push(quote);
    out
}

/// schema.table / table.column; `*` не квотится.
pub(crate) fn quote_path(path: &str, dialect: Dialect) -> String {
    path.split('.')
        .map(|p| {
            if p == "*" {
                "*".to_string()
            } else {
                quote_ident(p, dialect)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
