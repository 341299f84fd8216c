/// Экранирование литерала значения для подстановки в текст запроса.
///
/// Это строковая подстановка, а не параметры запроса — годится только для
/// доверенного ввода внутреннего инструмента.
///
/// 1. строка уже в одинарных кавычках — пропускаем как есть;
/// 2. числовой литерал — печатаем без кавычек;
/// 3. иначе оборачиваем в `'...'` с удвоением внутренних кавычек.
pub fn escape_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw.to_string();
    }
    if is_numeric_literal(raw) {
        return raw.to_string();
    }
    quote_sql_str(raw)
}

/// «Выглядит как число → без кавычек». Строковое значение, случайно
/// разобравшееся как число ("02134"), тоже уйдёт без кавычек — известная
/// особенность эвристики.
fn is_numeric_literal(s: &str) -> bool {
    let t = s.trim();
    if t.is_empty() {
        return false;
    }
    // отсечь словесные формы (inf/nan/hex): только цифры, знак, точка, экспонента
    if !t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return false;
    }
    t.parse::<f64>().is_ok()
}

/// Простейшее экранирование одинарных кавычек и оборачивание в '...'
pub(crate) fn quote_sql_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\''); // escape → ''
        }
        out.push(ch);
    }
    out.push('\'');
    out
}
