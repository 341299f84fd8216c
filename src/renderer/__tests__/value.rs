use crate::renderer::value::escape_value;

#[test]
fn numeric_literal_stays_unquoted() {
    assert_eq!(escape_value("25"), "25");
    assert_eq!(escape_value("3.14"), "3.14");
    assert_eq!(escape_value("-7"), "-7");
    assert_eq!(escape_value("1e3"), "1e3");
}

#[test]
fn plain_string_is_single_quoted() {
    assert_eq!(escape_value("active"), "'active'");
}

#[test]
fn embedded_single_quote_is_doubled() {
    assert_eq!(escape_value("O'Brien"), "'O''Brien'");
}

#[test]
fn pre_quoted_value_passes_through() {
    // лазейка для вызывающего: уже заквоченное не трогаем
    assert_eq!(escape_value("'already quoted'"), "'already quoted'");
}

#[test]
fn empty_string_becomes_empty_literal() {
    assert_eq!(escape_value(""), "''");
}

#[test]
fn wordy_float_forms_are_quoted() {
    // parse::<f64> понимает inf/NaN, но числовым литералом это не является
    assert_eq!(escape_value("inf"), "'inf'");
    assert_eq!(escape_value("NaN"), "'NaN'");
}

#[test]
fn leading_zero_number_is_treated_as_numeric() {
    // документированная особенность эвристики: "02134" уходит без кавычек
    assert_eq!(escape_value("02134"), "02134");
}
