use crate::renderer::writer::SqlWriter;

#[test]
fn push_and_finish_basic() {
    let mut w = SqlWriter::new(16);
    w.push("SELECT ");
    w.push_char('*');
    w.push(" FROM ");
    let tbl = String::from("users");
    w.push(tbl); // принимает String через AsRef<str>
    assert_eq!(w.finish(), "SELECT * FROM users");
}

#[test]
fn push_i64_formats_through_itoa() {
    let mut w = SqlWriter::new(8);
    w.push("LIMIT ");
    w.push_i64(42);
    w.push(" OFFSET ");
    w.push_i64(-1);
    assert_eq!(w.finish(), "LIMIT 42 OFFSET -1");
}

#[test]
fn push_sep_skips_first_element() {
    let mut w = SqlWriter::new(16);
    for (i, part) in ["a", "b", "c"].iter().enumerate() {
        w.push_sep(i, ", ");
        w.push(part);
    }
    assert_eq!(w.finish(), "a, b, c");
}
