use crate::ui::table_printer::{Column, TablePrinter};

const COLUMNS: [Column<'static>; 2] = [Column::right("ID"), Column::left("NAME")];

fn render(rows: &[Vec<&str>], empty: Option<&str>) -> String {
    let mut buf = Vec::new();
    TablePrinter::new()
        .render_table("Blah", &COLUMNS, rows, empty, &mut buf)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn renders_banner_header_and_aligned_rows() {
    let output = render(&[vec!["1", "Alpha"], vec!["10", "Beta"]], None);
    let expected = "\
----------
BLAH
----------
ID | NAME
----------
 1 | Alpha
10 | Beta
----------
";
    assert_eq!(output, expected);
}

#[test]
fn renders_empty_message_when_no_rows() {
    let output = render(&[], Some("Nothing here."));
    assert_eq!(output, "-------------\nBLAH\n-------------\nNothing here.\n-------------\n");
}

#[test]
fn computes_table_width() {
    let printer = TablePrinter::new();
    let rows = vec![vec!["1", "Bob"], vec!["10", "Alice"]];
    // 2 + 5 plus one separator of 3
    assert_eq!(printer.table_width(&COLUMNS, &rows), 10);
}

#[test]
fn renders_banner() {
    let mut buf = Vec::new();
    TablePrinter::new().render_banner("abc", 5, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "-----\nABC\n-----\n");
}

#[test]
fn left_pad_indents_every_line() {
    let mut buf = Vec::new();
    TablePrinter::new()
        .with_left_pad(2)
        .render_banner("ab", 2, &mut buf)
        .unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "  --\n  AB\n  --\n");
}
