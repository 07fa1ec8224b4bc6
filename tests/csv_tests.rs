//! Parsing and serialization of plain CSV text.
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use common::{csv_text, grid, PEOPLE};
use csvedit::csv::{parse_csv, parse_csv_with, serialize_csv, ParseOptions};
use test_case::test_case;

#[test]
fn test_people_sample() {
    let parsed = parse_csv(PEOPLE);
    assert_eq!(
        parsed,
        grid(&["name", "age"], &[&["Alice", "30"], &["Bob", "25"]])
    );
}

#[test_case(1, 1 ; "one column one row")]
#[test_case(3, 0 ; "headers only")]
#[test_case(4, 25 ; "several rows")]
fn test_well_formed_shape(cols: usize, rows: usize) {
    let headers: Vec<String> = (0..cols).map(|c| format!("h{c}")).collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let cells: Vec<Vec<String>> = (0..rows)
        .map(|r| (0..cols).map(|c| format!("{r}-{c}")).collect())
        .collect();
    let cell_refs: Vec<Vec<&str>> = cells
        .iter()
        .map(|r| r.iter().map(String::as_str).collect())
        .collect();
    let row_refs: Vec<&[&str]> = cell_refs.iter().map(Vec::as_slice).collect();

    let parsed = parse_csv(&csv_text(&header_refs, &row_refs));
    assert_eq!(parsed.headers, headers);
    assert_eq!(parsed.rows.len(), rows);
    assert!(parsed.rows.iter().all(|r| r.len() == cols));
    assert!(parsed.issues().is_empty());
}

#[test_case("a,b\n\n1,2" ; "empty line")]
#[test_case("a,b\n   \n1,2" ; "spaces")]
#[test_case("a,b\n , \t\n1,2" ; "blank cells")]
#[test_case("a,b\n1,2\n" ; "trailing newline")]
#[test_case("a,b\n1,2\n\n\n" ; "several trailing newlines")]
fn test_blank_lines_excluded(text: &str) {
    let parsed = parse_csv(text);
    assert_eq!(parsed.rows, vec![vec!["1", "2"]]);
}

#[test_case(PEOPLE ; "people")]
#[test_case("a" ; "single cell")]
#[test_case("a,b,c\n1,,3\n,,x" ; "empty cells")]
#[test_case("a,b\r\n1,2\r\n3,4" ; "crlf")]
#[test_case(" x , y \n 1 , 2 " ; "padded cells")]
#[test_case("id,note\n1,caf\u{e9}\n2,\u{1f600}" ; "non ascii")]
fn test_round_trip(text: &str) {
    assert_eq!(serialize_csv(&parse_csv(text)), text);
}

#[test]
fn test_embedded_comma_is_lossy() {
    // Quotes are not understood, so a quoted comma splits the cell.
    let parsed = parse_csv("city,pop\n\"Paris, FR\",2100000");
    assert_eq!(parsed.rows[0].len(), 3);
    assert_eq!(parsed.issues().len(), 1);
    // Serializing rejoins the pieces, so the text itself survives.
    assert_eq!(
        serialize_csv(&parsed),
        "city,pop\n\"Paris, FR\",2100000"
    );
}

#[test]
fn test_ragged_rows_kept() {
    let parsed = parse_csv("a,b,c\n1,2\n1,2,3,4");
    assert_eq!(parsed.rows[0], vec!["1", "2"]);
    assert_eq!(parsed.rows[1], vec!["1", "2", "3", "4"]);
    let issues: Vec<String> = parsed.issues().iter().map(ToString::to_string).collect();
    assert_eq!(
        issues,
        vec!["row 0 has 2 cells, expected 3", "row 1 has 4 cells, expected 3"]
    );
}

#[test]
fn test_strip_carriage_return_option() {
    let options = ParseOptions {
        strip_carriage_return: true,
    };
    let parsed = parse_csv_with("name,age\r\nAlice,30\r\n\r\n", options);
    assert_eq!(
        parsed,
        grid(&["name", "age"], &[&["Alice", "30"]])
    );
    assert_eq!(serialize_csv(&parsed), "name,age\nAlice,30");
}

#[test]
fn test_blank_header_keeps_rows() {
    let parsed = parse_csv(",,\n1,2,3\n4,5,6");
    assert_eq!(parsed.headers, vec!["", "", ""]);
    assert_eq!(parsed.rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
    assert!(parsed.issues().is_empty());
    assert_eq!(serialize_csv(&parsed), ",,\n1,2,3\n4,5,6");
}

#[test]
fn test_leading_blank_line_is_header() {
    let parsed = parse_csv("\nname,age\nAlice,30");
    assert_eq!(parsed.headers, vec![""]);
    assert_eq!(parsed.rows, vec![vec!["name", "age"], vec!["Alice", "30"]]);
}

#[test]
fn test_empty_input_has_no_headers() {
    assert!(!parse_csv("").has_headers());
}
