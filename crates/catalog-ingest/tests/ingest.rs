//! Integration tests for tokenizing, row mapping and source reading.

use std::io::Write;

use catalog_ingest::{
    IngestError, decode_text, map_positional, read_header_table, read_source, read_source_async,
    tokenize,
};
use catalog_model::{Delimiter, PositionalColumn, PositionalLayout};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

fn sparse_layout() -> PositionalLayout {
    PositionalLayout::new(vec![
        PositionalColumn::at("First", 0),
        PositionalColumn::placeholder(" "),
        PositionalColumn::at("Tenth", 9),
        PositionalColumn::at("Last", 25),
    ])
    .unwrap()
}

#[test]
fn test_header_table_from_crlf_text() {
    let lines = tokenize("Item\tColor\tPrice\r\n\r\nSKU1\tRed\t9.99\r\n", Delimiter::Tab).unwrap();
    let table = read_header_table(&lines).unwrap();

    assert_eq!(table.schema.fields(), ["Item", "Color", "Price"]);
    assert_eq!(table.row_values(0), Some(vec!["SKU1", "Red", "9.99"]));
}

#[test]
fn test_wrong_delimiter_yields_single_column() {
    let lines = tokenize("Item,Color\nSKU1,Red\n", Delimiter::Tab).unwrap();
    let table = read_header_table(&lines).unwrap();
    assert_eq!(table.schema.fields(), ["Item,Color"]);
}

#[test]
fn test_read_source_from_disk() {
    let file = create_temp_file(b"\xEF\xBB\xBFStyle|Color\nIC47B|ATH\n");
    let bytes = read_source(file.path()).unwrap();
    let text = decode_text(&bytes);
    let lines = tokenize(&text, Delimiter::Pipe).unwrap();
    assert_eq!(lines[0], vec!["Style", "Color"]);
}

#[tokio::test]
async fn test_read_source_async_reads_bytes() {
    let file = create_temp_file(b"a,b\n1,2\n");
    let bytes = read_source_async(file.path()).await.unwrap();
    assert_eq!(bytes, b"a,b\n1,2\n");
}

#[tokio::test]
async fn test_read_source_async_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    match read_source_async(&missing).await {
        Err(IngestError::FileRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected FileRead error, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_positional_short_rows_never_fail(fields in prop::collection::vec("[A-Za-z0-9 ]{0,8}", 0..30)) {
        let layout = sparse_layout();
        let record = map_positional(fields.as_slice(), &layout);

        prop_assert_eq!(record.len(), layout.columns().len());
        prop_assert_eq!(record.get(" "), Some(""));
        let expected_last = fields.get(25).map(|value| value.trim()).unwrap_or("");
        prop_assert_eq!(record.get("Last"), Some(expected_last));
    }

    #[test]
    fn prop_tokenize_keeps_only_non_blank_lines(
        lines in prop::collection::vec("[a-z|]{0,6}|[ \t]{0,3}", 1..20)
    ) {
        let text = lines.join("\n");
        let expected = lines.iter().filter(|line| !line.trim().is_empty()).count();
        match tokenize(&text, Delimiter::Pipe) {
            Ok(tokenized) => prop_assert_eq!(tokenized.len(), expected),
            Err(IngestError::EmptyInput) => prop_assert_eq!(expected, 0),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
