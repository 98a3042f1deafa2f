//! Session lifecycle tests.

use std::io::Write;

use catalog_core::{LoadOutcome, Session, SessionError, SessionOptions, SessionPhase};
use catalog_ingest::{IngestError, parse_sheet_json, read_source_async};
use catalog_model::Delimiter;
use catalog_normalization::{FieldRule, RuleSet, Vendor, VendorProfile};
use catalog_output::{CsvOptions, QuotePolicy};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn acme_profile() -> VendorProfile {
    let rules = RuleSet::new(
        "Acme",
        vec![
            FieldRule::copy("VendorSkuCode", "Item"),
            FieldRule::copy("ColorName", "Color"),
            FieldRule::copy("PiecePrice", "Price"),
            FieldRule::constant("Brand", "Acme"),
        ],
    )
    .unwrap();
    VendorProfile::custom("acme", rules)
}

fn create_temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn test_end_to_end_tab_file() {
    let mut session = Session::new(acme_profile());
    session.load_text("Item\tColor\tPrice\nSKU1\tRed\t9.99\n").unwrap();
    session.normalize().unwrap();

    let document = session.export().unwrap();
    assert_eq!(
        document.contents,
        "VendorSkuCode,ColorName,PiecePrice,Brand\nSKU1,Red,9.99,Acme"
    );
    assert_eq!(document.file_name, "converted_data.csv");
}

#[test]
fn test_raw_export_uses_raw_schema() {
    let mut session = Session::new(Vendor::Generic.profile().unwrap());
    session.load_text("Item\tNote\nSKU1\tlarge, soft\n").unwrap();

    let document = session.export().unwrap();
    assert_eq!(document.contents, "Item,Note\nSKU1,\"large, soft\"");
}

#[test]
fn test_quote_policy_from_options() {
    let options =
        SessionOptions::new().with_csv(CsvOptions::new().with_quote_policy(QuotePolicy::Always));
    let mut session = Session::with_options(acme_profile(), options);
    session.load_text("Item\tColor\tPrice\nSKU1\tRed\t9.99\n").unwrap();
    session.normalize().unwrap();

    let document = session.export().unwrap();
    assert_eq!(
        document.contents,
        "VendorSkuCode,ColorName,PiecePrice,Brand\n\"SKU1\",\"Red\",\"9.99\",\"Acme\""
    );
}

#[test]
fn test_empty_input_enters_error() {
    let mut session = Session::new(acme_profile());
    let err = session.load_text("\n  \n\t\n").unwrap_err();

    assert!(matches!(err, SessionError::Ingest(IngestError::EmptyInput)));
    assert!(matches!(session.phase(), SessionPhase::Error(_)));
    assert!(matches!(
        session.export(),
        Err(SessionError::InvalidTransition { .. })
    ));
    assert!(matches!(
        session.normalize(),
        Err(SessionError::InvalidTransition { .. })
    ));
}

#[test]
fn test_invalid_transitions_leave_phase_unchanged() {
    let mut session = Session::new(acme_profile());
    assert!(matches!(
        session.normalize(),
        Err(SessionError::InvalidTransition { operation: "normalize", .. })
    ));
    assert!(matches!(
        session.reset(),
        Err(SessionError::InvalidTransition { operation: "reset", .. })
    ));
    assert_eq!(session.phase(), &SessionPhase::Empty);

    session.load_text("Item\nSKU1\n").unwrap();
    assert!(session.reset().is_err());
    assert_eq!(session.phase(), &SessionPhase::RawLoaded);

    session.normalize().unwrap();
    assert!(session.normalize().is_err());
    assert_eq!(session.phase(), &SessionPhase::Normalized);
}

#[test]
fn test_reset_returns_to_raw() {
    let mut session = Session::new(acme_profile());
    session.load_text("Item\tColor\tPrice\nSKU1\tRed\t9.99\n").unwrap();
    session.normalize().unwrap();
    session.reset().unwrap();

    assert_eq!(session.phase(), &SessionPhase::RawLoaded);
    assert!(session.canonical().is_none());
    assert_eq!(
        session.export().unwrap().contents,
        "Item,Color,Price\nSKU1,Red,9.99"
    );
}

#[test]
fn test_wrong_delimiter_then_correct_one() {
    let mut session = Session::new(acme_profile());
    session
        .load_text("Item,Color,Price\nSKU1,Red,9.99\n")
        .unwrap();
    assert_eq!(session.raw().unwrap().schema.len(), 1);

    session.normalize().unwrap();
    session.change_delimiter(Delimiter::Comma).unwrap();

    assert_eq!(session.phase(), &SessionPhase::RawLoaded);
    assert!(session.canonical().is_none());
    assert_eq!(
        session.raw().unwrap().schema.fields(),
        ["Item", "Color", "Price"]
    );
}

#[test]
fn test_change_delimiter_recovers_from_error() {
    let mut session = Session::new(acme_profile());
    session.load_text("Item\nSKU1\n").unwrap();
    assert!(session.load_text("Item,Color\n").is_err());
    assert!(matches!(session.phase(), SessionPhase::Error(_)));

    session.change_delimiter(Delimiter::Comma).unwrap_err();
    assert!(matches!(session.phase(), SessionPhase::Error(_)));

    session.load_text("Item,Color\nSKU1,Red\n").unwrap();
    session.change_delimiter(Delimiter::Comma).unwrap();
    assert_eq!(session.phase(), &SessionPhase::RawLoaded);
}

#[test]
fn test_sheet_content_rejects_delimiter_change() {
    let mut session = Session::new(Vendor::Uneek.profile().unwrap());
    let rows = parse_sheet_json(
        r#"[{"ItemNo": "UC90102XS", "Description": "Workwear - Polos - Classic Polo", "Price": 7.35}]"#,
    )
    .unwrap();
    session.load_sheet(rows).unwrap();

    assert!(matches!(
        session.change_delimiter(Delimiter::Tab),
        Err(SessionError::DelimiterNotApplicable)
    ));
    assert_eq!(session.phase(), &SessionPhase::RawLoaded);

    session.normalize().unwrap();
    let canonical = session.canonical().unwrap();
    assert_eq!(canonical.records[0].get("ProductName"), Some("Classic Polo"));
    assert_eq!(canonical.records[0].get("VendorCost"), Some("7.35"));
}

#[test]
fn test_carolina_made_positional_load() {
    let mut fields: Vec<String> = (0..26).map(|idx| format!("f{idx}")).collect();
    fields[0] = "IC47BATHYXS".to_string();
    fields[1] = "IC47B".to_string();
    fields[15] = "Ladies Tee".to_string();
    let line = fields.join(",");

    let mut session = Session::new(Vendor::CarolinaMade.profile().unwrap());
    session.load_text(format!("{line}\n{line}\nSHORT,ROW\n")).unwrap();

    let raw = session.raw().unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw.schema.len(), 31);
    assert_eq!(raw.records[2].get("Brand"), Some(""));

    session.normalize().unwrap();
    let canonical = session.canonical().unwrap();
    assert_eq!(canonical.records[0].get("ProductName"), Some("Ladies Tee"));
    assert_eq!(canonical.records[0].get("VendorSkuCode"), Some("IC47BATHYXS"));
    assert_eq!(canonical.records[0].get("BrandName"), Some("f25"));
    assert_eq!(canonical.records[2].get("VendorProductCode"), Some("ROW"));
}

#[test]
fn test_load_path_json_is_sheet() {
    let file = create_temp_file(
        ".json",
        br#"[{"Stockcode": "5001-BLK-M", "Groupname": "5001 Staple Tee"}]"#,
    );
    let mut session = Session::new(Vendor::AsColour.profile().unwrap());
    session.load_path(file.path()).unwrap();
    session.normalize().unwrap();

    let canonical = session.canonical().unwrap();
    assert_eq!(canonical.records[0].get("VendorProductCode"), Some("5001"));
    assert_eq!(canonical.records[0].get("ProductName"), Some("Staple Tee"));
}

#[test]
fn test_load_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(acme_profile());
    let err = session.load_path(&dir.path().join("gone.txt")).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Ingest(IngestError::FileRead { .. })
    ));
    assert!(matches!(session.phase(), SessionPhase::Error(_)));
}

#[test]
fn test_failed_read_drops_previous_tables() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(acme_profile());
    session.load_text("Item\tColor\tPrice\nOLD\tRed\t1.00\n").unwrap();
    session.normalize().unwrap();

    assert!(session.load_path(&dir.path().join("gone.txt")).is_err());
    assert!(matches!(session.phase(), SessionPhase::Error(_)));
    assert!(session.raw().is_none());
    assert!(session.canonical().is_none());
    assert!(session.content().is_none());
    assert!(session.export().is_err());
}

#[test]
fn test_sheet_of_empty_rows_enters_error() {
    let mut session = Session::new(Vendor::Uneek.profile().unwrap());
    let rows = parse_sheet_json("[{}]").unwrap();

    let err = session.load_sheet(rows).unwrap_err();
    assert!(matches!(err, SessionError::Ingest(IngestError::NoData)));
    assert!(matches!(session.phase(), SessionPhase::Error(_)));
    assert!(session.raw().is_none());
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut session = Session::new(acme_profile());
    let first = create_temp_file(".txt", b"Item\nOLD\n");
    let second = create_temp_file(".txt", b"Item\nNEW\n");

    let stale = session.begin_load(first.path());
    let current = session.begin_load(second.path());

    let outcome = session
        .complete_load(current, Ok(b"Item\nNEW\n".to_vec()))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);

    let outcome = session
        .complete_load(stale, Ok(b"Item\nOLD\n".to_vec()))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(session.raw().unwrap().records[0].get("Item"), Some("NEW"));
}

#[test]
fn test_sync_load_makes_pending_ticket_stale() {
    let mut session = Session::new(acme_profile());
    let file = create_temp_file(".txt", b"Item\nASYNC\n");
    let ticket = session.begin_load(file.path());

    session.load_text("Item\nSYNC\n").unwrap();
    let outcome = session.complete_load(ticket, Ok(b"Item\nASYNC\n".to_vec())).unwrap();

    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(session.raw().unwrap().records[0].get("Item"), Some("SYNC"));
}

#[tokio::test]
async fn test_async_load_completes() {
    let file = create_temp_file(".txt", b"Item\tColor\tPrice\nSKU1\tRed\t9.99\n");
    let mut session = Session::new(acme_profile());

    let ticket = session.begin_load(file.path());
    let result = read_source_async(file.path()).await;
    let outcome = session.complete_load(ticket, result).unwrap();

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(session.phase(), &SessionPhase::RawLoaded);
}

#[test]
fn test_preview_and_search() {
    let mut session = Session::new(acme_profile());
    session
        .load_text("Item\tColor\tPrice\nSKU1\tRed\t9.99\nSKU2\tBlue\t5\nSKU3\tred\t1\n")
        .unwrap();

    let preview = session.preview(2).unwrap();
    assert_eq!(preview.rows.len(), 2);
    assert_eq!(preview.total_rows, 3);
    assert_eq!(session.search("RED").unwrap(), vec![0, 2]);

    session.normalize().unwrap();
    assert_eq!(session.search("acme").unwrap(), vec![0, 1, 2]);
    assert_eq!(
        session.default_preview().unwrap().schema.fields()[3],
        "Brand"
    );
}

proptest! {
    #[test]
    fn prop_same_delimiter_twice_yields_same_raw_records(
        rows in prop::collection::vec(prop::collection::vec("[A-Za-z0-9]{1,6}", 3), 1..8)
    ) {
        let mut text = String::from("Item\tColor\tPrice\n");
        for row in &rows {
            text.push_str(&row.join("\t"));
            text.push('\n');
        }

        let mut session = Session::new(acme_profile());
        session.load_text(text).unwrap();

        session.change_delimiter(Delimiter::Tab).unwrap();
        let first = session.raw().cloned();
        session.change_delimiter(Delimiter::Tab).unwrap();
        let second = session.raw().cloned();

        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
        prop_assert_eq!(session.phase(), &SessionPhase::RawLoaded);
    }
}
