//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by CLI parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.

use jsonidx::json::parse::{self, ParseFailureCategory};
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_eof() {
    let syntax_err = parse::from_str::<Value>(r#"[1,}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_str::<Value>(r#"[1, 2"#).unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);
}

#[test]
fn category_mapping_handles_typed_decode() {
    let data_err = parse::from_str::<Vec<u8>>(r#"[1, "two"]"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&data_err),
        ParseFailureCategory::Data
    );
}

#[test]
fn reader_decoding_matches_str_decoding() {
    let input = r#"[10, "x", true]"#;
    let from_reader: Value = parse::from_reader(input.as_bytes()).unwrap();
    let from_str: Value = parse::from_str(input).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Value>("[1,,2]").unwrap_err();
    let hint = parse::hint_for_error(&err, "stdin");
    assert!(hint.contains("parse category: syntax"));
    assert!(hint.contains("context: stdin"));
    assert!(hint.contains("line 1"));
}
