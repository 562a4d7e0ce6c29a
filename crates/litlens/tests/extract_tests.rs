//! PDF text extraction tests over programmatically built fixtures.

mod common;

use litlens::error::ExtractionError;
use litlens::extract;

#[test]
fn test_extract_single_page() {
    let pdf = common::pdf_with_text("Hello research world");
    let text = extract::extract_text(&pdf).unwrap();
    assert!(text.contains("Hello research world"));
}

#[test]
fn test_extract_concatenates_pages_in_order() {
    let pdf = common::pdf_with_pages(&["First page alpha", "Second page beta"]);
    let text = extract::extract_text(&pdf).unwrap();

    let first = text.find("First page alpha").expect("first page text present");
    let second = text.find("Second page beta").expect("second page text present");
    assert!(first < second);
}

#[test]
fn test_extract_skips_textless_pages() {
    let pdf = common::pdf_with_pages(&["Visible start", "", "Visible end"]);
    let text = extract::extract_text(&pdf).unwrap();

    assert!(text.contains("Visible start"));
    assert!(text.contains("Visible end"));
}

#[test]
fn test_extract_no_text_at_all_is_error() {
    let pdf = common::textless_pdf();
    let err = extract::extract_text(&pdf).unwrap_err();
    assert!(matches!(err, ExtractionError::NoText));
}

#[test]
fn test_extract_rejects_non_pdf_bytes() {
    let err = extract::extract_text(b"just some prose, no PDF structure").unwrap_err();
    assert!(matches!(err, ExtractionError::Parse { .. }));
}

#[test]
fn test_is_pdf_on_built_fixture() {
    let pdf = common::pdf_with_text("anything");
    assert!(extract::is_pdf(&pdf));
    assert!(!extract::is_pdf(b"<html>"));
}
