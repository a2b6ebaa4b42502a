use lupe::document::{validate, Document, Validity, INVALID_MESSAGE};
use lupe::Viewer;

#[test]
fn minimal_document_is_valid() {
    assert_eq!(
        validate("<svg viewBox=\"0 0 1 1\"><rect/></svg>"),
        Validity::Valid
    );
}

#[test]
fn unclosed_document_is_invalid() {
    assert_eq!(validate("<svg>"), Validity::Invalid);
    assert_eq!(validate("<svg viewBox=\"0 0 1 1\"><rect/>"), Validity::Invalid);
}

#[test]
fn empty_is_its_own_state() {
    assert_eq!(validate(""), Validity::Empty);
    assert_eq!(validate("   \n\t"), Validity::Empty);

    let doc = Document::new("");
    assert_eq!(doc.validation_error(), Some(""));
    let doc = Document::new("<svg>");
    assert_eq!(doc.validation_error(), Some(INVALID_MESSAGE));
    let doc = Document::sample();
    assert_eq!(doc.validation_error(), None);
}

#[test]
fn newlines_inside_are_allowed() {
    let svg = "<svg\n  viewBox=\"0 0 2 2\"\n>\n  <circle r=\"1\"/>\n</svg>";
    assert_eq!(validate(svg), Validity::Valid);
}

#[test]
fn case_insensitive_tags() {
    assert_eq!(validate("<SVG width=\"1\"><rect/></SVG>"), Validity::Valid);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        validate("\n  <svg viewBox=\"0 0 1 1\"><rect/></svg>  \n"),
        Validity::Valid
    );
}

#[test]
fn set_source_round_trips_exactly() {
    let mut viewer = Viewer::new();
    let text = "<svg viewBox=\"0 0 9 9\">\r\n  <path d=\"M0 0\"/>\r\n</svg>";
    viewer.set_source(text);
    assert_eq!(viewer.source(), text);
}

#[test]
fn restore_prefers_stored_text() {
    let viewer = Viewer::restore(Some("<svg a=\"1\"><g/></svg>".to_string()));
    assert_eq!(viewer.source(), "<svg a=\"1\"><g/></svg>");
    let viewer = Viewer::restore(None);
    assert_eq!(viewer.source(), lupe::SAMPLE_SVG);
}
