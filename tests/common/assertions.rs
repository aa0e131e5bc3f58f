//! Assertion helpers for tests.

use pixgraph::models::GraphDocument;

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a color string is `#` plus six lowercase hex digits
pub fn assert_color_string(color: &str) {
    assert_eq!(color.len(), 7, "color {color:?} should be 7 chars");
    assert!(color.starts_with('#'), "color {color:?} should start with #");
    assert!(
        color[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "color {color:?} should be lowercase hex"
    );
}

/// Assert ids run 0, 1, 2, ... and every color is well formed
pub fn assert_valid_document(document: &GraphDocument) {
    for (i, expr) in document.expressions.list.iter().enumerate() {
        assert_eq!(expr.id, i, "expression ids should be sequential");
        assert_eq!(expr.kind, "expression");
        assert_color_string(&expr.color);
    }
}
