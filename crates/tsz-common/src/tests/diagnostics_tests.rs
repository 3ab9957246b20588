use crate::diagnostics::*;

#[test]
fn test_format_message_placeholders() {
    assert_eq!(format_message("'{0}' expected.", &["}"]), "'}' expected.");
    assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
    assert_eq!(format_message("Type expected.", &[]), "Type expected.");
}

#[test]
fn test_message_table_lookup() {
    assert_eq!(
        get_message_template(diagnostic_codes::TYPE_EXPECTED),
        Some("Type expected.")
    );
    assert_eq!(get_message_template(9999), None);
    for message in DIAGNOSTIC_MESSAGES {
        assert_eq!(get_diagnostic_message(message.code), Some(message));
    }
}

#[test]
fn test_diagnostic_from_message() {
    let diag = Diagnostic::from_message(
        "test.js".to_string(),
        4,
        1,
        &diagnostic_messages::EXPECTED,
        &["}"],
    );
    assert_eq!(diag.code, 1005);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert_eq!(diag.message_text, "'}' expected.");
    assert_eq!(diag.end(), 5);
}

#[test]
fn test_diagnostic_serializes_with_code_and_range() {
    let diag = Diagnostic::from_message(
        "a.js".to_string(),
        1,
        2,
        &diagnostic_messages::TYPE_EXPECTED,
        &[],
    );
    let value = serde_json::to_value(&diag).unwrap();
    assert_eq!(value["code"], 1110);
    assert_eq!(value["start"], 1);
    assert_eq!(value["category"], "Error");
}
