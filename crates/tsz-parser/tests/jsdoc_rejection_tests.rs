//! Malformed and unsupported JSDoc type expressions.
//!
//! Every case must be rejected as a whole, with a single diagnostic pointing
//! at the furthest token the grammar reached.

use tsz_common::diagnostics::{DiagnosticCategory, diagnostic_codes};
use tsz_parser::{
    ParserState, parse_jsdoc_type_expression, parse_jsdoc_type_expression_with_diagnostics,
};

fn assert_rejected(source: &str) {
    assert!(
        parse_jsdoc_type_expression(source, 0).is_none(),
        "expected {source:?} to be rejected"
    );
}

/// Returns `(code, start, length, message)` of the single diagnostic.
fn rejection(source: &str) -> (u32, u32, u32, String) {
    let result = parse_jsdoc_type_expression_with_diagnostics("test.js", source, 0);
    assert!(result.type_expression.is_none(), "expected {source:?} to be rejected");
    assert_eq!(result.diagnostics.len(), 1, "{source:?}: {:?}", result.diagnostics);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.category, DiagnosticCategory::Error);
    assert_eq!(diagnostic.file, "test.js");
    (
        diagnostic.code,
        diagnostic.start,
        diagnostic.length,
        diagnostic.message_text.clone(),
    )
}

#[test]
fn empty_type() {
    assert_rejected("{}");
}

#[test]
fn trailing_comma_in_record_type() {
    assert_rejected("{{a,}}");
}

#[test]
fn union_type_with_trailing_bar() {
    assert_rejected("{(a|)}");
}

#[test]
fn union_type_without_types() {
    assert_rejected("{()}");
}

#[test]
fn non_nullable_type_without_type() {
    assert_rejected("{!}");
}

#[test]
fn function_type_with_trailing_comma() {
    assert_rejected("{function(a,)}");
}

#[test]
fn reserved_word() {
    assert_rejected("{var}");
}

#[test]
fn this_without_type() {
    assert_rejected("{this:}");
}

#[test]
fn new_without_type() {
    assert_rejected("{new:}");
}

#[test]
fn variadic_without_type() {
    assert_rejected("{...}");
}

#[test]
fn optional_without_type() {
    assert_rejected("{=}");
}

#[test]
fn all_type_with_operand() {
    assert_rejected("{*foo}");
}

#[test]
fn empty_type_arguments() {
    assert_rejected("{a.<>}");
}

#[test]
fn type_arguments_with_trailing_comma() {
    assert_rejected("{a.<a,>}");
}

#[test]
fn array_type() {
    assert_rejected("{a[]}");
}

#[test]
fn arrow_function_type() {
    assert_rejected("{() => string}");
    assert_rejected("{<T>() => string}");
}

#[test]
fn constructor_arrow_type() {
    assert_rejected("{new () => string}");
    assert_rejected("{new <T>() => string}");
}

#[test]
fn tuple_type() {
    assert_rejected("{[number,string]}");
}

#[test]
fn typeof_type() {
    assert_rejected("{typeof M}");
}

#[test]
fn named_parameter() {
    assert_rejected("{function(a: number)}");
}

#[test]
fn call_signature_in_record_type() {
    assert_rejected("{{(): number}}");
}

#[test]
fn method_in_record_type() {
    assert_rejected("{{foo(): number}}");
}

#[test]
fn single_member_parenthesized_union() {
    assert_rejected("{(number)}");
}

#[test]
fn function_keyword_only_as_last_segment() {
    assert_rejected("{a.function.b}");
    assert_rejected("{function}");
}

#[test]
fn typescript_style_type_arguments() {
    assert_rejected("{Array<string>}");
}

#[test]
fn missing_closing_brace() {
    assert_rejected("{number");
    assert_rejected("{number string}");
}

#[test]
fn start_must_address_opening_brace() {
    assert_rejected("number}");
    assert!(parse_jsdoc_type_expression("x {number}", 0).is_none());
    assert!(parse_jsdoc_type_expression("{number}", 100).is_none());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn diagnostic_for_empty_type() {
    let (code, start, length, message) = rejection("{}");
    assert_eq!(code, diagnostic_codes::TYPE_EXPECTED);
    assert_eq!((start, length), (1, 1));
    assert_eq!(message, "Type expected.");
}

#[test]
fn diagnostic_for_reserved_word() {
    let (code, start, length, message) = rejection("{var}");
    assert_eq!(
        code,
        diagnostic_codes::IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE
    );
    assert_eq!((start, length), (1, 3));
    assert_eq!(
        message,
        "Identifier expected. 'var' is a reserved word that cannot be used here."
    );
}

#[test]
fn diagnostic_for_trailing_comma() {
    let (code, start, _, _) = rejection("{{a,}}");
    assert_eq!(code, diagnostic_codes::TRAILING_COMMA_NOT_ALLOWED);
    assert_eq!(start, 4);
}

#[test]
fn diagnostic_for_empty_type_arguments() {
    let (code, start, _, message) = rejection("{a.<>}");
    assert_eq!(code, diagnostic_codes::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY);
    assert_eq!(start, 4);
    assert_eq!(message, "Type argument list cannot be empty.");
}

#[test]
fn diagnostic_for_array_suffix() {
    let (code, start, length, message) = rejection("{a[]}");
    assert_eq!(code, diagnostic_codes::EXPECTED);
    assert_eq!((start, length), (2, 1));
    assert_eq!(message, "'}' expected.");
}

#[test]
fn diagnostic_for_all_type_with_operand() {
    let (code, start, length, _) = rejection("{*foo}");
    assert_eq!(code, diagnostic_codes::UNEXPECTED_TOKEN);
    assert_eq!((start, length), (2, 3));
}

#[test]
fn diagnostic_for_single_member_union() {
    let (code, start, _, message) = rejection("{(a)}");
    assert_eq!(code, diagnostic_codes::EXPECTED);
    assert_eq!(start, 3);
    assert_eq!(message, "'|' expected.");
}

#[test]
fn diagnostic_for_missing_closing_brace_at_end_of_input() {
    let (code, start, length, message) = rejection("{number");
    assert_eq!(code, diagnostic_codes::EXPECTED);
    assert_eq!((start, length), (7, 0));
    assert_eq!(message, "'}' expected.");
}

#[test]
fn diagnostic_for_missing_opening_brace() {
    let (code, start, length, message) = rejection("number}");
    assert_eq!(code, diagnostic_codes::EXPECTED);
    assert_eq!((start, length), (0, 6));
    assert_eq!(message, "'{' expected.");
}

#[test]
fn diagnostic_for_missing_member_name() {
    let (code, start, _, message) = rejection("{{a: number, : string}}");
    assert_eq!(code, diagnostic_codes::IDENTIFIER_EXPECTED);
    assert_eq!(start, 13);
    assert_eq!(message, "Identifier expected.");
}

#[test]
fn diagnostics_reset_between_parses() {
    let mut parser = ParserState::new("test.js".to_string(), "{} {number}".to_string());
    assert!(parser.parse_jsdoc_type_expression(0, None).is_none());
    assert_eq!(parser.get_diagnostics().len(), 1);
    assert!(parser.parse_jsdoc_type_expression(3, None).is_some());
    assert!(parser.get_diagnostics().is_empty());
}

#[test]
fn successful_parse_has_no_diagnostics() {
    let result = parse_jsdoc_type_expression_with_diagnostics("test.js", "{?number}", 0);
    assert!(result.type_node().is_some());
    assert!(result.diagnostics.is_empty());
}

// =============================================================================
// Nesting limit
// =============================================================================

#[test]
fn deep_nesting_is_rejected_without_overflow() {
    let source = format!("{{{}number}}", "!".repeat(150));
    let (code, _, _, _) = rejection(&source);
    assert_eq!(code, diagnostic_codes::UNEXPECTED_TOKEN);

    let records = format!("{{{}a{}}}", "{a: ".repeat(200), "}".repeat(200));
    assert_rejected(&records);
}

#[test]
fn moderate_nesting_is_accepted() {
    let source = format!("{{{}number}}", "!".repeat(50));
    assert!(parse_jsdoc_type_expression(&source, 0).is_some());

    let arguments = format!("{{{}number{}}}", "Array.<".repeat(30), ">".repeat(30));
    assert!(parse_jsdoc_type_expression(&arguments, 0).is_some());
}
