//! tsz-jsdoc: JSDoc / Closure-Compiler type-expression parsing.
//!
//! This crate is the facade over the workspace:
//!
//! - `tsz_common`: spans, diagnostics and limits
//! - `tsz_scanner`: tokens and the rewindable scanner
//! - `tsz_parser`: the type-expression grammar and its node tree
//!
//! ```
//! use tsz_jsdoc::{JsDocKind, TextRange, parse_jsdoc_type_expression};
//!
//! let source = "/** @param {?Array.<string>} names */";
//! let node = parse_jsdoc_type_expression(source, 11).unwrap();
//! assert_eq!(node.kind(), JsDocKind::NullableType);
//! assert_eq!(node.span().text(source), "?Array.<string>");
//! ```

pub use tsz_common as common;
pub use tsz_parser as parser;
pub use tsz_scanner as scanner;

pub use tsz_common::diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes};
pub use tsz_common::{Span, TextRange};
pub use tsz_parser::{
    EntityName, IdentifierData, JsDocKind, JsDocParseResult, JsDocTypeExpression, MemberData,
    NodeList, NodeRef, ParserState, QualifiedNameData, TypeNode, parse_jsdoc_type_expression,
    parse_jsdoc_type_expression_with_diagnostics,
};
pub use tsz_scanner::SyntaxKind;

// Tracing configuration for hosts (TSZ_LOG / TSZ_LOG_FORMAT)
pub mod tracing_config;
