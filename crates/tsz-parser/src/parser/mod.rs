//! JSDoc type-expression parser.
//!
//! Layout:
//! - `base`: `NodeList`, the spanned child list shared by every node kind
//! - `node`: the node data types (`TypeNode`, `MemberData`, `EntityName`, ...)
//! - `node_access`: kind tags and tree walking (`JsDocKind`, `NodeRef`)
//! - `state`: `ParserState` token plumbing, backtracking and diagnostics
//! - `state_types`: the grammar productions

mod base;
mod node;
mod node_access;
mod parse_rules;
mod state;
mod state_types;

pub use base::NodeList;
pub use node::{
    EntityName, FunctionTypeData, IdentifierData, JsDocTypeExpression, MemberData,
    QualifiedNameData, RecordTypeData, TokenTypeData, TypeNode, TypeReferenceData, UnionTypeData,
    WrappedTypeData,
};
pub use node_access::{JsDocKind, NodeRef};
pub use parse_rules::{can_start_jsdoc_type, is_type_terminator};
pub use state::ParserState;

use tsz_common::Diagnostic;

/// File name recorded in diagnostics produced by the stateless entry points.
pub const DEFAULT_FILE_NAME: &str = "file.js";

/// Outcome of [`parse_jsdoc_type_expression_with_diagnostics`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsDocParseResult {
    pub type_expression: Option<JsDocTypeExpression>,
    pub diagnostics: Vec<Diagnostic>,
}

impl JsDocParseResult {
    /// The inner type, without the surrounding braces.
    pub fn type_node(&self) -> Option<&TypeNode> {
        self.type_expression.as_ref().map(|expr| &expr.type_node)
    }
}

/// Parse the `{...}` type expression whose opening brace is at `start`.
///
/// Returns the type between the braces, or `None` if the text at `start` is
/// not a complete, supported type expression. Text after the closing brace is
/// never examined.
pub fn parse_jsdoc_type_expression(source: &str, start: u32) -> Option<TypeNode> {
    let mut parser = ParserState::new(DEFAULT_FILE_NAME.to_string(), source.to_string());
    parser
        .parse_jsdoc_type_expression(start, None)
        .map(|expr| expr.type_node)
}

pub fn parse_jsdoc_type_expression_with_diagnostics(
    file_name: &str,
    source: &str,
    start: u32,
) -> JsDocParseResult {
    let mut parser = ParserState::new(file_name.to_string(), source.to_string());
    let type_expression = parser.parse_jsdoc_type_expression(start, None);
    JsDocParseResult {
        type_expression,
        diagnostics: parser.take_diagnostics(),
    }
}
