//! Parser for JSDoc / Closure-Compiler type expressions.
//!
//! The parser reads the `{...}` type annotation of a JSDoc tag and produces an
//! owned tree of [`TypeNode`] values with absolute source spans:
//!
//! ```text
//! /** @param {function(string, number=): ?Array.<T>} callback */
//! ```
//!
//! Unsupported or malformed syntax never yields a partial tree: every entry
//! point returns `None`, and [`ParserState::get_diagnostics`] describes where
//! the grammar gave up.

pub mod parser;

pub use parser::{
    EntityName, IdentifierData, JsDocKind, JsDocParseResult, JsDocTypeExpression, MemberData,
    NodeList, NodeRef, ParserState, QualifiedNameData, TypeNode, parse_jsdoc_type_expression,
    parse_jsdoc_type_expression_with_diagnostics,
};
