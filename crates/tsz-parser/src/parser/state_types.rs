//! Parser state - JSDoc type productions.
//!
//! Grammar (Closure Compiler dialect):
//!
//! ```text
//! TypeExpression  := '{' TopLevelType '}'
//! TopLevelType    := NonOptionalType ('|' NonOptionalType)* '='?
//! Type            := NonOptionalType '='?
//! NonOptionalType := '?' NonOptionalType? | '*' | '!' NonOptionalType
//!                  | '{' (Member (',' Member)*)? '}'
//!                  | '(' NonOptionalType ('|' NonOptionalType)+ ')'
//!                  | 'function' '(' (Type (',' Type)*)? ')' (':' NonOptionalType)?
//!                  | 'this' ':' NonOptionalType | 'new' ':' NonOptionalType
//!                  | '...' NonOptionalType
//!                  | EntityName ('.' '<' Type (',' Type)* '>')?
//! Member          := (Identifier | 'function') (':' Type)?
//! EntityName      := Identifier ('.' Identifier)* ('.' 'function')?
//! ```
//!
//! Every production returns `None` on failure with the cursor restored to
//! where it started.

use tracing::trace;
use tsz_common::TextRange;
use tsz_common::diagnostics::diagnostic_messages;
use tsz_scanner::SyntaxKind;

use super::base::NodeList;
use super::node::{
    EntityName, FunctionTypeData, IdentifierData, JsDocTypeExpression, MemberData,
    QualifiedNameData, RecordTypeData, TokenTypeData, TypeNode, TypeReferenceData, UnionTypeData,
    WrappedTypeData,
};
use super::parse_rules::{can_start_jsdoc_type, is_type_terminator, look_ahead_is};
use super::state::ParserState;

impl ParserState {
    // =========================================================================
    // Entry point
    // =========================================================================

    /// Parse the `{...}` type expression whose opening brace is the first
    /// token at `start`.
    ///
    /// `length`, when given, hides everything from `start + length` on.
    /// The returned expression spans both braces. On failure
    /// [`get_diagnostics`](Self::get_diagnostics) holds one diagnostic for
    /// the furthest point the grammar reached.
    pub fn parse_jsdoc_type_expression(
        &mut self,
        start: u32,
        length: Option<u32>,
    ) -> Option<JsDocTypeExpression> {
        trace!(start, ?length, "parse_jsdoc_type_expression");
        self.begin_parse(start, length);

        let result = self.try_parse(Self::parse_jsdoc_type_expression_worker);
        if result.is_none() {
            self.report_furthest_failure();
        }
        result
    }

    fn parse_jsdoc_type_expression_worker(&mut self) -> Option<JsDocTypeExpression> {
        let pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let type_node = self.parse_top_level_type()?;
        if !self.is_token(SyntaxKind::CloseBraceToken) {
            return self.fail(&diagnostic_messages::EXPECTED, Some("}"));
        }
        // The closing brace is not consumed; nothing after it is scanned.
        let end = self.token_end();
        Some(JsDocTypeExpression {
            pos,
            end,
            type_node,
        })
    }

    /// The type directly inside the braces, where a bare `A|B` union is
    /// allowed.
    fn parse_top_level_type(&mut self) -> Option<TypeNode> {
        let first = self.parse_non_optional_type()?;
        let type_node = if self.is_token(SyntaxKind::BarToken) {
            let pos = first.pos();
            let mut types = vec![first];
            while self.parse_optional(SyntaxKind::BarToken) {
                types.push(self.parse_non_optional_type()?);
            }
            TypeNode::UnionType(UnionTypeData {
                pos,
                end: self.node_end(),
                types: NodeList::from_nodes(types, pos),
            })
        } else {
            first
        };
        Some(self.parse_optional_type_suffix(type_node))
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// A type with an optional trailing `=`.
    pub(crate) fn parse_type(&mut self) -> Option<TypeNode> {
        let type_node = self.parse_non_optional_type()?;
        Some(self.parse_optional_type_suffix(type_node))
    }

    fn parse_optional_type_suffix(&mut self, type_node: TypeNode) -> TypeNode {
        if !self.is_token(SyntaxKind::EqualsToken) {
            return type_node;
        }
        let pos = type_node.pos();
        self.next_token();
        TypeNode::OptionalType(WrappedTypeData::new(pos, self.node_end(), type_node))
    }

    /// A type without the `=` suffix.
    pub(crate) fn parse_non_optional_type(&mut self) -> Option<TypeNode> {
        self.with_nesting(|parser| parser.try_parse(Self::parse_basic_type_expression))
    }

    fn parse_basic_type_expression(&mut self) -> Option<TypeNode> {
        match self.token() {
            SyntaxKind::QuestionToken => self.parse_unknown_or_nullable_type(),
            SyntaxKind::AsteriskToken => self.parse_all_type(),
            SyntaxKind::ExclamationToken => self.parse_non_nullable_type(),
            SyntaxKind::OpenBraceToken => self.parse_record_type(),
            SyntaxKind::OpenParenToken => self.parse_union_type(),
            SyntaxKind::FunctionKeyword => self.parse_function_type(),
            SyntaxKind::ThisKeyword => self.parse_this_type(),
            SyntaxKind::NewKeyword => self.parse_constructor_type(),
            SyntaxKind::DotDotDotToken => self.parse_variadic_type(),
            _ => self.parse_type_reference(),
        }
    }

    /// `?` alone is the unknown type; `?T` is nullable.
    fn parse_unknown_or_nullable_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        if is_type_terminator(self.token()) {
            return Some(TypeNode::UnknownType(TokenTypeData {
                pos,
                end: self.node_end(),
            }));
        }
        let type_node = self.parse_non_optional_type()?;
        Some(TypeNode::NullableType(WrappedTypeData::new(
            pos,
            self.node_end(),
            type_node,
        )))
    }

    fn parse_all_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        if !is_type_terminator(self.token()) {
            return self.fail(&diagnostic_messages::UNEXPECTED_TOKEN, None);
        }
        Some(TypeNode::AllType(TokenTypeData {
            pos,
            end: self.node_end(),
        }))
    }

    fn parse_non_nullable_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        let type_node = self.parse_non_optional_type()?;
        Some(TypeNode::NonNullableType(WrappedTypeData::new(
            pos,
            self.node_end(),
            type_node,
        )))
    }

    fn parse_variadic_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        let type_node = self.parse_non_optional_type()?;
        Some(TypeNode::VariadicType(WrappedTypeData::new(
            pos,
            self.node_end(),
            type_node,
        )))
    }

    /// `this:T`.
    fn parse_this_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        self.parse_expected(SyntaxKind::ColonToken)?;
        let type_node = self.parse_non_optional_type()?;
        Some(TypeNode::ThisType(WrappedTypeData::new(
            pos,
            self.node_end(),
            type_node,
        )))
    }

    /// `new:T`.
    fn parse_constructor_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        self.parse_expected(SyntaxKind::ColonToken)?;
        let type_node = self.parse_non_optional_type()?;
        Some(TypeNode::ConstructorType(WrappedTypeData::new(
            pos,
            self.node_end(),
            type_node,
        )))
    }

    // =========================================================================
    // Records
    // =========================================================================

    fn parse_record_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        let members =
            self.parse_delimited_list(SyntaxKind::CloseBraceToken, Self::parse_record_member)?;
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Some(TypeNode::RecordType(RecordTypeData {
            pos,
            end: self.node_end(),
            members,
        }))
    }

    fn parse_record_member(&mut self) -> Option<MemberData> {
        let pos = self.token_pos();
        let name = if self.is_token(SyntaxKind::FunctionKeyword) {
            self.parse_identifier_token(SyntaxKind::FunctionKeyword)
        } else {
            self.parse_identifier()?
        };
        let type_node = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(Box::new(self.parse_type()?))
        } else {
            None
        };
        Some(MemberData {
            pos,
            end: self.node_end(),
            name,
            type_node,
        })
    }

    // =========================================================================
    // Unions and functions
    // =========================================================================

    /// `(A|B|...)` with at least two members.
    fn parse_union_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        let first = self.parse_non_optional_type()?;
        let list_pos = first.pos();
        let mut types = vec![first];
        if !self.is_token(SyntaxKind::BarToken) {
            return self.fail(&diagnostic_messages::EXPECTED, Some("|"));
        }
        while self.parse_optional(SyntaxKind::BarToken) {
            types.push(self.parse_non_optional_type()?);
        }
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Some(TypeNode::UnionType(UnionTypeData {
            pos,
            end: self.node_end(),
            types: NodeList::from_nodes(types, list_pos),
        }))
    }

    /// `function(A, B): R`.
    fn parse_function_type(&mut self) -> Option<TypeNode> {
        let pos = self.token_pos();
        self.next_token();
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let parameters = self.parse_delimited_list(SyntaxKind::CloseParenToken, Self::parse_type)?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let return_type = if self.parse_optional(SyntaxKind::ColonToken) {
            Some(Box::new(self.parse_non_optional_type()?))
        } else {
            None
        };
        Some(TypeNode::FunctionType(FunctionTypeData {
            pos,
            end: self.node_end(),
            parameters,
            return_type,
        }))
    }

    // =========================================================================
    // Type references and names
    // =========================================================================

    /// `a.b.C` with optional `.<T, ...>` arguments.
    fn parse_type_reference(&mut self) -> Option<TypeNode> {
        if !can_start_jsdoc_type(self.token()) {
            if self.is_reserved_word() {
                return self.fail_identifier_expected();
            }
            return self.fail(&diagnostic_messages::TYPE_EXPECTED, None);
        }
        let pos = self.token_pos();
        let name = self.parse_entity_name()?;
        let type_arguments = if self.is_token(SyntaxKind::DotToken) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        Some(TypeNode::TypeReference(TypeReferenceData {
            pos,
            end: self.node_end(),
            name,
            type_arguments,
        }))
    }

    /// Dotted name, stopping before a `.` that opens type arguments. The
    /// `function` keyword is accepted as the final segment only.
    fn parse_entity_name(&mut self) -> Option<EntityName> {
        let mut entity = EntityName::Identifier(self.parse_identifier()?);
        while self.is_token(SyntaxKind::DotToken)
            && !look_ahead_is(&mut self.scanner, |kind| kind == SyntaxKind::LessThanToken)
        {
            let pos = entity.pos();
            self.next_token();
            let is_function = self.is_token(SyntaxKind::FunctionKeyword);
            let right = if is_function {
                self.parse_identifier_token(SyntaxKind::FunctionKeyword)
            } else {
                self.parse_identifier()?
            };
            entity = EntityName::QualifiedName(QualifiedNameData {
                pos,
                end: self.node_end(),
                left: Box::new(entity),
                right,
            });
            if is_function {
                break;
            }
        }
        Some(entity)
    }

    /// `.<T, U>`; an empty list fails.
    fn parse_type_arguments(&mut self) -> Option<NodeList<TypeNode>> {
        self.parse_expected(SyntaxKind::DotToken)?;
        self.parse_expected(SyntaxKind::LessThanToken)?;
        if self.is_token(SyntaxKind::GreaterThanToken) {
            return self.fail(&diagnostic_messages::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY, None);
        }
        let arguments =
            self.parse_delimited_list(SyntaxKind::GreaterThanToken, Self::parse_type)?;
        self.parse_expected(SyntaxKind::GreaterThanToken)?;
        Some(arguments)
    }

    fn parse_identifier(&mut self) -> Option<IdentifierData> {
        if !self.is_identifier() {
            return self.fail_identifier_expected();
        }
        Some(self.parse_identifier_token(SyntaxKind::Identifier))
    }

    /// Consume the current token as a name segment.
    fn parse_identifier_token(&mut self, original_token: SyntaxKind) -> IdentifierData {
        let pos = self.token_pos();
        let escaped_text = self.token_value().to_string();
        self.next_token();
        IdentifierData {
            pos,
            end: self.node_end(),
            escaped_text,
            original_token,
        }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Comma-separated elements up to (not including) `terminator`. The list
    /// may be empty; a comma directly before `terminator` fails.
    fn parse_delimited_list<T: TextRange>(
        &mut self,
        terminator: SyntaxKind,
        mut parse_element: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<NodeList<T>> {
        let list_pos = self.token_pos();
        let mut nodes = Vec::new();
        if !self.is_token(terminator) {
            loop {
                nodes.push(parse_element(self)?);
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    break;
                }
                if self.is_token(terminator) {
                    return self.fail(&diagnostic_messages::TRAILING_COMMA_NOT_ALLOWED, None);
                }
            }
        }
        Some(NodeList::from_nodes(nodes, list_pos))
    }
}
