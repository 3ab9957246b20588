//! JSDoc type-expression node data.
//!
//! Nodes are plain owned values built bottom-up by the parser. Every node
//! carries its own `[pos, end)` range; `pos` includes leading trivia (the
//! node's full start) and `end` is the end of its last token.
//!
//! Serialization uses an internal `kind` tag, so a tree renders as
//! `{"kind":"NullableType","pos":1,"end":8,"type":{...}}`. Members and
//! names carry the same tag (`Member`, `Identifier`, `QualifiedName`).

use serde::Serialize;
use tsz_common::TextRange;
use tsz_scanner::SyntaxKind;

use super::base::NodeList;

/// A type node with no children (`?` and `*`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenTypeData {
    pub pos: u32,
    pub end: u32,
}

/// A type node with a single operand: `?T`, `!T`, `T=`, `...T`, `this:T`,
/// `new:T`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrappedTypeData {
    pub pos: u32,
    pub end: u32,
    #[serde(rename = "type")]
    pub type_node: Box<TypeNode>,
}

impl WrappedTypeData {
    pub(crate) fn new(pos: u32, end: u32, type_node: TypeNode) -> WrappedTypeData {
        WrappedTypeData {
            pos,
            end,
            type_node: Box::new(type_node),
        }
    }
}

/// `{a: T, b}`. The range includes both braces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordTypeData {
    pub pos: u32,
    pub end: u32,
    pub members: NodeList<MemberData>,
}

/// One `name` or `name: T` entry of a record type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "Member")]
pub struct MemberData {
    pub pos: u32,
    pub end: u32,
    pub name: IdentifierData,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_node: Option<Box<TypeNode>>,
}

/// `(A|B)`, or a bare `A|B` directly inside the braces. Always two or more
/// members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnionTypeData {
    pub pos: u32,
    pub end: u32,
    pub types: NodeList<TypeNode>,
}

/// `function(A, B): R`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeData {
    pub pos: u32,
    pub end: u32,
    pub parameters: NodeList<TypeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<TypeNode>>,
}

/// `a.b.C` optionally followed by `.<T, U>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReferenceData {
    pub pos: u32,
    pub end: u32,
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<NodeList<TypeNode>>,
}

/// A single name segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "Identifier", rename_all = "camelCase")]
pub struct IdentifierData {
    pub pos: u32,
    pub end: u32,
    pub escaped_text: String,
    /// `Identifier`, or `FunctionKeyword` when the reserved word `function`
    /// was accepted as a name.
    pub original_token: SyntaxKind,
}

/// `left.right`, where `left` holds every segment but the last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "QualifiedName")]
pub struct QualifiedNameData {
    pub pos: u32,
    pub end: u32,
    pub left: Box<EntityName>,
    pub right: IdentifierData,
}

/// A possibly dotted name. Both variants tag themselves when serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityName {
    Identifier(IdentifierData),
    QualifiedName(QualifiedNameData),
}

impl EntityName {
    /// The dotted source form, e.g. `a.b.function`.
    pub fn text(&self) -> String {
        match self {
            EntityName::Identifier(ident) => ident.escaped_text.clone(),
            EntityName::QualifiedName(qualified) => {
                let mut text = qualified.left.text();
                text.push('.');
                text.push_str(&qualified.right.escaped_text);
                text
            }
        }
    }

    /// The last segment of the name.
    pub fn rightmost(&self) -> &IdentifierData {
        match self {
            EntityName::Identifier(ident) => ident,
            EntityName::QualifiedName(qualified) => &qualified.right,
        }
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        matches!(self, EntityName::QualifiedName(_))
    }
}

/// A parsed JSDoc type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TypeNode {
    /// `?` on its own.
    UnknownType(TokenTypeData),
    /// `*`.
    AllType(TokenTypeData),
    NullableType(WrappedTypeData),
    NonNullableType(WrappedTypeData),
    OptionalType(WrappedTypeData),
    VariadicType(WrappedTypeData),
    RecordType(RecordTypeData),
    UnionType(UnionTypeData),
    FunctionType(FunctionTypeData),
    ThisType(WrappedTypeData),
    ConstructorType(WrappedTypeData),
    TypeReference(TypeReferenceData),
}

impl TypeNode {
    /// The single operand of a wrapper type (`?T`, `!T`, `T=`, `...T`,
    /// `this:T`, `new:T`).
    pub fn operand(&self) -> Option<&TypeNode> {
        match self {
            TypeNode::NullableType(data)
            | TypeNode::NonNullableType(data)
            | TypeNode::OptionalType(data)
            | TypeNode::VariadicType(data)
            | TypeNode::ThisType(data)
            | TypeNode::ConstructorType(data) => Some(&data.type_node),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordTypeData> {
        match self {
            TypeNode::RecordType(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionTypeData> {
        match self {
            TypeNode::UnionType(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionTypeData> {
        match self {
            TypeNode::FunctionType(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_type_reference(&self) -> Option<&TypeReferenceData> {
        match self {
            TypeNode::TypeReference(data) => Some(data),
            _ => None,
        }
    }
}

/// A whole `{...}` annotation. Unlike the inner type, the range includes
/// both braces, so a caller scanning a comment can resume at `end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "TypeExpression")]
pub struct JsDocTypeExpression {
    pub pos: u32,
    pub end: u32,
    #[serde(rename = "type")]
    pub type_node: TypeNode,
}

macro_rules! impl_text_range {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextRange for $ty {
                #[inline]
                fn pos(&self) -> u32 {
                    self.pos
                }

                #[inline]
                fn end(&self) -> u32 {
                    self.end
                }
            }
        )*
    };
}

impl_text_range!(
    TokenTypeData,
    WrappedTypeData,
    RecordTypeData,
    MemberData,
    UnionTypeData,
    FunctionTypeData,
    TypeReferenceData,
    IdentifierData,
    QualifiedNameData,
    JsDocTypeExpression,
);

impl TextRange for EntityName {
    fn pos(&self) -> u32 {
        match self {
            EntityName::Identifier(data) => data.pos,
            EntityName::QualifiedName(data) => data.pos,
        }
    }

    fn end(&self) -> u32 {
        match self {
            EntityName::Identifier(data) => data.end,
            EntityName::QualifiedName(data) => data.end,
        }
    }
}

impl TextRange for TypeNode {
    fn pos(&self) -> u32 {
        match self {
            TypeNode::UnknownType(data) | TypeNode::AllType(data) => data.pos,
            TypeNode::NullableType(data)
            | TypeNode::NonNullableType(data)
            | TypeNode::OptionalType(data)
            | TypeNode::VariadicType(data)
            | TypeNode::ThisType(data)
            | TypeNode::ConstructorType(data) => data.pos,
            TypeNode::RecordType(data) => data.pos,
            TypeNode::UnionType(data) => data.pos,
            TypeNode::FunctionType(data) => data.pos,
            TypeNode::TypeReference(data) => data.pos,
        }
    }

    fn end(&self) -> u32 {
        match self {
            TypeNode::UnknownType(data) | TypeNode::AllType(data) => data.end,
            TypeNode::NullableType(data)
            | TypeNode::NonNullableType(data)
            | TypeNode::OptionalType(data)
            | TypeNode::VariadicType(data)
            | TypeNode::ThisType(data)
            | TypeNode::ConstructorType(data) => data.end,
            TypeNode::RecordType(data) => data.end,
            TypeNode::UnionType(data) => data.end,
            TypeNode::FunctionType(data) => data.end,
            TypeNode::TypeReference(data) => data.end,
        }
    }
}
