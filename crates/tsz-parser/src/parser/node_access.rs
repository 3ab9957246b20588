//! Kind tags and uniform tree walking over JSDoc type nodes.
//!
//! The node types are distinct Rust types, so a renderer that wants to treat
//! every node alike borrows it as a [`NodeRef`] and asks for its kind, its
//! range and its children in source order.

use serde::Serialize;
use smallvec::SmallVec;
use tsz_common::limits::NODE_CHILDREN_INLINE;
use tsz_common::{Span, TextRange};

use super::node::{EntityName, IdentifierData, JsDocTypeExpression, MemberData, TypeNode};

/// Kind tag for every node shape the parser produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum JsDocKind {
    TypeExpression,
    UnknownType,
    AllType,
    NullableType,
    NonNullableType,
    OptionalType,
    VariadicType,
    RecordType,
    Member,
    UnionType,
    FunctionType,
    ThisType,
    ConstructorType,
    TypeReference,
    Identifier,
    QualifiedName,
}

impl JsDocKind {
    /// Display name, matching the host compiler's `SyntaxKind` names.
    pub const fn as_str(self) -> &'static str {
        match self {
            JsDocKind::TypeExpression => "JSDocTypeExpression",
            JsDocKind::UnknownType => "JSDocUnknownType",
            JsDocKind::AllType => "JSDocAllType",
            JsDocKind::NullableType => "JSDocNullableType",
            JsDocKind::NonNullableType => "JSDocNonNullableType",
            JsDocKind::OptionalType => "JSDocOptionalType",
            JsDocKind::VariadicType => "JSDocVariadicType",
            JsDocKind::RecordType => "JSDocRecordType",
            JsDocKind::Member => "JSDocMember",
            JsDocKind::UnionType => "JSDocUnionType",
            JsDocKind::FunctionType => "JSDocFunctionType",
            JsDocKind::ThisType => "JSDocThisType",
            JsDocKind::ConstructorType => "JSDocConstructorType",
            JsDocKind::TypeReference => "JSDocTypeReference",
            JsDocKind::Identifier => "Identifier",
            JsDocKind::QualifiedName => "QualifiedName",
        }
    }

    /// True for the kinds that can stand in a type position.
    pub const fn is_type(self) -> bool {
        !matches!(
            self,
            JsDocKind::TypeExpression
                | JsDocKind::Member
                | JsDocKind::Identifier
                | JsDocKind::QualifiedName
        )
    }
}

impl std::fmt::Display for JsDocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed node of any shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRef<'a> {
    TypeExpression(&'a JsDocTypeExpression),
    Type(&'a TypeNode),
    Member(&'a MemberData),
    Name(&'a EntityName),
    Identifier(&'a IdentifierData),
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> JsDocKind {
        match self {
            NodeRef::TypeExpression(_) => JsDocKind::TypeExpression,
            NodeRef::Type(node) => node.kind(),
            NodeRef::Member(_) => JsDocKind::Member,
            NodeRef::Name(EntityName::Identifier(_)) | NodeRef::Identifier(_) => {
                JsDocKind::Identifier
            }
            NodeRef::Name(EntityName::QualifiedName(_)) => JsDocKind::QualifiedName,
        }
    }

    pub fn span(self) -> Span {
        match self {
            NodeRef::TypeExpression(expr) => expr.span(),
            NodeRef::Type(node) => node.span(),
            NodeRef::Member(member) => member.span(),
            NodeRef::Name(name) => name.span(),
            NodeRef::Identifier(ident) => ident.span(),
        }
    }

    /// Visit the direct children in source order.
    pub fn for_each_child(self, mut f: impl FnMut(NodeRef<'a>)) {
        match self {
            NodeRef::TypeExpression(expr) => f(NodeRef::Type(&expr.type_node)),
            NodeRef::Type(node) => node.for_each_child(f),
            NodeRef::Member(member) => {
                f(NodeRef::Identifier(&member.name));
                if let Some(type_node) = &member.type_node {
                    f(NodeRef::Type(type_node));
                }
            }
            NodeRef::Name(EntityName::QualifiedName(qualified)) => {
                f(NodeRef::Name(&qualified.left));
                f(NodeRef::Identifier(&qualified.right));
            }
            NodeRef::Name(EntityName::Identifier(_)) | NodeRef::Identifier(_) => {}
        }
    }

    pub fn children(self) -> SmallVec<[NodeRef<'a>; NODE_CHILDREN_INLINE]> {
        let mut children = SmallVec::new();
        self.for_each_child(|child| children.push(child));
        children
    }

    /// Pre-order walk over this node and everything below it.
    pub fn for_each_descendant(self, f: &mut impl FnMut(NodeRef<'a>)) {
        f(self);
        for child in self.children() {
            child.for_each_descendant(f);
        }
    }
}

impl TypeNode {
    pub fn kind(&self) -> JsDocKind {
        match self {
            TypeNode::UnknownType(_) => JsDocKind::UnknownType,
            TypeNode::AllType(_) => JsDocKind::AllType,
            TypeNode::NullableType(_) => JsDocKind::NullableType,
            TypeNode::NonNullableType(_) => JsDocKind::NonNullableType,
            TypeNode::OptionalType(_) => JsDocKind::OptionalType,
            TypeNode::VariadicType(_) => JsDocKind::VariadicType,
            TypeNode::RecordType(_) => JsDocKind::RecordType,
            TypeNode::UnionType(_) => JsDocKind::UnionType,
            TypeNode::FunctionType(_) => JsDocKind::FunctionType,
            TypeNode::ThisType(_) => JsDocKind::ThisType,
            TypeNode::ConstructorType(_) => JsDocKind::ConstructorType,
            TypeNode::TypeReference(_) => JsDocKind::TypeReference,
        }
    }

    /// Visit the direct children in source order.
    pub fn for_each_child<'a>(&'a self, mut f: impl FnMut(NodeRef<'a>)) {
        match self {
            TypeNode::UnknownType(_) | TypeNode::AllType(_) => {}
            TypeNode::NullableType(data)
            | TypeNode::NonNullableType(data)
            | TypeNode::OptionalType(data)
            | TypeNode::VariadicType(data)
            | TypeNode::ThisType(data)
            | TypeNode::ConstructorType(data) => f(NodeRef::Type(&data.type_node)),
            TypeNode::RecordType(data) => {
                for member in &data.members {
                    f(NodeRef::Member(member));
                }
            }
            TypeNode::UnionType(data) => {
                for type_node in &data.types {
                    f(NodeRef::Type(type_node));
                }
            }
            TypeNode::FunctionType(data) => {
                for parameter in &data.parameters {
                    f(NodeRef::Type(parameter));
                }
                if let Some(return_type) = &data.return_type {
                    f(NodeRef::Type(return_type));
                }
            }
            TypeNode::TypeReference(data) => {
                f(NodeRef::Name(&data.name));
                if let Some(arguments) = &data.type_arguments {
                    for argument in arguments {
                        f(NodeRef::Type(argument));
                    }
                }
            }
        }
    }

    pub fn children(&self) -> SmallVec<[NodeRef<'_>; NODE_CHILDREN_INLINE]> {
        NodeRef::Type(self).children()
    }

    #[inline]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Type(self)
    }
}

impl MemberData {
    #[inline]
    pub fn kind(&self) -> JsDocKind {
        JsDocKind::Member
    }
}

impl EntityName {
    #[inline]
    pub fn kind(&self) -> JsDocKind {
        NodeRef::Name(self).kind()
    }
}

impl JsDocTypeExpression {
    #[inline]
    pub fn kind(&self) -> JsDocKind {
        JsDocKind::TypeExpression
    }

    #[inline]
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::TypeExpression(self)
    }
}
