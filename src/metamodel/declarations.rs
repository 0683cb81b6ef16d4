//! Registration table: one entry per node type.
//!
//! Each entry is the explicit equivalent of what a reflective runtime would
//! discover from fields and getters. Entries may appear in any order; the
//! registry sorts them so that supertypes are built first.

use super::node_type::{NodeType, PrimitiveType, Property};
use super::property::TypeRef;

use self::PropertyDecl as F;
use super::node_type::NodeType as T;
use super::node_type::Property as P;

/// Declaration of one field or derived getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDecl {
    pub property: Property,
    pub ty: TypeRef,
    /// Explicit optional annotation, on top of an `Optional` wrapper.
    pub optional: bool,
    /// List must hold at least one element to be valid.
    pub non_empty: bool,
    pub derived: bool,
}

/// Registration statement for one node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDecl {
    pub node_type: NodeType,
    pub supertype: Option<NodeType>,
    pub is_abstract: bool,
    pub properties: &'static [PropertyDecl],
}

impl PropertyDecl {
    pub const fn field(property: Property, ty: TypeRef) -> Self {
        Self {
            property,
            ty,
            optional: false,
            non_empty: false,
            derived: false,
        }
    }

    pub const fn derived(property: Property, ty: TypeRef) -> Self {
        Self {
            property,
            ty,
            optional: false,
            non_empty: false,
            derived: true,
        }
    }

    pub const fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl TypeDecl {
    pub const fn root(node_type: NodeType, properties: &'static [PropertyDecl]) -> Self {
        Self {
            node_type,
            supertype: None,
            is_abstract: true,
            properties,
        }
    }

    pub const fn abstract_type(
        node_type: NodeType,
        supertype: NodeType,
        properties: &'static [PropertyDecl],
    ) -> Self {
        Self {
            node_type,
            supertype: Some(supertype),
            is_abstract: true,
            properties,
        }
    }

    pub const fn concrete(
        node_type: NodeType,
        supertype: NodeType,
        properties: &'static [PropertyDecl],
    ) -> Self {
        Self {
            node_type,
            supertype: Some(supertype),
            is_abstract: false,
            properties,
        }
    }
}

const fn node(node_type: NodeType) -> TypeRef {
    TypeRef::Node(node_type)
}

const BOOL: TypeRef = TypeRef::Primitive(PrimitiveType::Bool);
const STRING: TypeRef = TypeRef::Primitive(PrimitiveType::String);

pub static DECLARATIONS: &[TypeDecl] = &[
    TypeDecl::root(
        T::Node,
        &[F::field(P::Comment, TypeRef::Optional(&TypeRef::Node(T::Comment)))],
    ),
    // comments
    TypeDecl::abstract_type(T::Comment, T::Node, &[F::field(P::Content, STRING)]),
    TypeDecl::concrete(T::LineComment, T::Comment, &[]),
    TypeDecl::concrete(T::BlockComment, T::Comment, &[]),
    TypeDecl::concrete(T::JavadocComment, T::Comment, &[]),
    // compilation unit
    TypeDecl::concrete(
        T::CompilationUnit,
        T::Node,
        &[
            F::field(
                P::PackageDeclaration,
                TypeRef::Optional(&TypeRef::Node(T::PackageDeclaration)),
            ),
            F::field(P::Imports, TypeRef::List(&TypeRef::Node(T::ImportDeclaration))),
            F::field(P::Types, TypeRef::List(&TypeRef::Node(T::TypeDeclaration))),
            F::derived(P::PrimaryType, TypeRef::Optional(&TypeRef::Node(T::TypeDeclaration))),
        ],
    ),
    TypeDecl::concrete(
        T::PackageDeclaration,
        T::Node,
        &[F::field(P::Name, node(T::Name))],
    ),
    TypeDecl::concrete(
        T::ImportDeclaration,
        T::Node,
        &[
            F::field(P::Name, node(T::Name)),
            F::field(P::Static, BOOL),
            F::field(P::Asterisk, BOOL),
        ],
    ),
    // names
    TypeDecl::concrete(
        T::Name,
        T::Node,
        &[
            F::field(P::Qualifier, TypeRef::Optional(&TypeRef::Node(T::Name))),
            F::field(P::Identifier, STRING),
            F::derived(P::Qualified, STRING),
        ],
    ),
    TypeDecl::concrete(
        T::SimpleName,
        T::Node,
        &[F::field(P::Identifier, STRING)],
    ),
    // declarations
    TypeDecl::abstract_type(T::BodyDeclaration, T::Node, &[]),
    TypeDecl::abstract_type(
        T::TypeDeclaration,
        T::BodyDeclaration,
        &[
            F::field(P::Name, node(T::SimpleName)),
            F::field(P::Members, TypeRef::List(&TypeRef::Node(T::BodyDeclaration))),
        ],
    ),
    TypeDecl::concrete(
        T::ClassOrInterfaceDeclaration,
        T::TypeDeclaration,
        &[F::field(P::Interface, BOOL)],
    ),
    TypeDecl::concrete(
        T::MethodDeclaration,
        T::BodyDeclaration,
        &[
            F::field(P::Name, node(T::SimpleName)),
            F::field(P::Parameters, TypeRef::List(&TypeRef::Node(T::Parameter))),
            F::field(P::Body, TypeRef::Optional(&TypeRef::Node(T::BlockStmt))),
        ],
    ),
    TypeDecl::concrete(
        T::Parameter,
        T::Node,
        &[
            F::field(P::TypeName, node(T::Name)),
            F::field(P::Name, node(T::SimpleName)),
        ],
    ),
    // statements
    TypeDecl::abstract_type(T::Statement, T::Node, &[]),
    TypeDecl::concrete(
        T::BlockStmt,
        T::Statement,
        &[F::field(P::Statements, TypeRef::List(&TypeRef::Node(T::Statement)))],
    ),
    TypeDecl::concrete(
        T::ExpressionStmt,
        T::Statement,
        &[F::field(P::Expression, node(T::Expression))],
    ),
    TypeDecl::concrete(
        T::ReturnStmt,
        T::Statement,
        &[F::field(P::Expression, TypeRef::Optional(&TypeRef::Node(T::Expression)))],
    ),
    // expressions
    TypeDecl::abstract_type(T::Expression, T::Node, &[]),
    TypeDecl::concrete(
        T::NameExpr,
        T::Expression,
        &[F::field(P::Name, node(T::SimpleName))],
    ),
    TypeDecl::concrete(
        T::BinaryExpr,
        T::Expression,
        &[
            F::field(P::Left, node(T::Expression)),
            F::field(P::Right, node(T::Expression)),
            F::field(
                P::Operator,
                TypeRef::Primitive(PrimitiveType::BinaryOperator),
            ),
        ],
    ),
    TypeDecl::concrete(
        T::UnaryExpr,
        T::Expression,
        &[
            F::field(P::Expression, node(T::Expression)),
            F::field(P::Operator, TypeRef::Primitive(PrimitiveType::UnaryOperator)),
        ],
    ),
    TypeDecl::concrete(
        T::EnclosedExpr,
        T::Expression,
        &[F::field(P::Inner, node(T::Expression))],
    ),
    TypeDecl::concrete(
        T::MethodCallExpr,
        T::Expression,
        &[
            F::field(P::Scope, TypeRef::Optional(&TypeRef::Node(T::Expression))),
            F::field(P::Name, node(T::SimpleName)),
            F::field(P::Arguments, TypeRef::List(&TypeRef::Node(T::Expression))),
        ],
    ),
    TypeDecl::concrete(
        T::LocationSetConstructorExpr,
        T::Expression,
        &[
            F::field(P::Name, node(T::SimpleName)),
            F::field(P::Arguments, TypeRef::List(&TypeRef::Node(T::Expression))).non_empty(),
        ],
    ),
    TypeDecl::abstract_type(T::LiteralExpr, T::Expression, &[]),
    TypeDecl::concrete(
        T::BooleanLiteralExpr,
        T::LiteralExpr,
        &[F::field(P::Value, BOOL)],
    ),
    TypeDecl::abstract_type(
        T::LiteralStringValueExpr,
        T::LiteralExpr,
        &[F::field(P::Value, STRING)],
    ),
    TypeDecl::concrete(T::IntegerLiteralExpr, T::LiteralStringValueExpr, &[]),
    TypeDecl::concrete(T::StringLiteralExpr, T::LiteralStringValueExpr, &[]),
];
