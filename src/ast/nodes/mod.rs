//! Typed wrappers over untyped arena nodes.
//!
//! Each struct wraps a [`NodeId`] and provides accessors for that node
//! type's properties. Wrappers are `Copy` handles: every accessor takes the
//! owning [`Ast`] explicitly, and every setter goes through the generic
//! [`Ast::set`] / list operations so the ownership and notification contract
//! lives in one place.

use smol_str::SmolStr;

use super::Ast;
use super::error::AstError;
use super::value::Value;
use crate::base::{NodeId, Span};
use crate::metamodel::{ClassMetaModel, NodeType, Property, registry};

/// Trait for typed handles over arena nodes.
pub trait AstNode: Copy {
    /// The node type this wrapper stands for (abstract or concrete).
    const NODE_TYPE: NodeType;

    /// Whether a node of `node_type` can be viewed through this wrapper.
    fn can_cast(node_type: NodeType) -> bool {
        registry().is_subtype(node_type, Self::NODE_TYPE)
    }

    fn cast(ast: &Ast, id: NodeId) -> Option<Self>;

    fn id(&self) -> NodeId;

    fn parent(&self, ast: &Ast) -> Option<NodeId> {
        ast.parent(self.id())
    }

    fn range(&self, ast: &Ast) -> Option<Span> {
        ast.range(self.id())
    }

    fn meta_model(&self, ast: &Ast) -> &'static ClassMetaModel {
        ast.meta_model(self.id())
    }

    fn comment(&self, ast: &Ast) -> Option<Comment> {
        ast.optional_child(self.id(), Property::Comment).map(Comment)
    }

    fn set_comment(&self, ast: &mut Ast, comment: Option<Comment>) -> Result<(), AstError> {
        ast.set(self.id(), Property::Comment, comment.map(|c| c.0).into())
    }

    /// Detach this node from its parent (see [`Ast::remove_node`]).
    fn remove(&self, ast: &mut Ast) -> Result<bool, AstError> {
        ast.remove_node(self.id())
    }

    /// Put `replacement` in this node's place (see [`Ast::replace_node`]).
    fn replace_with<N: AstNode>(&self, ast: &mut Ast, replacement: N) -> Result<bool, AstError> {
        ast.replace_node(self.id(), replacement.id())
    }

    /// Structural equality with another node of the same arena.
    fn equals<N: AstNode>(&self, ast: &Ast, other: N) -> bool {
        ast.equals(self.id(), other.id())
    }
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) $crate::base::NodeId);

        impl $crate::ast::nodes::AstNode for $name {
            const NODE_TYPE: $crate::metamodel::NodeType = $crate::metamodel::NodeType::$name;

            fn cast(ast: &$crate::ast::Ast, id: $crate::base::NodeId) -> Option<Self> {
                if ast.contains(id) && Self::can_cast(ast.node_type(id)) {
                    Some(Self(id))
                } else {
                    None
                }
            }

            fn id(&self) -> $crate::base::NodeId {
                self.0
            }
        }

        impl From<$name> for $crate::base::NodeId {
            fn from(node: $name) -> Self {
                node.0
            }
        }

        impl $name {
            /// Deep copy of this subtree, detached, in the same arena.
            pub fn clone_node(
                &self,
                ast: &mut $crate::ast::Ast,
            ) -> Result<Self, $crate::ast::AstError> {
                ast.clone_node(self.0).map(Self)
            }
        }
    };
}

/// `impl From<Sub> for Super` for every listed subtype.
macro_rules! upcast {
    ($super:ident: $($sub:ident),+ $(,)?) => {
        $(
            impl From<$sub> for $super {
                fn from(node: $sub) -> Self {
                    $super(node.0)
                }
            }
        )+
    };
}

/// Getter and setter for a mandatory single-child property.
macro_rules! node_property {
    ($get:ident, $set:ident, $prop:ident, $ty:ident) => {
        pub fn $get(&self, ast: &$crate::ast::Ast) -> $ty {
            $ty(ast.required_child(self.0, $crate::metamodel::Property::$prop))
        }

        pub fn $set(
            &self,
            ast: &mut $crate::ast::Ast,
            value: impl Into<$ty>,
        ) -> Result<(), $crate::ast::AstError> {
            ast.set(
                self.0,
                $crate::metamodel::Property::$prop,
                $crate::ast::Value::Node(value.into().0),
            )
        }
    };
}

/// Getter and setter for an optional single-child property.
macro_rules! optional_node_property {
    ($get:ident, $set:ident, $prop:ident, $ty:ident) => {
        pub fn $get(&self, ast: &$crate::ast::Ast) -> Option<$ty> {
            ast.optional_child(self.0, $crate::metamodel::Property::$prop)
                .map($ty)
        }

        pub fn $set(
            &self,
            ast: &mut $crate::ast::Ast,
            value: Option<$ty>,
        ) -> Result<(), $crate::ast::AstError> {
            ast.set(
                self.0,
                $crate::metamodel::Property::$prop,
                value.map(|node| node.0).into(),
            )
        }
    };
}

/// Element getter and appender for a list property.
macro_rules! list_property {
    ($get:ident, $add:ident, $prop:ident, $ty:ident) => {
        pub fn $get(&self, ast: &$crate::ast::Ast) -> Vec<$ty> {
            ast.child_list(self.0, $crate::metamodel::Property::$prop)
                .into_iter()
                .map($ty)
                .collect()
        }

        pub fn $add(
            &self,
            ast: &mut $crate::ast::Ast,
            value: impl Into<$ty>,
        ) -> Result<(), $crate::ast::AstError> {
            ast.list_push(
                self.0,
                $crate::metamodel::Property::$prop,
                value.into().0,
            )
        }
    };
}

macro_rules! bool_property {
    ($get:ident, $set:ident, $prop:ident) => {
        pub fn $get(&self, ast: &$crate::ast::Ast) -> bool {
            ast.get(self.0, $crate::metamodel::Property::$prop)
                .ok()
                .and_then($crate::ast::Value::as_bool)
                .unwrap_or_default()
        }

        pub fn $set(
            &self,
            ast: &mut $crate::ast::Ast,
            value: bool,
        ) -> Result<(), $crate::ast::AstError> {
            ast.set(
                self.0,
                $crate::metamodel::Property::$prop,
                $crate::ast::Value::Bool(value),
            )
        }
    };
}

macro_rules! str_property {
    ($get:ident, $set:ident, $prop:ident) => {
        pub fn $get<'a>(&self, ast: &'a $crate::ast::Ast) -> &'a str {
            ast.get(self.0, $crate::metamodel::Property::$prop)
                .ok()
                .and_then($crate::ast::Value::as_str)
                .unwrap_or_default()
        }

        pub fn $set(
            &self,
            ast: &mut $crate::ast::Ast,
            value: impl Into<smol_str::SmolStr>,
        ) -> Result<(), $crate::ast::AstError> {
            ast.set(
                self.0,
                $crate::metamodel::Property::$prop,
                $crate::ast::Value::Str(value.into()),
            )
        }
    };
}

mod comments;
mod compilation_unit;
mod declarations;
mod expressions;
mod names;
mod statements;

pub use comments::{BlockComment, Comment, JavadocComment, LineComment};
pub use compilation_unit::{CompilationUnit, ImportDeclaration, PackageDeclaration};
pub use declarations::{
    BodyDeclaration, ClassOrInterfaceDeclaration, MethodDeclaration, Parameter, TypeDeclaration,
};
pub use expressions::{
    BinaryExpr, BooleanLiteralExpr, EnclosedExpr, Expression, IntegerLiteralExpr, LiteralExpr,
    LiteralStringValueExpr, LocationSetConstructorExpr, MethodCallExpr, NameExpr,
    StringLiteralExpr, UnaryExpr,
};
pub use names::{Name, SimpleName};
pub use statements::{BlockStmt, ExpressionStmt, ReturnStmt, Statement};

impl Ast {
    /// Child in a mandatory single-valued slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a node, which construction and
    /// [`Ast::set`] never allow for a mandatory property.
    pub(crate) fn required_child(&self, id: NodeId, property: Property) -> NodeId {
        match self.get(id, property) {
            Ok(Value::Node(child)) => *child,
            other => unreachable!("mandatory property {property} of {id} holds {other:?}"),
        }
    }

    pub(crate) fn optional_child(&self, id: NodeId, property: Property) -> Option<NodeId> {
        self.get(id, property).ok().and_then(Value::as_node)
    }

    pub(crate) fn child_list(&self, id: NodeId, property: Property) -> Vec<NodeId> {
        self.list(id, property)
            .map(|list| list.as_slice().to_vec())
            .unwrap_or_default()
    }
}

/// Node ids of typed handles, for list-valued constructor arguments.
pub(crate) fn ids<N: AstNode>(nodes: impl IntoIterator<Item = N>) -> Value {
    Value::List(nodes.into_iter().map(|node| node.id()).collect())
}

pub(crate) fn text(value: impl Into<SmolStr>) -> Value {
    Value::Str(value.into())
}
