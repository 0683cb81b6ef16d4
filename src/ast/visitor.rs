//! Double-dispatch visitors over concrete node types.
//!
//! [`GenericVisitor`] returns a value and takes an argument; every method
//! defaults to [`GenericVisitor::visit_default`]. [`VoidVisitor`] returns
//! nothing and by default walks into every child, so an implementation only
//! overrides the node types it cares about.

use super::Ast;
use super::nodes::{
    BinaryExpr, BlockComment, BlockStmt, BooleanLiteralExpr, ClassOrInterfaceDeclaration,
    CompilationUnit, EnclosedExpr, ExpressionStmt, ImportDeclaration, IntegerLiteralExpr,
    JavadocComment, LineComment, LocationSetConstructorExpr, MethodCallExpr, MethodDeclaration,
    Name, NameExpr, PackageDeclaration, Parameter, ReturnStmt, SimpleName, StringLiteralExpr,
    UnaryExpr,
};
use crate::base::NodeId;
use crate::metamodel::NodeType;

macro_rules! visitors {
    ($($ty:ident => $method:ident),+ $(,)?) => {
        /// Visitor producing an `R` from every node, threading an `A`.
        pub trait GenericVisitor<R, A> {
            /// Fallback for node types without an override.
            fn visit_default(&mut self, ast: &Ast, node: NodeId, arg: A) -> R;

            $(
                fn $method(&mut self, ast: &Ast, node: $ty, arg: A) -> R {
                    self.visit_default(ast, node.0, arg)
                }
            )+
        }

        /// Visitor for side effects; the defaults recurse into children.
        pub trait VoidVisitor<A: Clone> {
            fn visit_default(&mut self, ast: &Ast, node: NodeId, arg: A) {
                walk_children(self, ast, node, arg);
            }

            $(
                fn $method(&mut self, ast: &Ast, node: $ty, arg: A) {
                    self.visit_default(ast, node.0, arg)
                }
            )+
        }

        impl Ast {
            /// Dispatch `node` to the visitor method of its concrete type.
            pub fn accept<R, A, V>(&self, node: NodeId, visitor: &mut V, arg: A) -> R
            where
                V: GenericVisitor<R, A> + ?Sized,
            {
                match self.node_type(node) {
                    $(NodeType::$ty => visitor.$method(self, $ty(node), arg),)+
                    other => unreachable!("node {node} has abstract type {other}"),
                }
            }

            pub fn accept_void<A, V>(&self, node: NodeId, visitor: &mut V, arg: A)
            where
                A: Clone,
                V: VoidVisitor<A> + ?Sized,
            {
                match self.node_type(node) {
                    $(NodeType::$ty => visitor.$method(self, $ty(node), arg),)+
                    other => unreachable!("node {node} has abstract type {other}"),
                }
            }
        }
    };
}

visitors! {
    LineComment => visit_line_comment,
    BlockComment => visit_block_comment,
    JavadocComment => visit_javadoc_comment,
    CompilationUnit => visit_compilation_unit,
    PackageDeclaration => visit_package_declaration,
    ImportDeclaration => visit_import_declaration,
    Name => visit_name,
    SimpleName => visit_simple_name,
    ClassOrInterfaceDeclaration => visit_class_or_interface_declaration,
    MethodDeclaration => visit_method_declaration,
    Parameter => visit_parameter,
    BlockStmt => visit_block_stmt,
    ExpressionStmt => visit_expression_stmt,
    ReturnStmt => visit_return_stmt,
    NameExpr => visit_name_expr,
    BinaryExpr => visit_binary_expr,
    UnaryExpr => visit_unary_expr,
    EnclosedExpr => visit_enclosed_expr,
    MethodCallExpr => visit_method_call_expr,
    LocationSetConstructorExpr => visit_location_set_constructor_expr,
    BooleanLiteralExpr => visit_boolean_literal_expr,
    IntegerLiteralExpr => visit_integer_literal_expr,
    StringLiteralExpr => visit_string_literal_expr,
}

/// Visit every child of `node` in property order.
pub fn walk_children<A, V>(visitor: &mut V, ast: &Ast, node: NodeId, arg: A)
where
    A: Clone,
    V: VoidVisitor<A> + ?Sized,
{
    for child in ast.children(node) {
        ast.accept_void(child, visitor, arg.clone());
    }
}
