//! Structural equality.
//!
//! Two subtrees are equal when their node types match and every stored
//! property holds equal primitives or structurally equal children. Source
//! ranges, parents and node ids play no part.

use super::Ast;
use super::value::Value;
use super::visitor::GenericVisitor;
use crate::base::NodeId;

/// Compares the visited node against the `NodeId` argument in `other`.
#[derive(Debug)]
pub struct EqualsVisitor<'a> {
    other: &'a Ast,
}

impl<'a> EqualsVisitor<'a> {
    pub fn new(other: &'a Ast) -> Self {
        Self { other }
    }
}

impl GenericVisitor<bool, NodeId> for EqualsVisitor<'_> {
    fn visit_default(&mut self, ast: &Ast, node: NodeId, other: NodeId) -> bool {
        if ast.node_type(node) != self.other.node_type(other) {
            return false;
        }
        let theirs: Vec<&Value> = self.other.properties(other).map(|(_, value)| value).collect();
        let ours: Vec<&Value> = ast.properties(node).map(|(_, value)| value).collect();
        if ours.len() != theirs.len() {
            return false;
        }
        ours.into_iter().zip(theirs).all(|(a, b)| match (a, b) {
            (Value::Node(a), Value::Node(b)) => ast.accept(*a, self, *b),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| ast.accept(a, self, b))
            }
            (Value::Node(_) | Value::List(_), _) | (_, Value::Node(_) | Value::List(_)) => false,
            (a, b) => a == b,
        })
    }
}

/// Structural equality of `a` in `a_ast` and `b` in `b_ast`.
pub fn structurally_equal(a_ast: &Ast, a: NodeId, b_ast: &Ast, b: NodeId) -> bool {
    a_ast.accept(a, &mut EqualsVisitor::new(b_ast), b)
}

impl Ast {
    /// Structural equality of two subtrees of this arena.
    pub fn equals(&self, a: NodeId, b: NodeId) -> bool {
        a == b || structurally_equal(self, a, self, b)
    }
}
