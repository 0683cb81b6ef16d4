//! Deep copies of subtrees, within one arena or across arenas.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::Ast;
use super::error::AstError;
use super::operators::{BinaryOperator, UnaryOperator};
use super::value::Value;
use super::visitor::GenericVisitor;
use crate::base::{NodeId, Span};
use crate::metamodel::{NodeType, Property};

/// An owned, arena-free copy of a subtree.
///
/// Holds the stored (non-derived) properties of every node in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub node_type: NodeType,
    pub range: Option<Span>,
    pub properties: Vec<(Property, SnapshotValue)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SnapshotValue {
    Absent,
    Node(Box<Snapshot>),
    List(Vec<Snapshot>),
    Bool(bool),
    Str(SmolStr),
    BinaryOperator(BinaryOperator),
    UnaryOperator(UnaryOperator),
}

impl Snapshot {
    /// Number of nodes in the copied subtree.
    pub fn node_count(&self) -> usize {
        1 + self
            .properties
            .iter()
            .map(|(_, value)| match value {
                SnapshotValue::Node(child) => child.node_count(),
                SnapshotValue::List(children) => children.iter().map(Snapshot::node_count).sum(),
                _ => 0,
            })
            .sum::<usize>()
    }
}

/// Copies every stored property of every node it visits.
#[derive(Debug, Default)]
pub struct CloneVisitor;

impl GenericVisitor<Snapshot, ()> for CloneVisitor {
    fn visit_default(&mut self, ast: &Ast, node: NodeId, _arg: ()) -> Snapshot {
        let properties = ast
            .properties(node)
            .map(|(meta, value)| {
                let value = match value {
                    Value::Absent => SnapshotValue::Absent,
                    Value::Node(child) => SnapshotValue::Node(Box::new(ast.accept(*child, self, ()))),
                    Value::List(list) => {
                        SnapshotValue::List(list.iter().map(|child| ast.accept(child, self, ())).collect())
                    }
                    Value::Bool(value) => SnapshotValue::Bool(*value),
                    Value::Str(value) => SnapshotValue::Str(value.clone()),
                    Value::BinaryOperator(op) => SnapshotValue::BinaryOperator(*op),
                    Value::UnaryOperator(op) => SnapshotValue::UnaryOperator(*op),
                };
                (meta.property(), value)
            })
            .collect();
        Snapshot {
            node_type: ast.node_type(node),
            range: ast.range(node),
            properties,
        }
    }
}

impl Ast {
    pub fn snapshot(&self, id: NodeId) -> Snapshot {
        self.accept(id, &mut CloneVisitor, ())
    }

    /// Allocate the nodes of `snapshot` in this arena and return its root.
    ///
    /// The new root is detached. Children are created before their parent,
    /// so a snapshot rejected part-way leaves only detached nodes behind.
    pub fn insert_snapshot(&mut self, snapshot: &Snapshot) -> Result<NodeId, AstError> {
        let mut properties = Vec::with_capacity(snapshot.properties.len());
        for (property, value) in &snapshot.properties {
            let value = match value {
                SnapshotValue::Absent => continue,
                SnapshotValue::Node(child) => Value::Node(self.insert_snapshot(child)?),
                SnapshotValue::List(children) => Value::List(
                    children
                        .iter()
                        .map(|child| self.insert_snapshot(child))
                        .collect::<Result<_, _>>()?,
                ),
                SnapshotValue::Bool(value) => Value::Bool(*value),
                SnapshotValue::Str(value) => Value::Str(value.clone()),
                SnapshotValue::BinaryOperator(op) => Value::BinaryOperator(*op),
                SnapshotValue::UnaryOperator(op) => Value::UnaryOperator(*op),
            };
            properties.push((*property, value));
        }
        let id = self.create(snapshot.node_type, properties)?;
        self.set_range(id, snapshot.range);
        Ok(id)
    }

    /// Deep copy of the subtree at `id` into this arena, detached.
    pub fn clone_node(&mut self, id: NodeId) -> Result<NodeId, AstError> {
        let snapshot = self.snapshot(id);
        self.insert_snapshot(&snapshot)
    }

    /// Deep copy of the subtree at `id` into `target`, detached.
    pub fn clone_into(&self, id: NodeId, target: &mut Ast) -> Result<NodeId, AstError> {
        target.insert_snapshot(&self.snapshot(id))
    }
}
