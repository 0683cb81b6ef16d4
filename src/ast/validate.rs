//! Whole-tree consistency checks.
//!
//! Mutations keep parent links and property types correct on their own, but
//! leave `non_empty` lists free to become empty mid-edit. `validate` reports
//! those, plus any parent link that disagrees with the slots.

use std::fmt;

use super::Ast;
use super::traversal::TreeTraversal;
use crate::base::NodeId;
use crate::metamodel::Property;

/// A single finding of [`Ast::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub node: NodeId,
    pub property: Option<Property>,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property {
            Some(property) => write!(f, "{}.{}: {}", self.node, property, self.message),
            None => write!(f, "{}: {}", self.node, self.message),
        }
    }
}

impl Ast {
    /// Problems in the subtree at `root`, in pre-order; empty when valid.
    pub fn validate(&self, root: NodeId) -> Vec<Problem> {
        let mut problems = Vec::new();
        for id in self.walk(root, TreeTraversal::PreOrder) {
            let node_type = self.node_type(id);
            for (meta, value) in self.properties(id) {
                if meta.is_non_empty() && value.as_list().is_some_and(|list| list.is_empty()) {
                    problems.push(Problem {
                        node: id,
                        property: Some(meta.property()),
                        message: format!("{node_type}.{} must not be empty", meta.name()),
                    });
                }
                for child in value.child_ids() {
                    if self.parent(child) != Some(id) {
                        problems.push(Problem {
                            node: child,
                            property: Some(meta.property()),
                            message: format!("parent link does not point back to {id}"),
                        });
                    }
                }
            }
        }
        problems
    }

    pub fn is_valid(&self, root: NodeId) -> bool {
        self.validate(root).is_empty()
    }
}
