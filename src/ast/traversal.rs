//! Walking trees in a chosen order.

use std::collections::VecDeque;

use super::Ast;
use super::nodes::AstNode;
use crate::base::NodeId;
use crate::metamodel::{NodeType, registry};

/// Order in which [`Ast::walk`] yields nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeTraversal {
    /// Node before its children, children in property order.
    PreOrder,
    /// Children before their node.
    PostOrder,
    /// Level by level.
    BreadthFirst,
    /// Only the direct children, excluding the root.
    DirectChildren,
    /// The parent chain upwards, excluding the start node.
    Parents,
}

impl Ast {
    /// Nodes reachable from `root` in `traversal` order.
    pub fn walk(&self, root: NodeId, traversal: TreeTraversal) -> Vec<NodeId> {
        match traversal {
            TreeTraversal::PreOrder => {
                let mut out = Vec::new();
                let mut stack = vec![root];
                while let Some(id) = stack.pop() {
                    out.push(id);
                    stack.extend(self.children(id).into_iter().rev());
                }
                out
            }
            TreeTraversal::PostOrder => {
                let mut out = Vec::new();
                self.post_order(root, &mut out);
                out
            }
            TreeTraversal::BreadthFirst => {
                let mut out = Vec::new();
                let mut queue = VecDeque::from([root]);
                while let Some(id) = queue.pop_front() {
                    out.push(id);
                    queue.extend(self.children(id));
                }
                out
            }
            TreeTraversal::DirectChildren => self.children(root),
            TreeTraversal::Parents => self.ancestors(root).collect(),
        }
    }

    fn post_order(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            self.post_order(child, out);
        }
        out.push(id);
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |current| self.parent(*current))
    }

    /// Nearest ancestor whose type is `node_type` or one of its subtypes.
    pub fn find_ancestor(&self, id: NodeId, node_type: NodeType) -> Option<NodeId> {
        let registry = registry();
        self.ancestors(id)
            .find(|ancestor| registry.is_subtype(self.node_type(*ancestor), node_type))
    }

    /// Topmost ancestor of `id`, or `id` itself when detached.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Every node of type `N` in the subtree at `root`, in pre-order.
    pub fn find_all<N: AstNode>(&self, root: NodeId) -> Vec<N> {
        self.walk(root, TreeTraversal::PreOrder)
            .into_iter()
            .filter_map(|id| N::cast(self, id))
            .collect()
    }

    pub fn find_first<N: AstNode>(&self, root: NodeId) -> Option<N> {
        self.walk(root, TreeTraversal::PreOrder)
            .into_iter()
            .find_map(|id| N::cast(self, id))
    }
}
