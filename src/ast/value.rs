//! Property values stored in node slots.

use smol_str::SmolStr;

use super::operators::{BinaryOperator, UnaryOperator};
use crate::base::NodeId;
use crate::metamodel::{PrimitiveType, PropertyMetaModel, ValueType};

/// Ordered, owned sequence of child nodes.
///
/// A `NodeList` lives in exactly one list-valued property slot; every element
/// has that slot's node as parent. Mutation goes through the owning
/// [`Ast`](super::Ast) (`list_push`, `list_set`, ...), which keeps the parent
/// links in step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    items: Vec<NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.items.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.items.contains(&id)
    }

    /// Index of `id` in the list.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.items.iter().position(|item| *item == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.items
    }

    pub(crate) fn insert(&mut self, index: usize, id: NodeId) {
        self.items.insert(index, id);
    }

    pub(crate) fn replace(&mut self, index: usize, id: NodeId) -> NodeId {
        std::mem::replace(&mut self.items[index], id)
    }

    pub(crate) fn remove(&mut self, index: usize) -> NodeId {
        self.items.remove(index)
    }
}

impl FromIterator<NodeId> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<NodeId>> for NodeList {
    fn from(items: Vec<NodeId>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

/// Value held by one property slot.
///
/// Node-valued variants compare by identity (same [`NodeId`]); primitives
/// compare by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An optional property with no value.
    Absent,
    Node(NodeId),
    List(NodeList),
    Bool(bool),
    Str(SmolStr),
    BinaryOperator(BinaryOperator),
    UnaryOperator(UnaryOperator),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub(crate) fn as_list_mut(&mut self) -> Option<&mut NodeList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::BinaryOperator(op) => Some(*op),
            _ => None,
        }
    }

    pub fn as_unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            Self::UnaryOperator(op) => Some(*op),
            _ => None,
        }
    }

    /// Child nodes referenced by this value, in order.
    pub fn child_ids(&self) -> Vec<NodeId> {
        match self {
            Self::Node(id) => vec![*id],
            Self::List(list) => list.as_slice().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Short description used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Node(_) => "node",
            Self::List(_) => "list",
            Self::Bool(_) => "bool",
            Self::Str(_) => "String",
            Self::BinaryOperator(_) => "BinaryOperator",
            Self::UnaryOperator(_) => "UnaryOperator",
        }
    }

    /// Whether the value's shape matches a primitive property.
    pub(crate) fn fits_primitive(&self, meta: &PropertyMetaModel) -> bool {
        let ValueType::Primitive(primitive) = meta.value_type() else {
            return false;
        };
        if meta.is_list() {
            return false;
        }
        matches!(
            (primitive, self),
            (PrimitiveType::Bool, Self::Bool(_))
                | (PrimitiveType::String, Self::Str(_))
                | (PrimitiveType::BinaryOperator, Self::BinaryOperator(_))
                | (PrimitiveType::UnaryOperator, Self::UnaryOperator(_))
        )
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<Option<NodeId>> for Value {
    fn from(id: Option<NodeId>) -> Self {
        id.map_or(Self::Absent, Self::Node)
    }
}

impl From<NodeList> for Value {
    fn from(list: NodeList) -> Self {
        Self::List(list)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(SmolStr::new(value))
    }
}

impl From<SmolStr> for Value {
    fn from(value: SmolStr) -> Self {
        Self::Str(value)
    }
}

impl From<BinaryOperator> for Value {
    fn from(op: BinaryOperator) -> Self {
        Self::BinaryOperator(op)
    }
}

impl From<UnaryOperator> for Value {
    fn from(op: UnaryOperator) -> Self {
        Self::UnaryOperator(op)
    }
}
