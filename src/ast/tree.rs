use tracing::trace;

use super::error::AstError;
use super::observer::ObserverList;
use super::value::{NodeList, Value};
use crate::base::{NodeId, Span};
use crate::metamodel::{ClassMetaModel, NodeType, Property, PropertyMetaModel, registry};

/// Storage for one node.
#[derive(Debug, Clone)]
pub(super) struct NodeData {
    pub(super) node_type: NodeType,
    pub(super) parent: Option<NodeId>,
    pub(super) range: Option<Span>,
    /// One value per stored property, in the type's slot order.
    pub(super) slots: Vec<Value>,
}

/// An arena of nodes forming one or more trees.
///
/// Children are owned by the slots of their parent; the parent link stored
/// on each node is a plain [`NodeId`] back-reference kept in step by every
/// mutation. Detached subtrees stay in the arena as independent roots until
/// the `Ast` is dropped.
///
/// A single `Ast` is mutated through `&mut self`, so concurrent mutation of
/// one tree is ruled out at compile time. Independent trees may live on
/// different threads; they share only the read-only metamodel registry.
#[derive(Debug)]
pub struct Ast {
    pub(super) nodes: Vec<NodeData>,
    pub(super) observers: ObserverList,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    /// Creates an empty tree.
    ///
    /// Forces construction of the metamodel registry, so that no node can
    /// exist before every descriptor does.
    pub fn new() -> Self {
        let _ = registry();
        Self {
            nodes: Vec::new(),
            observers: ObserverList::default(),
        }
    }

    /// Number of nodes ever allocated in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Allocate a node of `node_type` with the given property values.
    ///
    /// Omitted list properties start empty and omitted optional properties
    /// start absent; omitting a mandatory property is an error. Every child
    /// must be detached. No observer is notified: a node under construction
    /// has no state to change.
    pub fn create(
        &mut self,
        node_type: NodeType,
        properties: Vec<(Property, Value)>,
    ) -> Result<NodeId, AstError> {
        let class = registry().class(node_type);
        if class.is_abstract() {
            return Err(AstError::AbstractType(node_type));
        }

        let mut slots: Vec<Option<Value>> = vec![None; class.slot_count()];
        for (property, value) in properties {
            let meta = self.stored_property(class, property)?;
            let slot = class
                .slot(property)
                .ok_or_else(|| AstError::unknown_property(node_type, property))?;
            self.check_value(node_type, meta, &value)?;
            slots[slot] = Some(value);
        }

        let mut values = Vec::with_capacity(slots.len());
        for (meta, slot) in class.stored_property_meta_models().zip(slots) {
            let value = match slot {
                Some(value) => value,
                None if meta.is_list() => Value::List(NodeList::new()),
                None if meta.is_optional() => Value::Absent,
                None => return Err(AstError::mandatory(node_type, meta.property())),
            };
            values.push(value);
        }

        let id = NodeId::new(self.nodes.len());
        let children: Vec<NodeId> = values.iter().flat_map(Value::child_ids).collect();
        for (i, child) in children.iter().enumerate() {
            self.check_attachable(*child, id, &[])?;
            if children[..i].contains(child) {
                return Err(AstError::AlreadyAttached {
                    child: *child,
                    parent: id,
                });
            }
        }

        self.nodes.push(NodeData {
            node_type,
            parent: None,
            range: None,
            slots: values,
        });
        for child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        trace!(%id, %node_type, "node created");
        Ok(id)
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn node_type(&self, id: NodeId) -> NodeType {
        self.nodes[id.index()].node_type
    }

    /// The owning node, `None` for roots and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn range(&self, id: NodeId) -> Option<Span> {
        self.nodes[id.index()].range
    }

    /// Attach an opaque source range; it is carried along on clone.
    pub fn set_range(&mut self, id: NodeId, range: Option<Span>) {
        self.nodes[id.index()].range = range;
    }

    /// The singleton descriptor of this node's type.
    pub fn meta_model(&self, id: NodeId) -> &'static ClassMetaModel {
        registry().class(self.node_type(id))
    }

    /// Value of a stored property.
    pub fn get(&self, id: NodeId, property: Property) -> Result<&Value, AstError> {
        let node = &self.nodes[id.index()];
        let class = registry().class(node.node_type);
        self.stored_property(class, property)?;
        let slot = class
            .slot(property)
            .ok_or_else(|| AstError::unknown_property(node.node_type, property))?;
        Ok(&node.slots[slot])
    }

    /// Stored property values in slot order, paired with their descriptors.
    pub fn properties(
        &self,
        id: NodeId,
    ) -> impl Iterator<Item = (&'static PropertyMetaModel, &Value)> + '_ {
        let node = &self.nodes[id.index()];
        registry()
            .class(node.node_type)
            .stored_property_meta_models()
            .zip(node.slots.iter())
    }

    /// Direct children in property order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.index()]
            .slots
            .iter()
            .flat_map(Value::child_ids)
            .collect()
    }

    /// True if `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Descriptor of a stored (assignable) property.
    pub(super) fn stored_property(
        &self,
        class: &'static ClassMetaModel,
        property: Property,
    ) -> Result<&'static PropertyMetaModel, AstError> {
        let meta = class
            .property(property)
            .ok_or_else(|| AstError::unknown_property(class.node_type(), property))?;
        if meta.is_derived() {
            return Err(AstError::DerivedProperty {
                node_type: class.node_type(),
                property,
            });
        }
        Ok(meta)
    }

    /// Shape and type check of a value against a property descriptor.
    pub(super) fn check_value(
        &self,
        node_type: NodeType,
        meta: &PropertyMetaModel,
        value: &Value,
    ) -> Result<(), AstError> {
        let property = meta.property();
        match (value, meta.node_type()) {
            (Value::Absent, _) if meta.is_list() || !meta.is_optional() => {
                Err(AstError::mandatory(node_type, property))
            }
            (Value::Absent, _) => Ok(()),
            (Value::Node(child), Some(expected)) if !meta.is_list() => {
                self.check_child_type(node_type, property, expected, *child)
            }
            (Value::List(list), Some(expected)) if meta.is_list() => {
                for child in list {
                    self.check_child_type(node_type, property, expected, child)?;
                }
                Ok(())
            }
            (Value::Str(text), None) if property == Property::Identifier => {
                if is_identifier(text) {
                    Ok(())
                } else {
                    Err(AstError::InvalidIdentifier(text.to_string()))
                }
            }
            (value, None) if value.fits_primitive(meta) => Ok(()),
            (value, _) => Err(AstError::type_mismatch(
                node_type,
                property,
                expected_name(meta),
                value.kind_name(),
            )),
        }
    }

    pub(super) fn check_child_type(
        &self,
        node_type: NodeType,
        property: Property,
        expected: NodeType,
        child: NodeId,
    ) -> Result<(), AstError> {
        if !self.contains(child) {
            return Err(AstError::type_mismatch(
                node_type,
                property,
                expected.name(),
                format!("foreign node {child}"),
            ));
        }
        let found = self.node_type(child);
        if registry().is_subtype(found, expected) {
            Ok(())
        } else {
            Err(AstError::type_mismatch(
                node_type,
                property,
                expected.name(),
                found.name(),
            ))
        }
    }

    /// A child may be attached under `parent` if it is detached (or one of
    /// `released`, the children the same operation is about to detach) and
    /// is not `parent` or one of its ancestors.
    pub(super) fn check_attachable(
        &self,
        child: NodeId,
        parent: NodeId,
        released: &[NodeId],
    ) -> Result<(), AstError> {
        if let Some(current) = self.parent(child) {
            if !released.contains(&child) {
                return Err(AstError::AlreadyAttached {
                    child,
                    parent: current,
                });
            }
        }
        if self.contains(parent) && self.is_ancestor_or_self(child, parent) {
            return Err(AstError::WouldCreateCycle { child, parent });
        }
        Ok(())
    }
}

fn expected_name(meta: &PropertyMetaModel) -> &'static str {
    if meta.is_list() { "list" } else { meta.type_name() }
}

/// Identifier check on Unicode XID classes, allowing `_` and `$` anywhere.
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || first == '$' || unicode_ident::is_xid_start(first) => {}
        _ => return false,
    }
    chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}
