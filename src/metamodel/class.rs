//! Per-type descriptors.

use indexmap::IndexMap;

use super::node_type::{NodeType, Property};
use super::property::PropertyMetaModel;
use super::registry::registry;

/// Immutable descriptor of a node type's property schema and supertype link.
///
/// Built by the [`MetaModelRegistry`](super::MetaModelRegistry) only after
/// the supertype's descriptor exists, so `all` always starts with the full
/// inherited property list.
#[derive(Debug, Clone)]
pub struct ClassMetaModel {
    node_type: NodeType,
    supertype: Option<NodeType>,
    is_abstract: bool,
    /// Root-to-self chain, e.g. `[Node, Expression, BinaryExpr]`.
    ancestry: Vec<NodeType>,
    declared: Vec<PropertyMetaModel>,
    derived: Vec<PropertyMetaModel>,
    all: Vec<PropertyMetaModel>,
    /// Stored (non-derived) properties in `all` order, mapped to their slot.
    slots: IndexMap<Property, usize>,
}

impl ClassMetaModel {
    pub(super) fn new(
        node_type: NodeType,
        supertype: Option<&ClassMetaModel>,
        is_abstract: bool,
        declared: Vec<PropertyMetaModel>,
        derived: Vec<PropertyMetaModel>,
    ) -> Self {
        let mut ancestry = supertype
            .map(|parent| parent.ancestry.clone())
            .unwrap_or_default();
        ancestry.push(node_type);

        let mut all: Vec<PropertyMetaModel> = supertype
            .map(|parent| parent.all.clone())
            .unwrap_or_default();
        all.extend(declared.iter().cloned());
        all.extend(derived.iter().cloned());

        let slots = all
            .iter()
            .filter(|property| !property.is_derived())
            .enumerate()
            .map(|(slot, property)| (property.property(), slot))
            .collect();

        Self {
            node_type,
            supertype: supertype.map(ClassMetaModel::node_type),
            is_abstract,
            ancestry,
            declared,
            derived,
            all,
            slots,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn type_name(&self) -> &'static str {
        self.node_type.name()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Identity of the supertype, `None` for the root `Node` type.
    pub fn supertype(&self) -> Option<NodeType> {
        self.supertype
    }

    /// The supertype's descriptor.
    pub fn supertype_meta_model(&self) -> Option<&'static ClassMetaModel> {
        self.supertype.map(|supertype| registry().class(supertype))
    }

    /// Root-to-self chain of node types.
    pub fn ancestry(&self) -> &[NodeType] {
        &self.ancestry
    }

    /// True if this type is `other` or inherits from it.
    pub fn is_subtype_of(&self, other: NodeType) -> bool {
        self.ancestry.contains(&other)
    }

    /// Properties backed by fields declared on this exact type.
    pub fn declared_property_meta_models(&self) -> &[PropertyMetaModel] {
        &self.declared
    }

    /// Properties backed by computed getters declared on this exact type.
    pub fn derived_property_meta_models(&self) -> &[PropertyMetaModel] {
        &self.derived
    }

    /// Inherited properties (root first) followed by declared, then derived.
    pub fn all_property_meta_models(&self) -> &[PropertyMetaModel] {
        &self.all
    }

    pub fn property(&self, property: Property) -> Option<&PropertyMetaModel> {
        self.all.iter().find(|meta| meta.property() == property)
    }

    pub fn property_by_name(&self, name: &str) -> Option<&PropertyMetaModel> {
        self.all.iter().find(|meta| meta.name() == name)
    }

    /// Slot index of a stored property.
    pub fn slot(&self, property: Property) -> Option<usize> {
        self.slots.get(&property).copied()
    }

    /// Stored properties in slot order.
    pub fn stored_property_meta_models(&self) -> impl Iterator<Item = &PropertyMetaModel> + '_ {
        self.all.iter().filter(|property| !property.is_derived())
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl PartialEq for ClassMetaModel {
    fn eq(&self, other: &Self) -> bool {
        self.node_type == other.node_type
    }
}

impl Eq for ClassMetaModel {}
