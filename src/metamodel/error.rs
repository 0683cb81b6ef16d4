//! Error types for metamodel construction.

use thiserror::Error;

use super::node_type::{NodeType, Property};

/// Errors raised while building the [`MetaModelRegistry`](super::MetaModelRegistry).
///
/// Any of these means the registration table itself is malformed; the
/// registry is never published in a partially built state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaModelError {
    /// The same node type was registered twice.
    #[error("node type {0} is registered more than once")]
    DuplicateType(NodeType),

    /// A property name appears twice along a supertype chain.
    #[error("property '{property}' of {node_type} is already declared by {declared_by}")]
    DuplicateProperty {
        node_type: NodeType,
        property: Property,
        declared_by: NodeType,
    },

    /// A subtype names a supertype that has no registration.
    #[error("supertype {supertype} of {node_type} is not registered")]
    MissingSupertype {
        node_type: NodeType,
        supertype: NodeType,
    },

    /// A type lists itself as its own supertype.
    #[error("node type {0} names itself as supertype")]
    SelfSupertype(NodeType),

    /// The supertype links form a cycle.
    #[error("inheritance cycle through {0}")]
    InheritanceCycle(NodeType),

    /// A property type nests wrappers deeper than optional-of-list.
    #[error("unsupported declared type for property '{property}' of {node_type}")]
    UnsupportedType {
        node_type: NodeType,
        property: Property,
    },

    /// A node type known to the crate has no registration.
    #[error("node type {0} has no metamodel registration")]
    Unregistered(NodeType),
}
