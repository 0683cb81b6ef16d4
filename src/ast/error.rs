//! Error types for tree construction and mutation.

use thiserror::Error;

use crate::base::NodeId;
use crate::metamodel::{NodeType, Property};

/// A listener refused or failed to handle a change notification.
///
/// The change it was told about has not been applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observer failed: {message}")]
pub struct ObserverError {
    pub message: String,
}

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by [`Ast`](super::Ast) operations.
///
/// Every failing operation leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// A mandatory property was set to (or left) absent.
    #[error("property '{property}' of {node_type} is mandatory")]
    MandatoryProperty {
        node_type: NodeType,
        property: Property,
    },

    /// The node type has no such property.
    #[error("{node_type} has no property '{property}'")]
    UnknownProperty {
        node_type: NodeType,
        property: Property,
    },

    /// Derived properties are computed and cannot be assigned.
    #[error("property '{property}' of {node_type} is derived and read-only")]
    DerivedProperty {
        node_type: NodeType,
        property: Property,
    },

    /// The value does not fit the property's declared type.
    #[error("property '{property}' of {node_type} expects {expected}, got {found}")]
    TypeMismatch {
        node_type: NodeType,
        property: Property,
        expected: &'static str,
        found: String,
    },

    /// A list operation was used on a single-valued property.
    #[error("property '{property}' of {node_type} is not a list")]
    NotAList {
        node_type: NodeType,
        property: Property,
    },

    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Abstract node types cannot be instantiated.
    #[error("cannot instantiate abstract node type {0}")]
    AbstractType(NodeType),

    /// The child already belongs to another property.
    #[error("node {child} is already attached to {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    /// Attaching the child would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCreateCycle { child: NodeId, parent: NodeId },

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    /// A listener failed during pre-commit notification.
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

impl AstError {
    pub(crate) fn mandatory(node_type: NodeType, property: Property) -> Self {
        Self::MandatoryProperty {
            node_type,
            property,
        }
    }

    pub(crate) fn unknown_property(node_type: NodeType, property: Property) -> Self {
        Self::UnknownProperty {
            node_type,
            property,
        }
    }

    pub(crate) fn type_mismatch(
        node_type: NodeType,
        property: Property,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            node_type,
            property,
            expected,
            found: found.into(),
        }
    }
}
