//! Property descriptors and the type analysis that produces them.

use super::class::ClassMetaModel;
use super::declarations::PropertyDecl;
use super::error::MetaModelError;
use super::node_type::{NodeType, PrimitiveType, Property};
use super::registry::{MetaModelRegistry, registry};

/// Declared type of a field or derived getter, as written by the declaring type.
///
/// `Optional` and `List` are wrappers; `Node` and `Primitive` are the
/// innermost value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Node(NodeType),
    Primitive(PrimitiveType),
    Optional(&'static TypeRef),
    List(&'static TypeRef),
}

/// The innermost value type of a property after wrappers are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Node(NodeType),
    Primitive(PrimitiveType),
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Node(node_type) => node_type.name(),
            Self::Primitive(primitive) => primitive.name(),
        }
    }
}

/// Immutable descriptor of one property of one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetaModel {
    declaring_type: NodeType,
    property: Property,
    value_type: ValueType,
    optional: bool,
    non_empty: bool,
    is_list: bool,
    is_self_type: bool,
    derived: bool,
}

impl PropertyMetaModel {
    /// Classify a declared field or getter.
    ///
    /// Strips at most one `Optional` layer and then at most one `List`
    /// layer; whatever remains must be a node or primitive type.
    pub fn analyze(declaring_type: NodeType, decl: &PropertyDecl) -> Result<Self, MetaModelError> {
        let mut ty = &decl.ty;
        let mut optional = decl.optional;
        let mut is_list = false;

        if let TypeRef::Optional(inner) = *ty {
            optional = true;
            ty = inner;
        }
        if let TypeRef::List(inner) = *ty {
            is_list = true;
            ty = inner;
        }

        let value_type = match *ty {
            TypeRef::Node(node_type) => ValueType::Node(node_type),
            TypeRef::Primitive(primitive) => ValueType::Primitive(primitive),
            TypeRef::Optional(_) | TypeRef::List(_) => {
                return Err(MetaModelError::UnsupportedType {
                    node_type: declaring_type,
                    property: decl.property,
                });
            }
        };

        Ok(Self {
            declaring_type,
            property: decl.property,
            value_type,
            optional,
            non_empty: decl.non_empty,
            is_list,
            is_self_type: value_type == ValueType::Node(declaring_type),
            derived: decl.derived,
        })
    }

    /// The node type that declares this property.
    pub fn declaring_type(&self) -> NodeType {
        self.declaring_type
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn name(&self) -> &'static str {
        self.property.name()
    }

    /// Name of the innermost value type (`"Name"`, `"bool"`, ...).
    pub fn type_name(&self) -> &'static str {
        self.value_type.name()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The nested node type, if the value type is a node type.
    pub fn node_type(&self) -> Option<NodeType> {
        match self.value_type {
            ValueType::Node(node_type) => Some(node_type),
            ValueType::Primitive(_) => None,
        }
    }

    /// The nested type's descriptor, resolved through the global registry.
    pub fn node_meta_model(&self) -> Option<&'static ClassMetaModel> {
        self.node_type().map(|node_type| registry().class(node_type))
    }

    /// The nested type's descriptor, resolved through `registry`.
    pub fn node_meta_model_in<'r>(
        &self,
        registry: &'r MetaModelRegistry,
    ) -> Option<&'r ClassMetaModel> {
        self.node_type()
            .and_then(|node_type| registry.try_class(node_type))
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_non_empty(&self) -> bool {
        self.non_empty
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    pub fn is_self_type(&self) -> bool {
        self.is_self_type
    }

    /// True for properties backed by a computed getter instead of a slot.
    pub fn is_derived(&self) -> bool {
        self.derived
    }

    /// Single node (optional or not).
    pub fn is_node(&self) -> bool {
        !self.is_list && self.node_type().is_some()
    }

    pub fn is_node_list(&self) -> bool {
        self.is_list && self.node_type().is_some()
    }

    /// Mandatory single-valued property: can be replaced but never removed.
    pub fn is_required(&self) -> bool {
        !self.optional && !self.is_list
    }
}
