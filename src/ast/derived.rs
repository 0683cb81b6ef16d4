//! Computed getters backing derived properties.

use smol_str::SmolStr;

use super::Ast;
use super::error::AstError;
use super::value::Value;
use crate::base::NodeId;
use crate::metamodel::Property;

impl Ast {
    /// Value of a derived property, computed from the current tree.
    pub fn derived(&self, id: NodeId, property: Property) -> Result<Value, AstError> {
        let node_type = self.node_type(id);
        let meta = self
            .meta_model(id)
            .property(property)
            .filter(|meta| meta.is_derived())
            .ok_or_else(|| AstError::unknown_property(node_type, property))?;

        match meta.property() {
            Property::Qualified => Ok(Value::Str(self.qualified_name(id))),
            // first declared type; the tree has no file name to match against
            Property::PrimaryType => Ok(self
                .list(id, Property::Types)?
                .first()
                .into()),
            other => Err(AstError::unknown_property(node_type, other)),
        }
    }

    /// Any property: stored ones by value, derived ones computed.
    pub fn property_value(&self, id: NodeId, property: Property) -> Result<Value, AstError> {
        match self.get(id, property) {
            Ok(value) => Ok(value.clone()),
            Err(AstError::DerivedProperty { .. }) => self.derived(id, property),
            Err(err) => Err(err),
        }
    }

    /// Dotted rendering of a `Name` chain, e.g. `java.util.List`.
    pub(crate) fn qualified_name(&self, id: NodeId) -> SmolStr {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(name) = current {
            if let Ok(Value::Str(identifier)) = self.get(name, Property::Identifier) {
                segments.push(identifier.clone());
            }
            current = self
                .get(name, Property::Qualifier)
                .ok()
                .and_then(Value::as_node);
        }
        segments.reverse();
        SmolStr::new(segments.join("."))
    }
}
