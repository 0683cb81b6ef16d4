//! [`NodeList`] mutation through the owning node.

use tracing::trace;

use super::Ast;
use super::error::AstError;
use super::observer::{AstEvent, ListChangeType};
use super::value::NodeList;
use crate::base::NodeId;
use crate::metamodel::{Property, PropertyMetaModel, registry};

impl Ast {
    /// The list held by a list-valued property.
    pub fn list(&self, id: NodeId, property: Property) -> Result<&NodeList, AstError> {
        self.get(id, property)?
            .as_list()
            .ok_or(AstError::NotAList {
                node_type: self.node_type(id),
                property,
            })
    }

    pub fn list_push(&mut self, id: NodeId, property: Property, child: NodeId) -> Result<(), AstError> {
        let len = self.list(id, property)?.len();
        self.list_insert(id, property, len, child)
    }

    /// Insert `child` at `index`, shifting later elements.
    pub fn list_insert(
        &mut self,
        id: NodeId,
        property: Property,
        index: usize,
        child: NodeId,
    ) -> Result<(), AstError> {
        let (meta, slot) = self.list_slot(id, property)?;
        let len = self.list(id, property)?.len();
        if index > len {
            return Err(AstError::IndexOutOfBounds { index, len });
        }
        self.check_element(id, meta, child)?;
        self.check_attachable(child, id, &[])?;

        self.publish(&[
            AstEvent::ListChange {
                node: id,
                property,
                change: ListChangeType::Addition,
                index,
                child,
            },
            AstEvent::ParentChange {
                node: child,
                old_parent: None,
                new_parent: Some(id),
            },
        ])?;

        if let Some(list) = self.nodes[id.index()].slots[slot].as_list_mut() {
            list.insert(index, child);
        }
        self.nodes[child.index()].parent = Some(id);
        trace!(%id, %property, index, %child, "list element added");
        self.prune_observers();
        Ok(())
    }

    /// Replace the element at `index`, returning the detached old element.
    pub fn list_set(
        &mut self,
        id: NodeId,
        property: Property,
        index: usize,
        child: NodeId,
    ) -> Result<NodeId, AstError> {
        let (meta, slot) = self.list_slot(id, property)?;
        let list = self.list(id, property)?;
        let old = list.get(index).ok_or(AstError::IndexOutOfBounds {
            index,
            len: list.len(),
        })?;
        if old == child {
            return Ok(old);
        }
        self.check_element(id, meta, child)?;
        self.check_attachable(child, id, &[])?;

        self.publish(&[
            AstEvent::ListReplacement {
                node: id,
                property,
                index,
                old,
                new: child,
            },
            AstEvent::ParentChange {
                node: old,
                old_parent: Some(id),
                new_parent: None,
            },
            AstEvent::ParentChange {
                node: child,
                old_parent: None,
                new_parent: Some(id),
            },
        ])?;

        if let Some(list) = self.nodes[id.index()].slots[slot].as_list_mut() {
            list.replace(index, child);
        }
        self.nodes[old.index()].parent = None;
        self.nodes[child.index()].parent = Some(id);
        trace!(%id, %property, index, %old, %child, "list element replaced");
        self.prune_observers();
        Ok(old)
    }

    /// Remove the element at `index`, returning it detached.
    pub fn list_remove(
        &mut self,
        id: NodeId,
        property: Property,
        index: usize,
    ) -> Result<NodeId, AstError> {
        let (_, slot) = self.list_slot(id, property)?;
        let list = self.list(id, property)?;
        let child = list.get(index).ok_or(AstError::IndexOutOfBounds {
            index,
            len: list.len(),
        })?;

        self.publish(&[
            AstEvent::ListChange {
                node: id,
                property,
                change: ListChangeType::Removal,
                index,
                child,
            },
            AstEvent::ParentChange {
                node: child,
                old_parent: Some(id),
                new_parent: None,
            },
        ])?;

        if let Some(list) = self.nodes[id.index()].slots[slot].as_list_mut() {
            list.remove(index);
        }
        self.nodes[child.index()].parent = None;
        trace!(%id, %property, index, %child, "list element removed");
        self.prune_observers();
        Ok(child)
    }

    /// Remove `child` from the list if present.
    pub fn list_remove_node(
        &mut self,
        id: NodeId,
        property: Property,
        child: NodeId,
    ) -> Result<bool, AstError> {
        match self.list(id, property)?.position(child) {
            Some(index) => self.list_remove(id, property, index).map(|_| true),
            None => Ok(false),
        }
    }

    fn list_slot(
        &self,
        id: NodeId,
        property: Property,
    ) -> Result<(&'static PropertyMetaModel, usize), AstError> {
        let node_type = self.node_type(id);
        let class = registry().class(node_type);
        let meta = self.stored_property(class, property)?;
        if !meta.is_list() {
            return Err(AstError::NotAList {
                node_type,
                property,
            });
        }
        let slot = class
            .slot(property)
            .ok_or_else(|| AstError::unknown_property(node_type, property))?;
        Ok((meta, slot))
    }

    fn check_element(
        &self,
        id: NodeId,
        meta: &PropertyMetaModel,
        child: NodeId,
    ) -> Result<(), AstError> {
        let node_type = self.node_type(id);
        match meta.node_type() {
            Some(expected) => self.check_child_type(node_type, meta.property(), expected, child),
            None => Err(AstError::type_mismatch(
                node_type,
                meta.property(),
                meta.type_name(),
                "node",
            )),
        }
    }
}
