//! Owning setters and the generic replace/remove contract.
//!
//! Every operation here follows the same order: validate, skip if nothing
//! would change, publish the pending events, then commit. A failure at any
//! step leaves the tree untouched.

use tracing::trace;

use super::Ast;
use super::error::AstError;
use super::observer::AstEvent;
use super::value::Value;
use crate::base::NodeId;
use crate::metamodel::{Property, registry};

impl Ast {
    /// Set a stored property.
    ///
    /// Setting the current value again (same primitive value, same node
    /// identity) is a no-op: no notification, no parent churn. Otherwise
    /// observers see the change before it happens; then the old children
    /// are detached and the new ones attached.
    pub fn set(&mut self, id: NodeId, property: Property, value: Value) -> Result<(), AstError> {
        let node_type = self.node_type(id);
        let class = registry().class(node_type);
        let meta = self.stored_property(class, property)?;
        self.check_value(node_type, meta, &value)?;
        let slot = class
            .slot(property)
            .ok_or_else(|| AstError::unknown_property(node_type, property))?;

        let old = &self.nodes[id.index()].slots[slot];
        if *old == value {
            return Ok(());
        }

        let old_children = old.child_ids();
        let new_children = value.child_ids();
        for (i, child) in new_children.iter().enumerate() {
            if new_children[..i].contains(child) {
                return Err(AstError::AlreadyAttached {
                    child: *child,
                    parent: id,
                });
            }
            self.check_attachable(*child, id, &old_children)?;
        }

        let mut events = vec![AstEvent::PropertyChange {
            node: id,
            property,
            old: old.clone(),
            new: value.clone(),
        }];
        events.extend(
            old_children
                .iter()
                .filter(|child| !new_children.contains(child))
                .map(|child| AstEvent::ParentChange {
                    node: *child,
                    old_parent: Some(id),
                    new_parent: None,
                }),
        );
        events.extend(
            new_children
                .iter()
                .filter(|child| !old_children.contains(child))
                .map(|child| AstEvent::ParentChange {
                    node: *child,
                    old_parent: None,
                    new_parent: Some(id),
                }),
        );
        self.publish(&events)?;

        for child in &old_children {
            self.nodes[child.index()].parent = None;
        }
        for child in &new_children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes[id.index()].slots[slot] = value;
        trace!(%id, %property, "property set");
        self.prune_observers();
        Ok(())
    }

    /// Find the property (and list index) of `node` that holds `target`.
    pub fn locate(&self, node: NodeId, target: NodeId) -> Option<(Property, Option<usize>)> {
        self.properties(node).find_map(|(meta, value)| match value {
            Value::Node(child) if *child == target => Some((meta.property(), None)),
            Value::List(list) => list
                .position(target)
                .map(|index| (meta.property(), Some(index))),
            _ => None,
        })
    }

    /// Replace the child `target` of `node` with `replacement`.
    ///
    /// Only `node`'s own properties are searched. Returns `Ok(false)` with no
    /// mutation when `target` is not a child of `node`; on success `target`
    /// is detached and `replacement` takes its place (and list position).
    pub fn replace(
        &mut self,
        node: NodeId,
        target: NodeId,
        replacement: NodeId,
    ) -> Result<bool, AstError> {
        let Some((property, index)) = self.locate(node, target) else {
            return Ok(false);
        };
        if target == replacement {
            return Ok(true);
        }
        match index {
            Some(index) => self
                .list_set(node, property, index, replacement)
                .map(|_| true),
            None => self
                .set(node, property, Value::Node(replacement))
                .map(|()| true),
        }
    }

    /// Remove the child `target` of `node`.
    ///
    /// Optional single-valued properties become absent and list elements are
    /// removed. Returns `Ok(false)` if `target` is not a child of `node`, or
    /// if it fills a mandatory property (which cannot be emptied).
    pub fn remove(&mut self, node: NodeId, target: NodeId) -> Result<bool, AstError> {
        let Some((property, index)) = self.locate(node, target) else {
            return Ok(false);
        };
        match index {
            Some(index) => self.list_remove(node, property, index).map(|_| true),
            None => {
                let meta = self.meta_model(node).property(property);
                if meta.is_some_and(|meta| meta.is_optional()) {
                    self.set(node, property, Value::Absent).map(|()| true)
                } else {
                    Ok(false)
                }
            }
        }
    }

    /// Remove `id` from its parent. Returns `Ok(false)` for roots.
    pub fn remove_node(&mut self, id: NodeId) -> Result<bool, AstError> {
        match self.parent(id) {
            Some(parent) => self.remove(parent, id),
            None => Ok(false),
        }
    }

    /// Put `replacement` where `id` is in its parent. Returns `Ok(false)` for roots.
    pub fn replace_node(&mut self, id: NodeId, replacement: NodeId) -> Result<bool, AstError> {
        match self.parent(id) {
            Some(parent) => self.replace(parent, id, replacement),
            None => Ok(false),
        }
    }
}
