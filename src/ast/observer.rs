//! Change notification.
//!
//! Listeners are registered per tree: each [`Ast`] owns its own list.
//! The list keeps only [`Weak`] references, so registering never extends a
//! listener's lifetime and a dropped listener is skipped instead of called.
//!
//! Every effective mutation is published *before* it is committed. A
//! listener therefore sees the pre-mutation tree, and a failing listener
//! aborts the mutation.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::Ast;
use super::error::ObserverError;
use super::value::Value;
use crate::base::NodeId;
use crate::metamodel::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListChangeType {
    Addition,
    Removal,
}

/// A pending change to a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstEvent {
    /// A single-valued property (or a whole list) is about to change.
    PropertyChange {
        node: NodeId,
        property: Property,
        old: Value,
        new: Value,
    },
    /// A node is about to be attached, detached or moved.
    ParentChange {
        node: NodeId,
        old_parent: Option<NodeId>,
        new_parent: Option<NodeId>,
    },
    /// An element is about to be inserted into or removed from a list.
    ListChange {
        node: NodeId,
        property: Property,
        change: ListChangeType,
        index: usize,
        child: NodeId,
    },
    /// A list element is about to be swapped for another node.
    ListReplacement {
        node: NodeId,
        property: Property,
        index: usize,
        old: NodeId,
        new: NodeId,
    },
}

impl AstEvent {
    /// The node whose state the event describes.
    pub fn node(&self) -> NodeId {
        match self {
            Self::PropertyChange { node, .. }
            | Self::ParentChange { node, .. }
            | Self::ListChange { node, .. }
            | Self::ListReplacement { node, .. } => *node,
        }
    }
}

/// Listener for tree changes.
///
/// Implementations receive the tree in its pre-mutation state. Returning an
/// error cancels the mutation and is propagated to the caller of the
/// mutating operation.
pub trait AstObserver: Send + Sync {
    fn notify(&self, ast: &Ast, event: &AstEvent) -> Result<(), ObserverError>;
}

/// Token returned by [`Ast::register_observer`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

struct Registration {
    handle: ObserverHandle,
    observer: Weak<dyn AstObserver>,
}

#[derive(Default)]
pub(crate) struct ObserverList {
    next_handle: u64,
    registrations: Vec<Registration>,
}

impl ObserverList {
    pub(crate) fn register(&mut self, observer: Weak<dyn AstObserver>) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.registrations.push(Registration { handle, observer });
        handle
    }

    pub(crate) fn unregister(&mut self, handle: ObserverHandle) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|reg| reg.handle != handle);
        self.registrations.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Listeners in registration order, as of now.
    pub(crate) fn snapshot(&self) -> Vec<Weak<dyn AstObserver>> {
        self.registrations
            .iter()
            .map(|reg| reg.observer.clone())
            .collect()
    }

    /// Drop registrations whose listener no longer exists.
    pub(crate) fn prune(&mut self) {
        let before = self.registrations.len();
        self.registrations
            .retain(|reg| reg.observer.strong_count() > 0);
        let pruned = before - self.registrations.len();
        if pruned > 0 {
            debug!(pruned, "dropped observers removed from tree");
        }
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("registrations", &self.registrations.len())
            .finish()
    }
}

impl Ast {
    /// Register a listener for every change to this tree.
    ///
    /// Only a weak reference is kept: the caller keeps the listener alive
    /// and should call [`Ast::unregister_observer`] when done.
    pub fn register_observer<O>(&mut self, observer: &Arc<O>) -> ObserverHandle
    where
        O: AstObserver + 'static,
    {
        let weak: Weak<O> = Arc::downgrade(observer);
        self.observers.register(weak)
    }

    /// Returns false if the handle was not registered.
    pub fn unregister_observer(&mut self, handle: ObserverHandle) -> bool {
        self.observers.unregister(handle)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver `events` to a snapshot of the current listeners.
    ///
    /// Stops at the first failure; nothing has been mutated yet at that point.
    pub(crate) fn publish(&self, events: &[AstEvent]) -> Result<(), ObserverError> {
        if self.observers.is_empty() || events.is_empty() {
            return Ok(());
        }
        let listeners = self.observers.snapshot();
        for event in events {
            trace!(?event, listeners = listeners.len(), "publishing");
            for listener in &listeners {
                if let Some(listener) = listener.upgrade() {
                    listener.notify(self, event)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn prune_observers(&mut self) {
        self.observers.prune();
    }
}

/// Observer that records every event it receives.
///
/// ```ignore
/// let log = Arc::new(ChangeLog::default());
/// let handle = ast.register_observer(&log);
/// import.set_static(&mut ast, true)?;
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ChangeLog {
    events: Mutex<Vec<AstEvent>>,
}

impl ChangeLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<AstEvent> {
        self.events.lock().clone()
    }

    /// Only the property changes, in order.
    pub fn property_changes(&self) -> Vec<AstEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, AstEvent::PropertyChange { .. }))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl AstObserver for ChangeLog {
    fn notify(&self, _ast: &Ast, event: &AstEvent) -> Result<(), ObserverError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
