//! The node arena and everything that reads or edits it.
//!
//! An [`Ast`] owns every node; a node is addressed by its [`NodeId`] and
//! described by the [`ClassMetaModel`](crate::metamodel::ClassMetaModel) of
//! its type. Property values live in per-type slots, so generic code (clone,
//! equality, validation, replace/remove) works by iterating descriptors, while
//! the typed wrappers in [`nodes`] give field-style access on top.
//!
//! Mutations go through `&mut Ast` and follow one contract: validate, publish
//! to observers, then commit, keeping parent links consistent throughout.

mod clone;
mod derived;
mod equals;
mod error;
mod list;
mod mutation;
pub mod nodes;
mod observer;
mod operators;
mod traversal;
mod tree;
mod validate;
mod value;
mod visitor;


pub use clone::{CloneVisitor, Snapshot, SnapshotValue};
pub use equals::{EqualsVisitor, structurally_equal};
pub use error::{AstError, ObserverError};
pub use nodes::AstNode;
pub use observer::{AstEvent, AstObserver, ChangeLog, ListChangeType, ObserverHandle};
pub use operators::{BinaryOperator, UnaryOperator};
pub use traversal::TreeTraversal;
pub use tree::Ast;
pub use validate::Problem;
pub use value::{NodeList, Value};
pub use visitor::{GenericVisitor, VoidVisitor, walk_children};
