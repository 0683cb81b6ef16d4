//! # MetaModel
//!
//! Reflection-free descriptors for every node type of the tree.
//!
//! Generic algorithms (clone, equality, replace, remove, traversal) never
//! match on concrete node types. They ask the registry for a type's
//! [`ClassMetaModel`] and walk its [`PropertyMetaModel`]s instead.
//!
//! ```text
//! declarations   ← registration table, one entry per node type
//!     │
//!     ▼
//! registry       ← topological build, validated once, read-only afterwards
//!     │
//!     ▼
//! ClassMetaModel ← declared / derived / all properties, supertype link
//!     │
//!     ▼
//! PropertyMetaModel ← one property, produced by type analysis
//! ```
//!
//! The registry is built lazily on first use and every [`Ast`](crate::ast::Ast)
//! forces it in its constructor, so a tree can never observe a partially
//! built registry.

mod class;
mod declarations;
mod error;
mod node_type;
mod property;
mod registry;

pub use class::ClassMetaModel;
pub use declarations::{DECLARATIONS, PropertyDecl, TypeDecl};
pub use error::MetaModelError;
pub use node_type::{NodeType, PrimitiveType, Property};
pub use property::{PropertyMetaModel, TypeRef, ValueType};
pub use registry::{MetaModelRegistry, meta_model, registry};
