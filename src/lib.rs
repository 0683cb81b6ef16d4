//! # jparse-core
//!
//! Reflective node model for a Java-family AST: a metamodel describing every
//! node type and property, an arena of nodes that honours that description,
//! and generic algorithms built on it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ast        → Node arena, mutation, observers, visitors, typed wrappers
//!   ↓
//! metamodel  → Node types, property descriptors, the global registry
//!   ↓
//! base       → Primitives (NodeId, Span, Position)
//! ```

// ============================================================================
// MODULES (dependency order: base → metamodel → ast)
// ============================================================================

/// Foundation types: NodeId, Span, Position
pub mod base;

/// Metamodel: ClassMetaModel, PropertyMetaModel, registry
pub mod metamodel;

/// AST: arena, values, mutation contract, observers, visitors
pub mod ast;

// Re-export commonly needed items
pub use ast::{Ast, AstError, AstNode, NodeList, Value};
pub use base::{NodeId, Position, Span};
pub use metamodel::{ClassMetaModel, NodeType, Property, PropertyMetaModel, registry};
