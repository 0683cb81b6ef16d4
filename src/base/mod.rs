//! Foundation types for the jparse tree core.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`NodeId`] - Arena index of a node inside an [`Ast`](crate::ast::Ast)
//! - [`Position`], [`Span`] - Line/column positions carried by nodes
//!
//! This module has NO dependencies on other jparse modules.

mod id;
mod position;

pub use id::NodeId;
pub use position::{Position, Span};
