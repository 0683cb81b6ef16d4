//! Metamodel tests
//!
//! Registry contents as seen from outside the crate:
//! - Property order and inheritance
//! - Type analysis of declared properties
//! - Lookup by name

mod tests_registry;
