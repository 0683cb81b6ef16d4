//! AST layer tests
//!
//! End-to-end behaviour of the node arena:
//! - Owning setters and observer notification
//! - Generic replace and remove on lists and single children
//! - Clone, equality and visitors over whole compilation units

mod tests_clone;
mod tests_mutation;
mod tests_observers;
mod tests_visitors;
