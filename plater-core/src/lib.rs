//! Core identifier utilities for the plater boilerplate generator.
//!
//! This crate derives the case and plurality variants of entity names
//! that the generated code needs (class names, accessor names, GraphQL
//! query names, and so on).

mod inflect;

pub use inflect::{Inflections, InvalidIdentifier, is_identifier, pluralize};
