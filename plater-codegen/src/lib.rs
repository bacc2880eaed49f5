//! Declaration synthesis and template rendering for the plater
//! boilerplate generator.
//!
//! Given a parsed [`plater_schema::Schema`], this crate synthesizes the
//! decorator and field-declaration text for each operation context
//! (object, create-input, update-input), tracks which symbols the
//! generated code needs at file scope, and renders the result through a
//! directory of templates.

mod context;
mod engine;
mod error;
mod fields;
mod imports;
mod relations;

pub use context::{
    EntityContext, FieldBlocks, NameContext, Retriever, declare_fields, entity_context,
};
pub use engine::TemplateEngine;
pub use error::{Error, Result};
pub use fields::{Op, attribute_declarations, primary_key_declarations};
pub use imports::{ImportBlock, ImportKind, Imports};
pub use relations::{relationship_declarations, retriever};
