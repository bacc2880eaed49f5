//! Assembly of declaration blocks into template-rendering contexts.

use plater_core::Inflections;
use plater_schema::{Entity, Schema};
use serde::Serialize;

use crate::error::Result;
use crate::fields::{JOIN_DOUBLE, Op, attribute_declarations, primary_key_declarations};
use crate::imports::{ImportBlock, Imports};
use crate::relations::{relationship_declarations, retriever};

/// How the far side of one relationship is retrieved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Retriever {
    pub is_singular: bool,
    pub to_entity: Inflections,
}

/// The three grouped declaration blocks for an entity, plus the
/// retrievers derived from its relationships.
#[derive(Debug)]
pub struct FieldBlocks {
    pub object_fields: String,
    pub input_fields: String,
    pub update_fields: String,
    pub retrievers: Vec<Retriever>,
}

/// Synthesize every declaration block for the schema's entity.
///
/// The primary key comes first in the object and update blocks and is
/// absent from the create block; attributes follow in schema order, and
/// relationships close the object block.
pub fn declare_fields(schema: &Schema, imports: &mut Imports) -> Result<FieldBlocks> {
    let mut object_fields = Vec::new();
    let mut input_fields = Vec::new();
    let mut update_fields = Vec::new();
    let mut retrievers = Vec::new();

    if let Some(pk) = primary_key_declarations(&schema.entity, Op::Object, imports) {
        object_fields.push(pk);
    }
    if let Some(pk) = primary_key_declarations(&schema.entity, Op::Update, imports) {
        update_fields.push(pk);
    }

    for attr in &schema.entity.attributes {
        if let Some(block) = attribute_declarations(attr, Op::Object, imports) {
            object_fields.push(block);
        }
        if let Some(block) = attribute_declarations(attr, Op::Create, imports) {
            input_fields.push(block);
        }
        if let Some(block) = attribute_declarations(attr, Op::Update, imports) {
            update_fields.push(block);
        }
    }

    for rel in &schema.relationships {
        object_fields.push(relationship_declarations(rel, &schema.inflections, imports)?);
        retrievers.push(retriever(rel)?);
    }

    Ok(FieldBlocks {
        object_fields: object_fields.join(JOIN_DOUBLE),
        input_fields: input_fields.join(JOIN_DOUBLE),
        update_fields: update_fields.join(JOIN_DOUBLE),
        retrievers,
    })
}

/// Full render context for the entity template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContext<'a> {
    pub imports: ImportBlock,
    pub entity: &'a Entity,
    pub object_fields: String,
    pub input_fields: String,
    pub update_fields: String,
    pub retrievers: Vec<Retriever>,
}

/// Run one full generation pass over the schema and package the result
/// for template rendering. The import tracker lives and dies inside this
/// call.
pub fn entity_context(schema: &Schema) -> Result<EntityContext<'_>> {
    let mut imports = Imports::new();
    let blocks = declare_fields(schema, &mut imports)?;

    Ok(EntityContext {
        imports: imports.for_template(),
        entity: &schema.entity,
        object_fields: blocks.object_fields,
        input_fields: blocks.input_fields,
        update_fields: blocks.update_fields,
        retrievers: blocks.retrievers,
    })
}

/// Render context for the artifacts that only need the entity's name
/// variants (module, service, resolver).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameContext {
    pub entity_name: String,
    pub entity_name_plural: String,
}

impl From<&Inflections> for NameContext {
    fn from(inflections: &Inflections) -> Self {
        Self {
            entity_name: inflections.init_upper_sg.clone(),
            entity_name_plural: inflections.init_upper_pl.clone(),
        }
    }
}
