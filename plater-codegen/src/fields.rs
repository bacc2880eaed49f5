//! Attribute and primary-key declaration synthesis.
//!
//! Each attribute is rendered once per operation context into a small
//! block of decorator lines followed by exactly one typed field
//! declaration. Declarations inside a block indent two spaces under the
//! enclosing class body.

use plater_schema::{Attribute, AttributeType, Entity};

use crate::imports::{ImportKind, Imports};

/// Separator between lines of a single declaration block.
pub(crate) const JOIN_SINGLE: &str = "\n  ";
/// Separator between declaration blocks within a class body.
pub(crate) const JOIN_DOUBLE: &str = "\n\n  ";

/// Operation context a declaration is synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// The persisted object type
    Object,
    /// The create-input type
    Create,
    /// The update-input type
    Update,
}

/// Join decorator options as a `{ ... }` options hash, or nothing when
/// there are no options.
pub(crate) fn brace_options(options: &[String]) -> Option<String> {
    if options.is_empty() {
        None
    } else {
        Some(format!("{{ {} }}", options.join(", ")))
    }
}

/// The GraphQL type override for an attribute kind, when the decorator
/// cannot infer it from the field declaration.
fn graphql_type(ty: AttributeType, imports: &mut Imports) -> Option<&'static str> {
    match ty {
        AttributeType::String
        | AttributeType::Text
        | AttributeType::Boolean
        | AttributeType::Time
        | AttributeType::DateTime => None,
        // Timestamp kinds are handled by dedicated column decorators
        AttributeType::Created | AttributeType::Updated => None,
        AttributeType::Integer => {
            imports.add(ImportKind::GraphQl, "Int");
            Some("() => Int")
        }
        AttributeType::Float => {
            imports.add(ImportKind::GraphQl, "Float");
            Some("() => Float")
        }
        AttributeType::Date => {
            imports.add(
                ImportKind::Statements,
                "import { GraphQLDate } from '@/shared/date.graphql';",
            );
            Some("() => GraphQLDate")
        }
        AttributeType::Json => {
            imports.add(
                ImportKind::Statements,
                "import { GraphQLJSONObject } from 'graphql-type-json';",
            );
            Some("() => GraphQLJSONObject")
        }
    }
}

/// Combined `@FieldColumn` decorator for plain scalar attributes.
fn field_column_decorator(attr: &Attribute, op: Op, imports: &mut Imports) -> String {
    let mut options = Vec::new();
    if op == Op::Update || attr.nullable {
        options.push("nullable: true".to_string());
    }
    if attr.unique {
        options.push("unique: true".to_string());
    }

    let mut args = vec![format!("\"{}\"", attr.description)];
    if let Some(gql) = graphql_type(attr.ty, imports) {
        args.push(gql.to_string());
    }
    if let Some(opts) = brace_options(&options) {
        args.push(opts);
    }

    imports.add(ImportKind::Decorators, "FieldColumn");
    format!("@FieldColumn({})", args.join(", "))
}

/// Standalone `@Field` decorator for attributes that cannot use the
/// combined form.
fn field_decorator(attr: &Attribute, op: Op, imports: &mut Imports) -> String {
    let mut options = vec![format!("description: \"{}\"", attr.description)];
    if op == Op::Update || attr.nullable {
        options.push("nullable: true".to_string());
    }

    let mut args = Vec::new();
    if let Some(gql) = graphql_type(attr.ty, imports) {
        args.push(gql.to_string());
    }
    if let Some(opts) = brace_options(&options) {
        args.push(opts);
    }

    imports.add(ImportKind::GraphQl, "Field");
    format!("@Field({})", args.join(", "))
}

/// Standalone `@Column` decorator, emitted only for persisted columns in
/// the object context. Timestamp kinds bypass the generic column and use
/// the dedicated creation/update markers.
fn column_decorator(attr: &Attribute, op: Op, imports: &mut Imports) -> Option<String> {
    if !attr.is_db_column || op != Op::Object {
        return None;
    }

    let mut options = Vec::new();
    match attr.ty {
        AttributeType::Created => {
            imports.add(ImportKind::TypeOrm, "CreateDateColumn");
            return Some("@CreateDateColumn()".to_string());
        }
        AttributeType::Updated => {
            imports.add(ImportKind::TypeOrm, "UpdateDateColumn");
            return Some("@UpdateDateColumn()".to_string());
        }
        AttributeType::Text => options.push("type: \"text\"".to_string()),
        AttributeType::Date => options.push("type: \"date\"".to_string()),
        AttributeType::Time => options.push("type: \"time with time zone\"".to_string()),
        AttributeType::DateTime => {
            options.push("type: \"timestamp with time zone\"".to_string());
        }
        AttributeType::Json => options.push("type: \"jsonb\"".to_string()),
        // The ORM infers the column type from the declaration
        AttributeType::String
        | AttributeType::Boolean
        | AttributeType::Integer
        | AttributeType::Float => {}
    }

    options.push(format!("comment: \"{}\"", attr.description));
    if attr.nullable {
        options.push("nullable: true".to_string());
    }
    if attr.unique {
        options.push("unique: true".to_string());
    }

    imports.add(ImportKind::TypeOrm, "Column");
    Some(format!(
        "@Column({})",
        brace_options(&options).unwrap_or_default()
    ))
}

/// The typed field declaration line that closes every block.
fn field_declaration(attr: &Attribute, op: Op) -> String {
    let optional = if op == Op::Update { "?" } else { "" };

    let ts_type = match attr.ty {
        AttributeType::Created
        | AttributeType::Updated
        | AttributeType::Date
        | AttributeType::Time
        | AttributeType::DateTime => "Date",
        AttributeType::Json => "Object",
        AttributeType::Text | AttributeType::String => "string",
        AttributeType::Integer | AttributeType::Float => "number",
        AttributeType::Boolean => "boolean",
    };

    format!("{}{}: {};", attr.name, optional, ts_type)
}

/// Synthesize the full declaration block for one attribute in one
/// operation context.
///
/// Returns `None` when the context excludes the attribute (create-input
/// without `forGqlCreate`, update-input without `forGqlUpdate`).
pub fn attribute_declarations(attr: &Attribute, op: Op, imports: &mut Imports) -> Option<String> {
    if (op == Op::Create && !attr.for_gql_create) || (op == Op::Update && !attr.for_gql_update) {
        return None;
    }

    let mut lines = Vec::new();
    if attr.ty.is_scalar() && attr.is_gql_field {
        lines.push(field_column_decorator(attr, op, imports));
    } else {
        if attr.is_gql_field {
            lines.push(field_decorator(attr, op, imports));
        }
        if let Some(column) = column_decorator(attr, op, imports) {
            lines.push(column);
        }
    }
    lines.push(field_declaration(attr, op));

    Some(lines.join(JOIN_SINGLE))
}

/// Synthesize the primary-key declaration block.
///
/// The create-input type never carries the key: its value is
/// server-assigned, so `Op::Create` yields `None`.
pub fn primary_key_declarations(entity: &Entity, op: Op, imports: &mut Imports) -> Option<String> {
    if op == Op::Create {
        return None;
    }

    imports.add(ImportKind::TypeOrm, "Entity");
    imports.add(ImportKind::GraphQl, "ObjectType");
    imports.add(ImportKind::GraphQl, "InputType");
    imports.add(ImportKind::GraphQl, "Field");
    imports.add(ImportKind::GraphQl, "Int");

    let mut lines = vec!["@Field(() => Int, { description: 'Primary key' })".to_string()];
    if op == Op::Object {
        imports.add(ImportKind::TypeOrm, "PrimaryGeneratedColumn");
        lines.push("@PrimaryGeneratedColumn({ comment: 'Primary key' })".to_string());
    }
    lines.push(format!("{}: number;", entity.pk));

    Some(lines.join(JOIN_SINGLE))
}
