//! ER schema parsing and validation for the plater boilerplate generator.
//!
//! A schema file is a JSON document describing one entity, its
//! attributes, and its relationships to other entities:
//!
//! ```json
//! {
//!   "entity": {
//!     "name": "Group",
//!     "pk": "id",
//!     "description": "Group of survey respondents",
//!     "attributes": [
//!       { "name": "title", "type": "string", "description": "Group name" }
//!     ]
//!   },
//!   "relationships": [
//!     { "name": "survey", "type": "manyToOne", "to": "Survey", "description": "Owning survey" }
//!   ]
//! }
//! ```

mod attribute;
mod entity;
mod error;
mod relationship;

use std::path::Path;

pub use attribute::{Attribute, AttributeType};
pub use entity::Entity;
pub use error::{Error, Result};
use plater_core::{Inflections, is_identifier};
pub use relationship::{Relationship, RelationshipType};
use serde::{Deserialize, Serialize};

/// Top-level parsed schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub entity: Entity,

    #[serde(default)]
    pub relationships: Vec<Relationship>,

    /// Case variants of the entity name, derived right after
    /// deserialization. Not part of the input document.
    #[serde(skip)]
    pub inflections: Inflections,
}

impl Schema {
    /// Validate the schema after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        validate_name(&self.entity.name, "entity", src, filename)?;

        if self.entity.pk.is_empty() {
            return Err(Error::validation(
                "entity is missing a primary key field name",
                src,
                filename,
            ));
        }

        for attr in &self.entity.attributes {
            if attr.name.is_empty() {
                return Err(Error::validation(
                    "attribute is missing a name",
                    src,
                    filename,
                ));
            }
        }

        for rel in &self.relationships {
            if rel.name.is_empty() {
                return Err(Error::validation(
                    "relationship is missing a name",
                    src,
                    filename,
                ));
            }
            validate_name(&rel.to, "relationship target", src, filename)?;
        }

        Ok(())
    }
}

/// Validate that a name is letter-initial and alphabetic
fn validate_name(name: &str, context: &str, src: &str, filename: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::invalid_identifier(name, context, src, filename))
    }
}

/// Load and parse the ER schema file for a particular entity
pub fn parse_file(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse an ER schema from a string (uses "schema.json" as default filename)
pub fn parse_str(content: &str) -> Result<Schema> {
    parse_str_with_filename(content, "schema.json")
}

/// Parse an ER schema from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Schema> {
    let mut schema: Schema =
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    schema.validate(content, filename)?;

    // validate() just approved the entity name, so this cannot fail; keep
    // the error path wired anyway rather than panicking.
    schema.inflections = Inflections::new(&schema.entity.name)
        .map_err(|e| Error::validation(e.to_string(), content, filename))?;

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_SCHEMA: &str = r#"{
        "entity": {
            "name": "Group",
            "pk": "id",
            "description": "d",
            "attributes": [{"name": "title", "type": "string", "description": "t"}]
        },
        "relationships": []
    }"#;

    #[test]
    fn test_parse_computes_inflections() {
        let schema = parse_str(GROUP_SCHEMA).unwrap();
        assert_eq!(schema.inflections.init_upper_sg, "Group");
        assert_eq!(schema.inflections.init_lower_pl, "groups");
    }

    #[test]
    fn test_parse_relationships_default_empty() {
        let schema = parse_str(
            r#"{"entity": {"name": "Group", "pk": "id", "attributes": []}}"#,
        )
        .unwrap();
        assert!(schema.relationships.is_empty());
    }

    #[test]
    fn test_unknown_attribute_type_is_parse_error() {
        let result = parse_str(
            r#"{"entity": {"name": "Group", "pk": "id",
                "attributes": [{"name": "title", "type": "blob"}]}}"#,
        );
        assert!(matches!(*result.unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_entity_name_rejected() {
        let result =
            parse_str(r#"{"entity": {"name": "9lives", "pk": "id", "attributes": []}}"#);
        assert!(matches!(
            *result.unwrap_err(),
            Error::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn test_invalid_relationship_target_rejected() {
        let result = parse_str(
            r#"{"entity": {"name": "Group", "pk": "id", "attributes": []},
                "relationships": [{"name": "x", "type": "manyToOne", "to": "bad-name"}]}"#,
        );
        assert!(matches!(
            *result.unwrap_err(),
            Error::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn test_missing_pk_rejected() {
        let result = parse_str(r#"{"entity": {"name": "Group", "pk": "", "attributes": []}}"#);
        assert!(matches!(*result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_file("does/not/exist.json");
        assert!(matches!(*result.unwrap_err(), Error::Io { .. }));
    }
}
