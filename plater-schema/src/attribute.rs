use serde::{Deserialize, Serialize};

/// The closed set of attribute type kinds.
///
/// Scalar kinds can be carried by the combined `@FieldColumn` decorator;
/// the remaining kinds need dedicated column or GraphQL handling per
/// operation context. An unrecognized tag in the input is a
/// deserialization error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Text,
    Boolean,
    Integer,
    Float,
    Date,
    Time,
    DateTime,
    /// Creation timestamp, maintained by the ORM
    Created,
    /// Last-update timestamp, maintained by the ORM
    Updated,
    /// Arbitrary JSON blob
    Json,
}

impl AttributeType {
    /// Whether this kind is a plain scalar, eligible for `@FieldColumn`.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            AttributeType::String
                | AttributeType::Text
                | AttributeType::Boolean
                | AttributeType::Integer
                | AttributeType::Float
        )
    }
}

fn default_true() -> bool {
    true
}

/// A scalar-valued field of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: AttributeType,

    #[serde(default)]
    pub description: String,

    /// Enforce a uniqueness constraint on the column
    #[serde(default)]
    pub unique: bool,

    /// Persist this attribute as a database column
    #[serde(default = "default_true")]
    pub is_db_column: bool,

    /// Expose this attribute as a GraphQL field
    #[serde(default = "default_true")]
    pub is_gql_field: bool,

    /// Include this attribute in the create input type
    #[serde(default = "default_true")]
    pub for_gql_create: bool,

    /// Include this attribute in the update input type
    #[serde(default = "default_true")]
    pub for_gql_update: bool,

    /// Nullable for both the ORM and the GraphQL layer
    #[serde(default)]
    pub nullable: bool,
}
