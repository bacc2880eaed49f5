use serde::{Deserialize, Serialize};

use crate::Attribute;

/// The single data record type described by one schema file.
///
/// Owns its attributes exclusively; relationships to other entities live
/// on the enclosing [`Schema`](crate::Schema).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,

    /// Name of the server-assigned primary key field
    pub pk: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,
}
