use serde::{Deserialize, Serialize};

/// Multiplicity of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipType {
    OneToMany,
    ManyToOne,
    ManyToMany,
    /// Owning side of a many-to-many relationship; carries the join table
    ManyToManyOwner,
}

impl RelationshipType {
    /// Whether the far side can hold many of the near entity, in which
    /// case the inverse-side accessor pluralizes.
    pub fn inverse_is_plural(self) -> bool {
        !matches!(self, RelationshipType::OneToMany)
    }

    /// Whether following this edge from the near entity yields a single
    /// record rather than a collection.
    pub fn is_singular(self) -> bool {
        matches!(self, RelationshipType::ManyToOne)
    }
}

fn default_nullable() -> bool {
    true
}

/// A typed edge from the described entity to another entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: RelationshipType,

    /// Name of the target entity
    pub to: String,

    /// Nullable on the ORM relation decorator; defaults to true
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default)]
    pub description: String,
}
