use plater_codegen::{NameContext, Result, TemplateEngine, entity_context};
use plater_schema::Schema;

/// One generatable output, tied to its template key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Artifact {
    Entity,
    Module,
    Service,
    Resolver,
    /// Combined GraphQL operations for the API layer
    Graphql,
    Table,
    CreateUpdate,
}

impl Artifact {
    pub fn label(self) -> &'static str {
        match self {
            Artifact::Entity => "entity",
            Artifact::Module => "module",
            Artifact::Service => "service",
            Artifact::Resolver => "resolver",
            Artifact::Graphql => "graphql",
            Artifact::Table => "table",
            Artifact::CreateUpdate => "create-update",
        }
    }

    pub fn template_key(self) -> &'static str {
        match self {
            Artifact::Graphql => "crud",
            other => other.label(),
        }
    }

    /// Render this artifact with the context shape its template expects.
    pub fn render(self, engine: &TemplateEngine, schema: &Schema) -> Result<String> {
        match self {
            Artifact::Entity => engine.render(self.template_key(), entity_context(schema)?),
            Artifact::Module | Artifact::Service | Artifact::Resolver => engine.render(
                self.template_key(),
                NameContext::from(&schema.inflections),
            ),
            Artifact::Graphql | Artifact::Table | Artifact::CreateUpdate => {
                engine.render(self.template_key(), &schema.inflections)
            }
        }
    }
}
