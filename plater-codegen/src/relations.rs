//! Relationship declaration synthesis.

use plater_core::Inflections;
use plater_schema::{Relationship, RelationshipType};

use crate::context::Retriever;
use crate::error::Result;
use crate::fields::JOIN_SINGLE;
use crate::imports::{ImportKind, Imports};

/// GraphQL exposure line: singular shape for many-to-one, list shape for
/// everything else.
fn gql_exposure(rel: &Relationship, imports: &mut Imports) -> String {
    imports.add(ImportKind::GraphQl, "Field");
    imports.add(ImportKind::Entities, rel.to.as_str());

    match rel.ty {
        RelationshipType::ManyToOne => format!("@Field(() => {})", rel.to),
        RelationshipType::OneToMany
        | RelationshipType::ManyToMany
        | RelationshipType::ManyToManyOwner => format!("@Field(() => [{}])", rel.to),
    }
}

fn orm_decorator_name(ty: RelationshipType, imports: &mut Imports) -> &'static str {
    match ty {
        RelationshipType::OneToMany => {
            imports.add(ImportKind::TypeOrm, "OneToMany");
            "@OneToMany"
        }
        RelationshipType::ManyToOne => {
            imports.add(ImportKind::TypeOrm, "ManyToOne");
            "@ManyToOne"
        }
        RelationshipType::ManyToMany | RelationshipType::ManyToManyOwner => {
            imports.add(ImportKind::TypeOrm, "ManyToMany");
            "@ManyToMany"
        }
    }
}

/// Inverse-side accessor: the target entity names the near entity, in
/// plural form whenever the far side can hold many of it.
fn inverse_accessor(rel: &Relationship, target: &Inflections, entity: &Inflections) -> String {
    let to_lower = &target.init_lower_sg;
    let near = if rel.ty.inverse_is_plural() {
        &entity.init_lower_pl
    } else {
        &entity.init_lower_sg
    };
    format!("{} => {}.{}", to_lower, to_lower, near)
}

fn field_declaration(rel: &Relationship) -> String {
    match rel.ty {
        RelationshipType::ManyToOne => format!("{}: {}", rel.name, rel.to),
        RelationshipType::OneToMany
        | RelationshipType::ManyToMany
        | RelationshipType::ManyToManyOwner => format!("{}: {}[]", rel.name, rel.to),
    }
}

/// Synthesize the full declaration block for one relationship in the
/// object context.
pub fn relationship_declarations(
    rel: &Relationship,
    entity_inflections: &Inflections,
    imports: &mut Imports,
) -> Result<String> {
    let target = Inflections::new(&rel.to)?;

    let orm_name = orm_decorator_name(rel.ty, imports);
    let mut args = vec![
        format!("() => {}", rel.to),
        inverse_accessor(rel, &target, entity_inflections),
    ];
    if !rel.nullable {
        // Only if not the default
        args.push("{ nullable: false }".to_string());
    }

    let mut lines = vec![
        gql_exposure(rel, imports),
        format!("{}({})", orm_name, args.join(", ")),
    ];

    if rel.ty == RelationshipType::ManyToManyOwner {
        imports.add(ImportKind::TypeOrm, "JoinTable");
        lines.push("@JoinTable()".to_string());
    }

    lines.push(format!("{};", field_declaration(rel)));

    Ok(lines.join(JOIN_SINGLE))
}

/// Describe how the far side of a relationship is retrieved, for use in
/// the render context.
pub fn retriever(rel: &Relationship) -> Result<Retriever> {
    Ok(Retriever {
        is_singular: rel.ty.is_singular(),
        to_entity: Inflections::new(&rel.to)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(json: &str) -> Relationship {
        serde_json::from_str(json).unwrap()
    }

    fn group() -> Inflections {
        Inflections::new("Group").unwrap()
    }

    #[test]
    fn test_many_to_one() {
        let rel = relationship(r#"{"name": "survey", "type": "manyToOne", "to": "Survey"}"#);
        let mut imports = Imports::new();

        let block = relationship_declarations(&rel, &group(), &mut imports).unwrap();
        assert_eq!(
            block,
            "@Field(() => Survey)\n  \
             @ManyToOne(() => Survey, survey => survey.groups)\n  \
             survey: Survey;"
        );
        assert_eq!(imports.for_template().entities, "Survey");
    }

    #[test]
    fn test_one_to_many_singular_inverse() {
        let rel = relationship(r#"{"name": "responses", "type": "oneToMany", "to": "Response"}"#);
        let mut imports = Imports::new();

        let block = relationship_declarations(&rel, &group(), &mut imports).unwrap();
        assert_eq!(
            block,
            "@Field(() => [Response])\n  \
             @OneToMany(() => Response, response => response.group)\n  \
             responses: Response[];"
        );
    }

    #[test]
    fn test_many_to_many_owner_gets_join_table() {
        let rel = relationship(r#"{"name": "tags", "type": "manyToManyOwner", "to": "Tag"}"#);
        let mut imports = Imports::new();

        let block = relationship_declarations(&rel, &group(), &mut imports).unwrap();
        assert_eq!(
            block,
            "@Field(() => [Tag])\n  \
             @ManyToMany(() => Tag, tag => tag.groups)\n  \
             @JoinTable()\n  \
             tags: Tag[];"
        );
        assert!(imports.for_template().type_orm.contains("JoinTable"));
    }

    #[test]
    fn test_non_nullable_marker_only_when_non_default() {
        let rel = relationship(
            r#"{"name": "survey", "type": "manyToOne", "to": "Survey", "nullable": false}"#,
        );
        let mut imports = Imports::new();

        let block = relationship_declarations(&rel, &group(), &mut imports).unwrap();
        assert!(block.contains("@ManyToOne(() => Survey, survey => survey.groups, { nullable: false })"));
    }

    #[test]
    fn test_retriever_multiplicity() {
        let singular = relationship(r#"{"name": "survey", "type": "manyToOne", "to": "Survey"}"#);
        let plural = relationship(r#"{"name": "tags", "type": "manyToMany", "to": "Tag"}"#);

        assert!(retriever(&singular).unwrap().is_singular);
        assert!(!retriever(&plural).unwrap().is_singular);
        assert_eq!(retriever(&plural).unwrap().to_entity.init_lower_pl, "tags");
    }
}
