//! End-to-end rendering through the shipped template directory.

use plater_codegen::{Error, NameContext, TemplateEngine, entity_context};
use plater_schema::{Schema, parse_str};

const GROUP_SCHEMA: &str = r#"{
    "entity": {
        "name": "Group",
        "pk": "id",
        "description": "d",
        "attributes": [{"name": "title", "type": "string", "description": "t"}]
    },
    "relationships": []
}"#;

fn engine() -> TemplateEngine {
    // Tests run with the crate directory as working directory.
    TemplateEngine::load("../templates").expect("Failed to load shipped templates")
}

fn group() -> Schema {
    parse_str(GROUP_SCHEMA).expect("Failed to parse schema")
}

#[test]
fn test_shipped_template_keys() {
    let engine = engine();
    assert_eq!(
        engine.keys(),
        &[
            "create-update",
            "crud",
            "entity",
            "module",
            "resolver",
            "service",
            "table",
        ]
    );
}

#[test]
fn test_entity_artifact() {
    let schema = group();
    let engine = engine();

    let out = engine
        .render("entity", entity_context(&schema).unwrap())
        .unwrap();

    // Object class with pk and attribute declarations
    assert!(out.contains("export class Group {"));
    assert!(out.contains("@PrimaryGeneratedColumn({ comment: 'Primary key' })"));
    assert!(out.contains("id: number;"));
    assert!(out.contains("@FieldColumn(\"t\")\n  title: string;"));

    // Create input omits the primary key entirely
    let create_input = out
        .split("export class GroupCreateInput {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("create input class missing");
    assert!(!create_input.contains("id: number;"));
    assert!(create_input.contains("title: string;"));

    // Import lines reflect the accumulated tracker
    assert!(out.contains("import { Entity, PrimaryGeneratedColumn } from \"typeorm\";"));
    assert!(out.contains("import { ObjectType, InputType, Field, Int } from \"@nestjs/graphql\";"));
    assert!(out.contains("import { FieldColumn } from \"src/decorators\";"));
    // No sibling entities, so no local import line
    assert!(!out.contains("from \".\";"));
}

#[test]
fn test_module_artifact() {
    let schema = group();
    let out = engine()
        .render("module", NameContext::from(&schema.inflections))
        .unwrap();

    assert!(out.contains("export class GroupModule {}"));
    assert!(out.contains("TypeOrmModule.forFeature([Group])"));
}

#[test]
fn test_service_artifact() {
    let schema = group();
    let out = engine()
        .render("service", NameContext::from(&schema.inflections))
        .unwrap();

    assert!(out.contains("export class GroupService {"));
    assert!(out.contains("create(createInput: GroupCreateInput)"));
    // The plural filter runs inside the template
    assert!(out.contains("// Read all Groups"));
}

#[test]
fn test_resolver_artifact() {
    let schema = group();
    let out = engine()
        .render("resolver", NameContext::from(&schema.inflections))
        .unwrap();

    assert!(out.contains("export class GroupResolver {"));
    assert!(out.contains("readAllGroups()"));
    assert!(out.contains("deleteGroup("));
}

#[test]
fn test_crud_artifact() {
    let schema = group();
    let out = engine().render("crud", &schema.inflections).unwrap();

    assert!(out.contains("export const READ_ALL_GROUPS = gql`"));
    assert!(out.contains("mutation CreateGroup($createInput: GroupCreateInput!)"));
    assert!(out.contains("export const DELETE_GROUP = gql`"));
}

#[test]
fn test_table_artifact() {
    let schema = group();
    let out = engine().render("table", &schema.inflections).unwrap();

    assert!(out.contains(":items=\"groups\""));
    // The lower filter runs inside the template
    assert!(out.contains("class=\"group-table\""));
    assert!(out.contains("name: \"GroupTable\""));
}

#[test]
fn test_create_update_artifact() {
    let schema = group();
    let out = engine().render("create-update", &schema.inflections).unwrap();

    assert!(out.contains("name: \"GroupCreateUpdate\""));
    assert!(out.contains("CREATE_GROUP"));
    assert!(out.contains("UPDATE_GROUP"));
}

#[test]
fn test_unknown_template_key_fails() {
    let err = engine()
        .render("nonexistent", &group().inflections)
        .unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
}
