use crate::ir::Ir;
use crate::render::CodegenConfig;
use crate::render::Entity;
use crate::render::ModuleType;
use crate::render::OperationsLocation;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::tests::utils::build_ir;
use crate::render::tests::utils::module_type;
use crate::render::tests::utils::test_config;
use indoc::indoc;
use std::path::PathBuf;

const SCHEMA: &str = indoc! {"
    type Query {
      allAnimals(size: Size): [Animal!]
    }

    interface Animal {
      species: String!
    }

    type Dog implements Animal {
      species: String!
    }

    enum Size {
      SMALL
      LARGE
    }
"};

const DOCUMENT: &str = indoc! {"
    query AllAnimals($size: Size) {
      allAnimals(size: $size) {
        ...AnimalDetails
      }
    }

    fragment AnimalDetails on Animal {
      species
    }
"};

fn output_paths(config: &CodegenConfig, ir: &Ir) -> Vec<(String, PathBuf)> {
    let ctx = RenderContext::new(config, ir).unwrap();
    Entity::all(ir)
        .iter()
        .map(|entity| (entity.name().to_string(), entity.output_path(&ctx)))
        .collect()
}

fn output_path(config: &CodegenConfig, ir: &Ir, name: &str) -> PathBuf {
    output_paths(config, ir)
        .into_iter()
        .find(|(entity_name, _)| entity_name == name)
        .map(|(_, path)| path)
        .unwrap_or_else(|| panic!("no entity named `{name}`"))
}

#[test]
fn all_lists_schema_types_before_definitions() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let names = Entity::all(&ir)
        .iter()
        .map(|entity| entity.name())
        .collect::<Vec<_>>();

    assert_eq!(names, vec![
        "SchemaMetadata",
        "Dog",
        "Query",
        "Animal",
        "Size",
        "AnimalDetails",
        "AllAnimals",
    ]);
}

#[test]
fn schema_types_are_grouped_by_kind() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let config = test_config();

    assert_eq!(
        output_path(&config, &ir, "SchemaMetadata"),
        PathBuf::from("Generated/Schema/SchemaMetadata.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "Dog"),
        PathBuf::from("Generated/Schema/Objects/Dog.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "Animal"),
        PathBuf::from("Generated/Schema/Interfaces/Animal.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "Size"),
        PathBuf::from("Generated/Schema/Enums/Size.graphql.swift"),
    );
}

#[test]
fn in_schema_module_definitions_go_under_schema_types_path() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let config = test_config();

    assert_eq!(
        output_path(&config, &ir, "AllAnimals"),
        PathBuf::from("Generated/Operations/Queries/AllAnimalsQuery.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "AnimalDetails"),
        PathBuf::from("Generated/Fragments/AnimalDetails.graphql.swift"),
    );
}

#[test]
fn absolute_definitions_are_grouped_under_the_configured_path() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let mut config = test_config();
    config.output.operations = OperationsLocation::Absolute {
        path: PathBuf::from("Operations"),
    };

    assert_eq!(
        output_path(&config, &ir, "AllAnimals"),
        PathBuf::from("Operations/Queries/AllAnimalsQuery.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "AnimalDetails"),
        PathBuf::from("Operations/Fragments/AnimalDetails.graphql.swift"),
    );
}

#[test]
fn relative_definitions_are_written_next_to_their_document() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let mut config = test_config();
    config.output.operations = OperationsLocation::Relative { subpath: None };

    assert_eq!(
        output_path(&config, &ir, "AllAnimals"),
        PathBuf::from("graphql/AllAnimalsQuery.graphql.swift"),
    );
    assert_eq!(
        output_path(&config, &ir, "AnimalDetails"),
        PathBuf::from("graphql/AnimalDetails.graphql.swift"),
    );
}

#[test]
fn relative_subpath_is_appended_to_the_document_directory() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let mut config = test_config();
    config.output.operations = OperationsLocation::Relative {
        subpath: Some(PathBuf::from("Generated")),
    };

    assert_eq!(
        output_path(&config, &ir, "AllAnimals"),
        PathBuf::from("graphql/Generated/AllAnimalsQuery.graphql.swift"),
    );
}

#[test]
fn every_entity_renders() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let config = test_config();
    let ctx = RenderContext::new(&config, &ir).unwrap();

    for entity in Entity::all(&ir) {
        let rendered = entity.render(&ctx).unwrap();
        assert!(rendered.starts_with("import ApolloAPI\n"), "{}", entity.name());
    }
}

#[test]
fn swift_package_module_name_defaults_to_schema_namespace() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let config = test_config();

    let ctx = RenderContext::new(&config, &ir).unwrap();

    assert_eq!(ctx.module_type(), ModuleType::SwiftPackageManager);
    assert_eq!(ctx.module_name(), Some("TestSchema"));
}

#[test]
fn unknown_module_type_is_a_render_error() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let mut config = test_config();
    config.output.schema_types.module_type = module_type("cocoapods", None);

    let result = RenderContext::new(&config, &ir);

    assert_eq!(result.err(), Some(RenderError::UnknownModuleType {
        module_type: "cocoapods".to_string(),
    }));
}

#[test]
fn embedded_in_target_requires_a_module_name() {
    let ir = build_ir(SCHEMA, DOCUMENT);
    let mut config = test_config();
    config.output.schema_types.module_type = module_type("embeddedInTarget", Some(" "));

    let result = RenderContext::new(&config, &ir);

    assert_eq!(result.err(), Some(RenderError::MissingModuleName {
        module_type: "embeddedInTarget".to_string(),
    }));
}
