use crate::codegen::CodegenError;
use crate::codegen::CodegenErrorKind;
use crate::codegen::CodegenRequest;
use crate::codegen::generate;
use crate::ir::IrBuildError;
use crate::operation::DocumentBuildError;
use crate::render::CodegenConfig;
use crate::render::ConfigError;
use crate::render::ExperimentalFeatures;
use crate::render::InputConfig;
use crate::render::ModuleTypeConfig;
use crate::render::OperationsLocation;
use crate::render::OutputConfig;
use crate::render::OutputOptions;
use crate::render::RenderError;
use crate::render::SchemaTypesConfig;
use crate::schema::SchemaBuildError;
use indoc::indoc;
use std::path::Path;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

const SCHEMA: &str = indoc! {"
    type Query {
      allAnimals: [Animal!]
      animal(id: ID!): Animal
    }

    interface Animal {
      species: String!
    }

    type Dog implements Animal {
      species: String!
      barkVolume: Int
    }
"};

fn config() -> CodegenConfig {
    CodegenConfig {
        experimental_features: ExperimentalFeatures::default(),
        input: InputConfig {
            operation_search_paths: vec![PathBuf::from("./graphql")],
            schema_search_paths: vec![PathBuf::from("./schema.graphqls")],
        },
        options: OutputOptions::default(),
        output: OutputConfig {
            operations: OperationsLocation::Relative { subpath: None },
            schema_types: SchemaTypesConfig {
                module_type: ModuleTypeConfig {
                    name: Some("AnimalKingdomAPI".to_string()),
                    module_type: "swiftPackageManager".to_string(),
                },
                path: PathBuf::from("AnimalKingdomAPI"),
            },
        },
        schema_namespace: "AnimalKingdomAPI".to_string(),
    }
}

fn animals_request() -> CodegenRequest {
    CodegenRequest::new()
        .add_schema_sdl(Some(Path::new("schema.graphqls")), SCHEMA)
        .add_document(Some(Path::new("graphql/AllAnimals.graphql")), indoc! {"
            query AllAnimals {
              allAnimals {
                ...AnimalDetails
              }
            }
        "})
        .add_document(Some(Path::new("graphql/fragments/AnimalDetails.graphql")), indoc! {"
            fragment AnimalDetails on Animal {
              species
              ... on Dog {
                barkVolume
              }
            }
        "})
}

fn run(request: &CodegenRequest, config: &CodegenConfig) -> Result<Vec<PathBuf>, Vec<CodegenError>> {
    generate(request, config, &CancellationToken::new())
        .map(|output| output.into_files().into_keys().collect())
}

#[test]
fn generates_every_entity_at_its_output_path() {
    let paths = run(&animals_request(), &config()).unwrap();

    assert_eq!(paths, vec![
        PathBuf::from("AnimalKingdomAPI/Schema/Interfaces/Animal.graphql.swift"),
        PathBuf::from("AnimalKingdomAPI/Schema/Objects/Dog.graphql.swift"),
        PathBuf::from("AnimalKingdomAPI/Schema/Objects/Query.graphql.swift"),
        PathBuf::from("AnimalKingdomAPI/Schema/SchemaMetadata.graphql.swift"),
        PathBuf::from("graphql/AllAnimalsQuery.graphql.swift"),
        PathBuf::from("graphql/fragments/AnimalDetails.graphql.swift"),
    ]);
}

#[test]
fn generated_operation_imports_the_schema_module() {
    let output = generate(&animals_request(), &config(), &CancellationToken::new()).unwrap();

    let operation = output.file("graphql/AllAnimalsQuery.graphql.swift").unwrap();
    assert!(operation.starts_with("import ApolloAPI\nimport AnimalKingdomAPI\n\n"));
    assert!(operation.contains("fragments: [AnimalDetails.self]"));
}

#[test]
fn generation_is_deterministic() {
    let cancel = CancellationToken::new();

    let first = generate(&animals_request(), &config(), &cancel).unwrap();
    let second = generate(&animals_request(), &config(), &cancel).unwrap();

    assert_eq!(first, second);
}

#[test]
fn document_order_does_not_change_output() {
    let reversed = CodegenRequest::new()
        .add_schema_sdl(Some(Path::new("schema.graphqls")), SCHEMA)
        .add_document(
            Some(Path::new("graphql/fragments/AnimalDetails.graphql")),
            animals_request().documents()[1].text.as_str(),
        )
        .add_document(
            Some(Path::new("graphql/AllAnimals.graphql")),
            animals_request().documents()[0].text.as_str(),
        );
    let cancel = CancellationToken::new();

    assert_eq!(
        generate(&reversed, &config(), &cancel).unwrap(),
        generate(&animals_request(), &config(), &cancel).unwrap(),
    );
}

#[test]
fn loads_schema_from_introspection_json() {
    let introspection = indoc! {r#"
        {
          "__schema": {
            "queryType": { "name": "Query" },
            "mutationType": null,
            "subscriptionType": null,
            "types": [
              {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "fields": [
                  {
                    "name": "animal",
                    "description": null,
                    "args": [],
                    "type": { "kind": "OBJECT", "name": "Animal", "ofType": null },
                    "isDeprecated": false,
                    "deprecationReason": null
                  }
                ],
                "inputFields": null,
                "interfaces": [],
                "enumValues": null,
                "possibleTypes": null
              },
              {
                "kind": "OBJECT",
                "name": "Animal",
                "description": null,
                "fields": [
                  {
                    "name": "species",
                    "description": null,
                    "args": [],
                    "type": {
                      "kind": "NON_NULL",
                      "name": null,
                      "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
                    },
                    "isDeprecated": false,
                    "deprecationReason": null
                  }
                ],
                "inputFields": null,
                "interfaces": [],
                "enumValues": null,
                "possibleTypes": null
              }
            ],
            "directives": []
          }
        }
    "#};
    let request = CodegenRequest::new()
        .add_introspection_json(Some(Path::new("schema.json")), introspection)
        .add_document(
            Some(Path::new("graphql/Animal.graphql")),
            "query Animal { animal { species } }",
        );

    let paths = run(&request, &config()).unwrap();

    assert!(paths.contains(&PathBuf::from("graphql/AnimalQuery.graphql.swift")));
    assert!(paths.contains(&PathBuf::from(
        "AnimalKingdomAPI/Schema/Objects/Animal.graphql.swift",
    )));
}

#[test]
fn schema_error_stops_the_run() {
    let request = CodegenRequest::new()
        .add_schema_sdl(Some(Path::new("schema.graphqls")), SCHEMA)
        .add_schema_sdl(Some(Path::new("extra.graphqls")), "type Dog { name: String }")
        .add_document(None, "query Broken { nope }");

    let errors = run(&request, &config()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), CodegenErrorKind::SchemaError);
    assert!(matches!(
        &errors[0],
        CodegenError::Schema(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
            if type_name == "Dog",
    ));
    assert!(errors[0].location().is_some());
}

#[test]
fn validation_errors_are_collected_across_documents() {
    let request = CodegenRequest::new()
        .add_schema_sdl(None, SCHEMA)
        .add_document(Some(Path::new("graphql/A.graphql")), "query A { allAnimals { name } }")
        .add_document(Some(Path::new("graphql/B.graphql")), "query B { animal(id: 1) { age } }");

    let errors = run(&request, &config()).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|err| err.kind() == CodegenErrorKind::ValidationError));
    assert!(errors.iter().all(|err| matches!(
        err,
        CodegenError::Document(DocumentBuildError::UndefinedField { .. }),
    )));
    let mut files = errors.iter()
        .filter_map(|err| err.location())
        .filter_map(|location| location.file().map(Path::to_path_buf))
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(files, vec![
        PathBuf::from("graphql/A.graphql"),
        PathBuf::from("graphql/B.graphql"),
    ]);
}

#[test]
fn merge_conflicts_are_validation_errors() {
    let request = CodegenRequest::new()
        .add_schema_sdl(None, SCHEMA)
        .add_document(
            Some(Path::new("graphql/A.graphql")),
            "query A { animal(id: 1) { species } animal(id: 2) { species } }",
        );

    let errors = run(&request, &config()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), CodegenErrorKind::ValidationError);
    assert!(matches!(&errors[0], CodegenError::Ir(IrBuildError::MergeConflict { .. })));
}

#[test]
fn merge_conflicts_are_reported_with_document_errors() {
    let request = CodegenRequest::new()
        .add_schema_sdl(None, SCHEMA)
        .add_document(Some(Path::new("graphql/A.graphql")), "query A { allAnimals { name } }")
        .add_document(
            Some(Path::new("graphql/B.graphql")),
            "query B { animal(id: 1) { species } animal(id: 2) { species } }",
        );

    let errors = run(&request, &config()).unwrap_err();

    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert!(errors.iter().all(|err| err.kind() == CodegenErrorKind::ValidationError));
    assert!(matches!(
        &errors[0],
        CodegenError::Document(DocumentBuildError::UndefinedField { .. }),
    ));
    assert!(matches!(&errors[1], CodegenError::Ir(IrBuildError::MergeConflict { .. })));
}

#[test]
fn invalid_configuration_is_reported_before_compiling() {
    let mut config = config();
    config.schema_namespace = "Schema".to_string();

    let errors = run(&animals_request(), &config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), CodegenErrorKind::RenderError);
    assert!(matches!(
        &errors[0],
        CodegenError::Config(ConfigError::ReservedSchemaNamespace { .. }),
    ));
}

#[test]
fn unknown_module_type_is_a_render_error() {
    let mut config = config();
    config.output.schema_types.module_type.module_type = "carthage".to_string();

    let errors = run(&animals_request(), &config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), CodegenErrorKind::RenderError);
    assert!(errors[0].location().is_none());
}

#[test]
fn entities_sharing_an_output_path_are_a_render_error() {
    let request = CodegenRequest::new()
        .add_schema_sdl(None, SCHEMA)
        .add_document(
            Some(Path::new("graphql/Animals.graphql")),
            indoc! {"
                query AllAnimals { allAnimals { species } }
                query AllAnimalsQuery { allAnimals { species } }
            "},
        );

    let errors = run(&request, &config()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        CodegenError::Render(RenderError::DuplicateOutputPath {
            entity_name1,
            entity_name2,
            path,
        }) if entity_name1 == "AllAnimals"
            && entity_name2 == "AllAnimalsQuery"
            && path == Path::new("graphql/AllAnimalsQuery.graphql.swift"),
    ));
    assert_eq!(errors[0].entity_name(), Some("AllAnimalsQuery"));
}

#[test]
fn cancelled_run_produces_no_output() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = generate(&animals_request(), &config(), &cancel);

    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], CodegenError::Cancelled));
    assert_eq!(errors[0].kind(), CodegenErrorKind::Cancelled);
}
