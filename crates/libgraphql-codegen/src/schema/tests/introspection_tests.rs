use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use indoc::indoc;
use std::path::Path;

const ANIMAL_INTROSPECTION: &str = indoc! {r#"
    {
      "data": {
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
                  "name": "allAnimals",
                  "description": null,
                  "args": [
                    {
                      "name": "first",
                      "description": null,
                      "type": { "kind": "SCALAR", "name": "Int", "ofType": null },
                      "defaultValue": "10"
                    }
                  ],
                  "type": {
                    "kind": "LIST",
                    "name": null,
                    "ofType": {
                      "kind": "NON_NULL",
                      "name": null,
                      "ofType": { "kind": "INTERFACE", "name": "Animal", "ofType": null }
                    }
                  },
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
              "kind": "INTERFACE",
              "name": "Animal",
              "description": "A living thing",
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
                  "isDeprecated": true,
                  "deprecationReason": "Use taxonomy"
                }
              ],
              "inputFields": null,
              "interfaces": [],
              "enumValues": null,
              "possibleTypes": [{ "kind": "OBJECT", "name": "Dog" }]
            },
            {
              "kind": "OBJECT",
              "name": "Dog",
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
              "interfaces": [{ "kind": "INTERFACE", "name": "Animal" }],
              "enumValues": null,
              "possibleTypes": null
            },
            {
              "kind": "SCALAR",
              "name": "String",
              "description": null,
              "fields": null,
              "inputFields": null,
              "interfaces": null,
              "enumValues": null,
              "possibleTypes": null
            },
            {
              "kind": "OBJECT",
              "name": "__Schema",
              "description": null,
              "fields": [],
              "inputFields": null,
              "interfaces": [],
              "enumValues": null,
              "possibleTypes": null
            }
          ],
          "directives": [
            {
              "name": "include",
              "description": null,
              "locations": ["FIELD"],
              "args": []
            }
          ]
        }
      }
    }
"#};

#[test]
fn loads_types_from_introspection_response() {
    let schema = SchemaBuilder::new()
        .load_introspection_json(Some(Path::new("schema.json")), ANIMAL_INTROSPECTION)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(schema.query_type_name(), "Query");
    assert!(schema.type_named("__Schema").is_none());
    assert!(schema.is_subtype("Dog", "Animal"));

    let animal = schema.type_named("Animal")
        .and_then(|t| t.as_interface())
        .expect("Animal is an interface");
    assert_eq!(animal.description(), Some("A living thing"));
    assert_eq!(
        animal.def_location(),
        &loc::SourceLocation::Introspection(Some("schema.json".into())),
    );
    let species = animal.fields().get("species").expect("species is defined");
    assert_eq!(species.deprecation_state().reason(), Some("Use taxonomy"));

    let all_animals = schema.field_on("Query", "allAnimals").expect("field exists");
    assert_eq!(all_animals.type_annotation().to_string(), "[Animal!]");
    assert_eq!(
        all_animals.parameters().get("first")
            .and_then(|param| param.default_value())
            .map(|value| value.to_string()),
        Some("10".to_string()),
    );
}

#[test]
fn loads_bare_data_member() {
    let data_only = r#"{
        "__schema": {
            "queryType": { "name": "Query" },
            "types": [
                {
                    "kind": "OBJECT",
                    "name": "Query",
                    "fields": [
                        {
                            "name": "ok",
                            "args": [],
                            "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null }
                        }
                    ],
                    "interfaces": []
                }
            ],
            "directives": []
        }
    }"#;

    let schema = SchemaBuilder::new()
        .load_introspection_json(None, data_only)
        .unwrap()
        .build()
        .unwrap();

    assert!(matches!(
        schema.field_on("Query", "ok").map(|f| f.type_annotation().innermost_type_name()),
        Some("Boolean"),
    ));
    assert!(matches!(schema.type_named("Boolean"), Some(GraphQLType::Bool)));
}

#[test]
fn malformed_introspection_is_an_error() {
    let result = SchemaBuilder::new()
        .load_introspection_json(None, "{\"data\": 42}");

    assert!(matches!(
        result.unwrap_err(),
        SchemaBuildError::IntrospectionParseError { file: None, .. },
    ));
}
