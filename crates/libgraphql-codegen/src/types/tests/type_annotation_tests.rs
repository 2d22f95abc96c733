use crate::loc::SourceLocation;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;

fn zoo_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query {\n",
            "  tags: [String!]\n",
            "  matrix: [[Int]!]!\n",
            "  dog: Dog!\n",
            "  animal: Animal\n",
            "  pet: Pet\n",
            "}\n",
            "interface Animal { species: String! }\n",
            "type Dog implements Animal { species: String! }\n",
            "type Cat implements Animal { species: String! }\n",
            "union Pet = Dog | Cat\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

fn annotation<'a>(schema: &'a Schema, field_name: &str) -> &'a TypeAnnotation {
    schema.field_on("Query", field_name).unwrap().type_annotation()
}

#[test]
fn nested_lists_keep_nullability_at_every_level() {
    let schema = zoo_schema();
    let matrix = annotation(&schema, "matrix");

    assert_eq!(matrix.to_string(), "[[Int]!]!");
    assert!(!matrix.nullable());
    let row = matrix.list_item().unwrap();
    assert!(!row.nullable());
    let cell = row.list_item().unwrap();
    assert!(cell.nullable());
    assert!(cell.list_item().is_none());
    assert_eq!(matrix.innermost_type_name(), "Int");
}

#[test]
fn innermost_type_resolves_against_schema() {
    let schema = zoo_schema();

    let tags = annotation(&schema, "tags");
    assert!(tags.is_list());
    assert_eq!(tags.innermost_type(&schema).map(|t| t.name()), Some("String"));
}

#[test]
fn equivalence_ignores_location_but_not_nullability() {
    let schema = zoo_schema();
    let dog = annotation(&schema, "dog");

    let same = TypeAnnotation::named("Dog", false, SourceLocation::GraphQLBuiltIn);
    let nullable = TypeAnnotation::named("Dog", true, SourceLocation::GraphQLBuiltIn);
    assert!(dog.is_equivalent_to(&same));
    assert!(!dog.is_equivalent_to(&nullable));
}

#[test]
fn subtyping_follows_interfaces_unions_and_non_null() {
    let schema = zoo_schema();
    let dog = annotation(&schema, "dog");
    let animal = annotation(&schema, "animal");
    let pet = annotation(&schema, "pet");

    assert!(dog.is_subtype_of(&schema, animal));
    assert!(dog.is_subtype_of(&schema, pet));
    assert!(!animal.is_subtype_of(&schema, dog));
    assert!(!annotation(&schema, "tags").is_subtype_of(&schema, animal));
}
