use crate::operation::CompilationResult;
use crate::operation::DocumentBuildError;
use crate::operation::DocumentSetBuilder;
use crate::operation::InclusionCondition;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::path::Path;

fn animal_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { allAnimals: [Animal!]! animal(id: ID!): Animal search(filter: AnimalFilter): [SearchResult!] }\n",
            "type Mutation { renameAnimal(id: ID!, name: String!): Animal }\n",
            "input AnimalFilter { species: String size: Size }\n",
            "enum Size { SMALL LARGE }\n",
            "interface Animal { id: ID! species: String! }\n",
            "interface Pet { name: String }\n",
            "type Dog implements Animal & Pet { id: ID! species: String! name: String barkVolume: Int }\n",
            "type Cat implements Animal & Pet { id: ID! species: String! name: String }\n",
            "type Bird implements Animal { id: ID! species: String! wingspan: Float }\n",
            "union SearchResult = Dog | Bird\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

fn compile<'schema>(
    schema: &'schema Schema,
    documents: &[&str],
) -> Result<CompilationResult<'schema>, Vec<DocumentBuildError>> {
    let mut builder = DocumentSetBuilder::new(schema);
    for (idx, document) in documents.iter().enumerate() {
        let file_path = format!("doc{idx}.graphql");
        builder = builder.add_str(Some(Path::new(&file_path)), *document);
    }
    builder.build()
}

mod valid_documents {
    use super::*;

    #[test]
    fn compiles_operations_and_fragments() {
        let schema = animal_schema();
        let result = compile(&schema, &[concat!(
            "query AllAnimals { allAnimals { ...AnimalDetails } }\n",
            "fragment AnimalDetails on Animal { id species }\n",
        )]).unwrap();

        assert_eq!(result.operations().keys().collect::<Vec<_>>(), vec!["AllAnimals"]);
        assert_eq!(
            result.fragments().fragments().keys().collect::<Vec<_>>(),
            vec!["AnimalDetails"],
        );

        let operation = result.operation("AllAnimals").unwrap();
        assert_eq!(operation.kind(), OperationKind::Query);
        assert_eq!(operation.selection_set().parent_type().name(), "Query");

        let all_animals = operation.selection_set().selections()[0]
            .as_field()
            .unwrap();
        assert_eq!(all_animals.response_key(), "allAnimals");
        let nested = all_animals.selection_set().unwrap();
        assert_eq!(nested.parent_type().name(), "Animal");
        assert!(matches!(
            &nested.selections()[0],
            Selection::FragmentSpread(spread) if spread.fragment_name() == "AnimalDetails",
        ));

        let fragment = result.fragment("AnimalDetails").unwrap();
        assert_eq!(fragment.type_condition().name(), "Animal");
        assert_eq!(fragment.selection_set().selections().len(), 2);
    }

    #[test]
    fn document_order_does_not_affect_the_result() {
        let schema = animal_schema();
        let operation_doc = "query AllAnimals { allAnimals { ...AnimalDetails } }";
        let fragment_doc = "fragment AnimalDetails on Animal { id species }";

        let mut builder1 = DocumentSetBuilder::new(&schema);
        builder1 = builder1
            .add_str(Some(Path::new("op.graphql")), operation_doc)
            .add_str(Some(Path::new("frag.graphql")), fragment_doc);

        let mut builder2 = DocumentSetBuilder::new(&schema);
        builder2 = builder2
            .add_str(Some(Path::new("frag.graphql")), fragment_doc)
            .add_str(Some(Path::new("op.graphql")), operation_doc);

        assert_eq!(builder1.build().unwrap(), builder2.build().unwrap());
    }

    #[test]
    fn operations_are_sorted_by_name() {
        let schema = animal_schema();
        let result = compile(&schema, &[
            "query Zebra { allAnimals { id } }",
            "query Aardvark { allAnimals { id } }",
            "mutation Middle { renameAnimal(id: \"1\", name: \"Rex\") { id } }",
        ]).unwrap();

        assert_eq!(
            result.operations().keys().collect::<Vec<_>>(),
            vec!["Aardvark", "Middle", "Zebra"],
        );
        assert_eq!(
            result.operation("Middle").map(|op| op.kind()),
            Some(OperationKind::Mutation),
        );
    }

    #[test]
    fn narrowing_to_implemented_interface_is_valid() {
        let schema = animal_schema();
        let result = compile(&schema, &[
            "fragment DogFragment on Dog { ... on Pet { name } }",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn narrowing_between_overlapping_abstract_types_is_valid() {
        let schema = animal_schema();
        let result = compile(&schema, &[
            "fragment PetFragment on Pet { ... on Animal { species } }",
            "fragment SearchFragment on SearchResult { ... on Pet { name } }",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn literal_inclusion_conditions_are_resolved() {
        let schema = animal_schema();
        let result = compile(&schema, &[concat!(
            "query Q {\n",
            "  allAnimals {\n",
            "    id @include(if: true)\n",
            "    species @include(if: false)\n",
            "    ... on Dog @skip(if: true) { name }\n",
            "  }\n",
            "}\n",
        )]).unwrap();

        let all_animals = result.operation("Q").unwrap()
            .selection_set()
            .selections()[0]
            .as_field()
            .unwrap();
        let selections = all_animals.selection_set().unwrap().selections();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].as_field().map(|f| f.name()), Some("id"));
        assert!(selections[0].inclusion_conditions().is_empty());
    }

    #[test]
    fn variable_inclusion_conditions_are_recorded() {
        let schema = animal_schema();
        let result = compile(&schema, &[concat!(
            "query Q($a: Boolean!, $b: Boolean!) {\n",
            "  allAnimals {\n",
            "    id @skip(if: $b) @include(if: $a)\n",
            "  }\n",
            "}\n",
        )]).unwrap();

        let all_animals = result.operation("Q").unwrap()
            .selection_set()
            .selections()[0]
            .as_field()
            .unwrap();
        let id_selection = &all_animals.selection_set().unwrap().selections()[0];
        assert_eq!(id_selection.inclusion_conditions(), &[
            InclusionCondition::include("a"),
            InclusionCondition::skip("b"),
        ]);
    }

    #[test]
    fn referenced_types_include_possible_and_input_types() {
        let schema = animal_schema();
        let result = compile(&schema, &[concat!(
            "query Search($filter: AnimalFilter) {\n",
            "  search(filter: $filter) { __typename }\n",
            "}\n",
        )]).unwrap();

        assert_eq!(
            result.referenced_types().keys().collect::<Vec<_>>(),
            vec!["Animal", "AnimalFilter", "Bird", "Cat", "Dog", "Pet", "Query", "SearchResult", "Size"],
        );
    }

    #[test]
    fn variables_keep_declaration_order_and_defaults() {
        let schema = animal_schema();
        let result = compile(&schema, &[
            "query Q($id: ID!, $filter: AnimalFilter = {species: \"dog\"}) { animal(id: $id) { id } search(filter: $filter) { __typename } }",
        ]).unwrap();

        let operation = result.operation("Q").unwrap();
        assert_eq!(operation.variables().keys().collect::<Vec<_>>(), vec!["id", "filter"]);
        assert_eq!(
            operation.variables()["id"].type_annotation().to_string(),
            "ID!",
        );
        assert!(operation.variables()["filter"].default_value().is_some());
    }
}

mod invalid_documents {
    use super::*;

    #[test]
    fn parse_errors_are_reported_per_file() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { id } }",
            "query Broken { allAnimals { ",
        ]).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            DocumentBuildError::ParseError { file: Some(file), .. }
                if file == Path::new("doc1.graphql"),
        ));
    }

    #[test]
    fn unknown_field() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { id wingspan } }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            DocumentBuildError::UndefinedField { field_name, parent_type_name, location }
                if field_name == "wingspan"
                    && parent_type_name == "Animal"
                    && location.line() == Some(1),
        ));
    }

    #[test]
    fn unknown_fragment() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { ...Missing } }",
        ]).unwrap_err();

        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::UndefinedFragment { fragment_name, .. }]
                if fragment_name == "Missing",
        ));
    }

    #[test]
    fn fragment_cycle() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "fragment A on Animal { id ...B }",
            "fragment B on Animal { species ...A }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            DocumentBuildError::FragmentCycle { cycle_path, .. }
                if cycle_path == &vec!["A".to_string(), "B".to_string(), "A".to_string()],
        ));
    }

    #[test]
    fn unrelated_object_type_condition() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "fragment DogFragment on Dog { ... on Bird { wingspan } }",
        ]).unwrap_err();

        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::InvalidTypeCondition { parent_type_name, type_condition, .. }]
                if parent_type_name == "Dog" && type_condition == "Bird",
        ));
    }

    #[test]
    fn unrelated_fragment_spread() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "fragment BirdFragment on Bird { wingspan }",
            "fragment PetFragment on Pet { ...BirdFragment }",
        ]).unwrap_err();

        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::InvalidTypeCondition { parent_type_name, type_condition, .. }]
                if parent_type_name == "Pet" && type_condition == "Bird",
        ));
    }

    #[test]
    fn type_condition_on_leaf_or_missing_type() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "fragment F1 on Size { __typename }",
            "fragment F2 on Fish { __typename }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::NonCompositeTypeCondition { type_name, .. } if type_name == "Size",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::UndefinedType { type_name, .. } if type_name == "Fish",
        )));
    }

    #[test]
    fn anonymous_operation() {
        let schema = animal_schema();
        let errors = compile(&schema, &["{ allAnimals { id } }"]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::AnonymousOperation { .. }],
        ));
    }

    #[test]
    fn duplicate_names() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { id } } fragment F on Animal { id }",
            "query Q { allAnimals { species } } fragment F on Animal { species }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::DuplicateOperation { operation_name, .. } if operation_name == "Q",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::DuplicateFragment { fragment_name, .. } if fragment_name == "F",
        )));
    }

    #[test]
    fn duplicate_variable() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q($id: ID!, $id: ID) { animal(id: $id) { id } }",
        ]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::DuplicateVariable { variable_name, .. }] if variable_name == "id",
        ));
    }

    #[test]
    fn output_type_variable() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q($animal: Animal) { allAnimals { id } }",
        ]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::InvalidVariableType { variable_name, type_name, .. }]
                if variable_name == "animal" && type_name == "Animal",
        ));
    }

    #[test]
    fn undeclared_variable_used_through_fragment() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { ...F } }",
            "fragment F on Animal { id @include(if: $withId) }",
        ]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::UndefinedVariable { operation_name, variable_name, .. }]
                if operation_name == "Q" && variable_name == "withId",
        ));
    }

    #[test]
    fn sub_selection_rules() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals }",
            "query R { allAnimals { id { value } } }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::MissingSelectionSet { field_name, .. } if field_name == "allAnimals",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::SelectionSetOnLeafField { field_name, type_name, .. }
                if field_name == "id" && type_name == "ID",
        )));
    }

    #[test]
    fn unknown_and_duplicate_arguments() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { animal(id: \"1\", id: \"2\", size: 3) { id } }",
        ]).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::DuplicateFieldArgument { argument_name, .. } if argument_name == "id",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            DocumentBuildError::UndefinedArgument { argument_name, .. } if argument_name == "size",
        )));
    }

    #[test]
    fn non_boolean_inclusion_condition() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q { allAnimals { id @include(if: \"yes\") } }",
        ]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::InvalidInclusionConditionArgument { directive_name, .. }]
                if directive_name == "include",
        ));
    }

    #[test]
    fn subscription_without_root_type() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "subscription S { allAnimals { id } }",
        ]).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [DocumentBuildError::NoRootOperationType {
                operation_kind: OperationKind::Subscription,
                ..
            }],
        ));
    }

    #[test]
    fn errors_across_documents_are_accumulated() {
        let schema = animal_schema();
        let errors = compile(&schema, &[
            "query Q1 { allAnimals { nope } }",
            "query Q2 { allAnimals { ...Missing } }",
            "fragment F on Dog { ... on Bird { id } }",
        ]).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

#[test]
fn load_files_reads_documents_from_disk() {
    let schema = animal_schema();
    let dir = tempfile::tempdir().unwrap();
    let op_path = dir.path().join("query.graphql");
    let frag_path = dir.path().join("fragment.graphql");
    std::fs::write(&op_path, "query Q { allAnimals { ...F } }").unwrap();
    std::fs::write(&frag_path, "fragment F on Animal { id }").unwrap();

    let result = DocumentSetBuilder::new(&schema)
        .load_files([&op_path, &frag_path])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        result.operation("Q").unwrap().def_location().file(),
        Some(op_path.as_path()),
    );
    assert!(result.fragment("F").is_some());
}

#[test]
fn partial_build_keeps_what_validated() {
    let schema = animal_schema();
    let (result, errors) = DocumentSetBuilder::new(&schema)
        .add_str(None, "query Bad { allAnimals { name } }")
        .add_str(None, "fragment Broken on Animal { nope }")
        .add_str(None, "query UsesBroken { allAnimals { ...Broken } }")
        .add_str(None, "fragment Good on Animal { id }")
        .add_str(None, "query UsesGood { allAnimals { ...Good species } }")
        .build_partial();

    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert!(errors.iter().all(|err| matches!(err, DocumentBuildError::UndefinedField { .. })));
    assert_eq!(result.operations().keys().collect::<Vec<_>>(), vec!["UsesGood"]);
    assert_eq!(result.fragments().fragments().keys().collect::<Vec<_>>(), vec!["Good"]);
}

#[test]
fn partial_build_drops_operations_with_undeclared_variables() {
    let schema = animal_schema();
    let (result, errors) = DocumentSetBuilder::new(&schema)
        .add_str(None, "query Q { allAnimals { id @include(if: $withId) } }")
        .add_str(None, "query R { allAnimals { id } }")
        .build_partial();

    assert!(matches!(
        errors.as_slice(),
        [DocumentBuildError::UndefinedVariable { operation_name, .. }] if operation_name == "Q",
    ));
    assert_eq!(result.operations().keys().collect::<Vec<_>>(), vec!["R"]);
}

#[test]
fn load_file_reports_missing_files() {
    let schema = animal_schema();
    let result = DocumentSetBuilder::new(&schema)
        .load_file("/definitely/not/a/real/file.graphql");
    assert!(matches!(
        result,
        Err(DocumentBuildError::DocumentFileReadError(_)),
    ));
}
