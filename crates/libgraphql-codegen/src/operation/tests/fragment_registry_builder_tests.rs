use crate::ast;
use crate::operation::DocumentBuildError;
use crate::operation::Fragment;
use crate::operation::FragmentBuilder;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::selection_set_builder::FragmentTypeConditions;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

fn setup_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { user: User post: Post }\n",
            "type User { id: ID! name: String! posts: [Post!]! }\n",
            "type Post { id: ID! title: String! author: User! }\n",
        ))
        .unwrap()
        .build()
        .unwrap()
}

/// Fragments named in `external_fragment_names` may be spread without being
/// defined in `document`.
fn build_fragments<'schema>(
    schema: &'schema Schema,
    document: &str,
    external_fragment_names: &[&str],
) -> Vec<Fragment<'schema>> {
    let ast_doc = ast::operation::parse(document).unwrap();
    let frag_defs = ast_doc.definitions.iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Fragment(frag_def) => Some(frag_def),
            ast::operation::Definition::Operation(_) => None,
        })
        .collect::<Vec<_>>();

    let mut type_conditions = frag_defs.iter()
        .map(|frag_def| {
            let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
            (frag_def.name.to_string(), schema.type_named(type_name))
        })
        .collect::<FragmentTypeConditions>();
    for fragment_name in external_fragment_names {
        type_conditions.insert(fragment_name.to_string(), None);
    }

    frag_defs.iter()
        .map(|frag_def| FragmentBuilder::from_ast(
            schema,
            &type_conditions,
            frag_def,
            None,
        ).unwrap())
        .collect()
}

fn registry_errors(
    schema: &Schema,
    document: &str,
    external_fragment_names: &[&str],
) -> Vec<DocumentBuildError> {
    let mut builder = FragmentRegistryBuilder::new();
    for fragment in build_fragments(schema, document, external_fragment_names) {
        builder.add_fragment(fragment).unwrap();
    }
    builder.build().unwrap_err()
}

#[test]
fn empty_registry_creation() {
    let registry = FragmentRegistryBuilder::new().build().unwrap();
    assert!(registry.fragments().is_empty());
}

#[test]
fn multiple_fragments_addition() {
    let schema = setup_schema();
    let mut builder = FragmentRegistryBuilder::new();
    for fragment in build_fragments(
        &schema,
        "fragment UserFields on User { id name } fragment PostFields on Post { id title }",
        &[],
    ) {
        builder.add_fragment(fragment).unwrap();
    }

    let registry = builder.build().unwrap();
    assert_eq!(
        registry.fragments().keys().collect::<Vec<_>>(),
        vec!["PostFields", "UserFields"],
    );
}

#[test]
fn duplicate_fragment_detection() {
    let schema = setup_schema();
    let mut fragments = build_fragments(
        &schema,
        "fragment UserFields on User { id name } fragment UserFields on User { id }",
        &[],
    );
    let second = fragments.pop().unwrap();
    let first = fragments.pop().unwrap();

    let mut builder = FragmentRegistryBuilder::new();
    builder.add_fragment(first).unwrap();
    assert!(matches!(
        builder.add_fragment(second),
        Err(DocumentBuildError::DuplicateFragment { fragment_name, .. })
            if fragment_name == "UserFields",
    ));
}

#[test]
fn simple_self_referencing_cycle() {
    let schema = setup_schema();
    let errors = registry_errors(
        &schema,
        "fragment UserFields on User { id ...UserFields }",
        &[],
    );

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        DocumentBuildError::FragmentCycle { cycle_path, location: Some(_) }
            if cycle_path == &vec!["UserFields".to_string(), "UserFields".to_string()],
    ));
}

#[test]
fn phase_shifted_cycles_are_reported_once() {
    let schema = setup_schema();
    let errors = registry_errors(&schema, concat!(
        "fragment C on User { posts { ...A } }\n",
        "fragment A on Post { author { ...B } }\n",
        "fragment B on User { posts { ...A } name ...C }\n",
    ), &[]);

    let mut cycles = errors.iter()
        .filter_map(|err| match err {
            DocumentBuildError::FragmentCycle { cycle_path, .. } => Some(cycle_path.join(",")),
            _ => None,
        })
        .collect::<Vec<_>>();
    cycles.sort();

    assert_eq!(cycles, vec!["A,B,A", "A,B,C,A"]);
}

#[test]
fn cycles_reached_through_non_cyclic_fragments() {
    let schema = setup_schema();
    let errors = registry_errors(&schema, concat!(
        "fragment Entry on User { ...Loop }\n",
        "fragment Loop on User { posts { author { ...Loop } } }\n",
    ), &[]);

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        DocumentBuildError::FragmentCycle { cycle_path, .. }
            if cycle_path == &vec!["Loop".to_string(), "Loop".to_string()],
    ));
}

#[test]
fn undefined_fragment_reference() {
    let schema = setup_schema();
    let errors = registry_errors(
        &schema,
        "fragment UserFields on User { id ...Missing }",
        &["Missing"],
    );

    assert!(matches!(
        errors.as_slice(),
        [DocumentBuildError::UndefinedFragment { fragment_name, .. }]
            if fragment_name == "Missing",
    ));
}

#[test]
fn partial_registry_keeps_only_sound_fragments() {
    let schema = setup_schema();
    let mut builder = FragmentRegistryBuilder::new();
    for fragment in build_fragments(&schema, concat!(
        "fragment Entry on User { ...Loop }\n",
        "fragment Loop on User { posts { author { ...Loop } } }\n",
        "fragment Dangling on Post { ...Missing }\n",
        "fragment PostFields on Post { id title }\n",
        "fragment UserFields on User { name posts { ...PostFields } }\n",
    ), &["Missing"]) {
        builder.add_fragment(fragment).unwrap();
    }

    let (registry, errors) = builder.build_partial();

    assert_eq!(errors.len(), 2, "{errors:#?}");
    assert_eq!(
        registry.fragments().keys().collect::<Vec<_>>(),
        vec!["PostFields", "UserFields"],
    );
}
