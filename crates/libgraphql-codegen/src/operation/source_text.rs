use crate::ast;

/// Print a fragment definition as GraphQL source text.
///
/// With `add_typename` set, every nested composite selection set (and the
/// fragment's own root selection set) selects `__typename`, mirroring the
/// implicit `__typename` field in generated selection sets.
pub fn fragment_source(
    definition: &ast::operation::FragmentDefinition,
    add_typename: bool,
) -> String {
    let mut definition = definition.to_owned();
    if add_typename {
        add_typename_fields(&mut definition.selection_set, /* is_root = */ false);
    }
    print_definition(ast::operation::Definition::Fragment(definition))
}

/// Print an operation definition as GraphQL source text.
///
/// With `add_typename` set, every nested composite selection set selects
/// `__typename`. The operation's root selection set is left untouched.
pub fn operation_source(
    definition: &ast::operation::OperationDefinition,
    add_typename: bool,
) -> String {
    let mut definition = definition.to_owned();
    if add_typename {
        let root_selection_set = match &mut definition {
            ast::operation::OperationDefinition::SelectionSet(selection_set) =>
                selection_set,
            ast::operation::OperationDefinition::Query(query) =>
                &mut query.selection_set,
            ast::operation::OperationDefinition::Mutation(mutation) =>
                &mut mutation.selection_set,
            ast::operation::OperationDefinition::Subscription(subscription) =>
                &mut subscription.selection_set,
        };
        add_typename_fields(root_selection_set, /* is_root = */ true);
    }
    print_definition(ast::operation::Definition::Operation(definition))
}

fn print_definition(definition: ast::operation::Definition) -> String {
    let document = ast::operation::Document {
        definitions: vec![definition],
    };
    document.to_string().trim_end().to_string()
}

fn add_typename_fields(
    selection_set: &mut ast::operation::SelectionSet,
    is_root: bool,
) {
    for selection in selection_set.items.iter_mut() {
        match selection {
            ast::operation::Selection::Field(field) => {
                if !field.selection_set.items.is_empty() {
                    add_typename_fields(&mut field.selection_set, false);
                }
            },
            ast::operation::Selection::InlineFragment(inline) =>
                add_typename_fields(&mut inline.selection_set, true),
            ast::operation::Selection::FragmentSpread(_) => (),
        }
    }

    if is_root {
        return;
    }

    let has_typename = selection_set.items.iter().any(|selection| matches!(
        selection,
        ast::operation::Selection::Field(field)
            if field.alias.is_none() && field.name == "__typename"
    ));
    if !has_typename {
        let position = selection_set.span.1;
        selection_set.items.push(ast::operation::Selection::Field(
            ast::operation::Field {
                position,
                alias: None,
                name: "__typename".to_string(),
                arguments: vec![],
                directives: vec![],
                selection_set: ast::operation::SelectionSet {
                    span: (position, position),
                    items: vec![],
                },
            },
        ));
    }
}
