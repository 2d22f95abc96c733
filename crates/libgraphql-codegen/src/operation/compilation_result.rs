use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::Operation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Everything validated out of a document set: the operations, the
/// fragments, and every schema type those reference.
///
/// This is the only input the [`IrBuilder`](crate::ir::IrBuilder) needs
/// besides the [`Schema`] itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilationResult<'schema> {
    pub(super) fragments: FragmentRegistry<'schema>,
    pub(super) operations: IndexMap<String, Operation<'schema>>,
    pub(super) referenced_types: BTreeMap<String, &'schema GraphQLType>,
    pub(super) schema: &'schema Schema,
}
impl<'schema> CompilationResult<'schema> {
    pub(super) fn new(
        schema: &'schema Schema,
        operations: IndexMap<String, Operation<'schema>>,
        fragments: FragmentRegistry<'schema>,
    ) -> Self {
        let referenced_types = collect_referenced_types(
            schema,
            &operations,
            &fragments,
        );
        Self {
            fragments,
            operations,
            referenced_types,
            schema,
        }
    }

    pub fn fragment(&self, fragment_name: &str) -> Option<&Fragment<'schema>> {
        self.fragments.get(fragment_name)
    }

    pub fn fragments(&self) -> &FragmentRegistry<'schema> {
        &self.fragments
    }

    pub fn operation(&self, operation_name: &str) -> Option<&Operation<'schema>> {
        self.operations.get(operation_name)
    }

    /// All operations, sorted by name.
    pub fn operations(&self) -> &IndexMap<String, Operation<'schema>> {
        &self.operations
    }

    /// Every non-built-in schema type reachable from the operations and
    /// fragments: selected types, type conditions, argument and variable
    /// types, the possible types of referenced abstract types, and the field
    /// types of referenced input objects.
    pub fn referenced_types(&self) -> &BTreeMap<String, &'schema GraphQLType> {
        &self.referenced_types
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }
}

fn collect_referenced_types<'schema>(
    schema: &'schema Schema,
    operations: &IndexMap<String, Operation<'schema>>,
    fragments: &FragmentRegistry<'schema>,
) -> BTreeMap<String, &'schema GraphQLType> {
    let mut pending = vec![];
    for operation in operations.values() {
        for variable in operation.variables.values() {
            pending.push(variable.type_annotation().innermost_type_name().to_string());
        }
        collect_from_selection_set(&operation.selection_set, &mut pending);
    }
    for fragment in fragments.fragments.values() {
        collect_from_selection_set(&fragment.selection_set, &mut pending);
    }

    let mut found = BTreeMap::new();
    while let Some(type_name) = pending.pop() {
        if found.contains_key(&type_name) {
            continue;
        }
        let Some(graphql_type) = schema.type_named(type_name.as_str()) else {
            continue;
        };
        if graphql_type.type_kind().is_builtin_scalar() {
            continue;
        }

        match graphql_type {
            GraphQLType::Interface(iface) => {
                pending.extend(iface.interface_names().iter().map(|name| name.to_string()));
                pending.extend(schema.possible_types(iface.name()).iter().map(|name| name.to_string()));
            },
            GraphQLType::Object(obj) =>
                pending.extend(obj.interface_names().iter().map(|name| name.to_string())),
            GraphQLType::Union(union_type) =>
                pending.extend(union_type.member_type_names().iter().map(|name| name.to_string())),
            GraphQLType::InputObject(input_type) => pending.extend(
                input_type.fields().values().map(|field|
                    field.type_annotation().innermost_type_name().to_string()
                ),
            ),
            _ => (),
        }

        found.insert(type_name, graphql_type);
    }

    found
}

fn collect_from_selection_set(
    selection_set: &SelectionSet<'_>,
    pending: &mut Vec<String>,
) {
    pending.push(selection_set.parent_type.name().to_string());
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                let schema_field = field.field();
                pending.push(
                    schema_field.type_annotation().innermost_type_name().to_string(),
                );
                for arg_name in field.arguments().keys() {
                    if let Some(param) = schema_field.parameters().get(arg_name) {
                        pending.push(
                            param.type_annotation().innermost_type_name().to_string(),
                        );
                    }
                }
                if let Some(nested_set) = field.selection_set() {
                    collect_from_selection_set(nested_set, pending);
                }
            },
            Selection::InlineFragment(inline) =>
                collect_from_selection_set(inline.selection_set(), pending),
            Selection::FragmentSpread(_) => (),
        }
    }
}
