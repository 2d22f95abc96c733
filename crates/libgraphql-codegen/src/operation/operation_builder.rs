use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::loc;
use crate::operation::DocumentBuildError;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::selection_set_builder::FragmentTypeConditions;
use crate::operation::SelectionSetBuilder;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

struct LoadFromAstDetails<'ast> {
    directives: &'ast [ast::operation::Directive],
    name: Option<&'ast String>,
    op_kind: OperationKind,
    pos: &'ast ast::AstPos,
    selection_set: &'ast ast::operation::SelectionSet,
    variables: &'ast [ast::operation::VariableDefinition],
}

pub(crate) struct OperationBuilder;
impl OperationBuilder {
    /// Produce an [`Operation`] from an
    /// [`OperationDefinition`](ast::operation::OperationDefinition).
    pub fn from_ast<'schema>(
        schema: &'schema Schema,
        fragment_type_conditions: &FragmentTypeConditions<'schema>,
        ast: &ast::operation::OperationDefinition,
        file_path: Option<&Path>,
    ) -> Result<Operation<'schema>> {
        let ast_details = match ast {
            ast::operation::OperationDefinition::SelectionSet(selection_set) =>
                LoadFromAstDetails {
                    directives: &[],
                    name: None,
                    op_kind: OperationKind::Query,
                    pos: &selection_set.span.0,
                    selection_set,
                    variables: &[],
                },

            ast::operation::OperationDefinition::Query(ast::operation::Query {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            }) => LoadFromAstDetails {
                directives,
                name: name.as_ref(),
                op_kind: OperationKind::Query,
                pos: position,
                selection_set,
                variables: variable_definitions,
            },

            ast::operation::OperationDefinition::Mutation(ast::operation::Mutation {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            }) => LoadFromAstDetails {
                directives,
                name: name.as_ref(),
                op_kind: OperationKind::Mutation,
                pos: position,
                selection_set,
                variables: variable_definitions,
            },

            ast::operation::OperationDefinition::Subscription(ast::operation::Subscription {
                directives,
                name,
                position,
                selection_set,
                variable_definitions,
            }) => LoadFromAstDetails {
                directives,
                name: name.as_ref(),
                op_kind: OperationKind::Subscription,
                pos: position,
                selection_set,
                variables: variable_definitions,
            },
        };

        let opdef_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            file_path,
            ast_details.pos,
        );

        let name = ast_details.name.ok_or_else(|| vec![
            DocumentBuildError::AnonymousOperation {
                location: opdef_srcloc.to_owned(),
            },
        ])?;

        let op_type = schema.root_operation_type(ast_details.op_kind)
            .ok_or_else(|| vec![DocumentBuildError::NoRootOperationType {
                location: opdef_srcloc.to_owned(),
                operation_kind: ast_details.op_kind,
            }])?;

        let mut errors = vec![];

        let mut variables = IndexMap::<String, Variable>::new();
        for ast_var_def in ast_details.variables {
            let vardef_srcloc = opdef_srcloc.with_ast_position(&ast_var_def.position);
            let var_name = ast_var_def.name.to_string();

            if let Some(existing) = variables.get(var_name.as_str()) {
                errors.push(DocumentBuildError::DuplicateVariable {
                    variable_name: var_name,
                    location1: existing.def_location().to_owned(),
                    location2: vardef_srcloc,
                });
                continue;
            }

            let type_annotation = TypeAnnotation::from_ast_type(
                &vardef_srcloc,
                &ast_var_def.var_type,
            );
            let inner_type_name = type_annotation.innermost_type_name();
            match schema.type_named(inner_type_name) {
                None => {
                    errors.push(DocumentBuildError::UndefinedType {
                        location: vardef_srcloc,
                        type_name: inner_type_name.to_string(),
                    });
                    continue;
                },
                Some(inner_type) if !inner_type.is_input_type() => {
                    errors.push(DocumentBuildError::InvalidVariableType {
                        location: vardef_srcloc,
                        type_name: inner_type_name.to_string(),
                        variable_name: var_name,
                    });
                    continue;
                },
                Some(_) => (),
            }

            variables.insert(var_name.to_owned(), Variable {
                def_location: vardef_srcloc,
                default_value: ast_var_def.default_value.as_ref().map(Value::from_ast),
                name: var_name,
                type_annotation,
            });
        }

        let selection_set = SelectionSetBuilder::new(
            schema,
            fragment_type_conditions,
            file_path,
        ).build_from_ast(op_type, ast_details.selection_set);

        let selection_set = match selection_set {
            Ok(selection_set) => selection_set,
            Err(mut ss_errors) => {
                errors.append(&mut ss_errors);
                return Err(errors);
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Operation {
            directives: DirectiveAnnotationBuilder::from_ast(
                &opdef_srcloc,
                ast_details.directives,
            ),
            def_location: opdef_srcloc,
            definition: ast.clone(),
            kind: ast_details.op_kind,
            name: name.to_string(),
            selection_set,
            variables,
        })
    }
}
