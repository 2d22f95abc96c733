use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::loc;
use crate::operation::inclusion_condition::inclusion_conditions_from_directives;
use crate::operation::DocumentBuildError;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::NamedFragmentRef;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

/// The type condition of every fragment in a document set, by fragment name.
/// `None` marks a fragment whose type condition could not be resolved (that
/// problem is reported where the fragment is defined).
pub(crate) type FragmentTypeConditions<'schema> =
    HashMap<String, Option<&'schema GraphQLType>>;

/// Validates a selection set syntax tree against the [`Schema`] and produces
/// a [`SelectionSet`].
pub(crate) struct SelectionSetBuilder<'schema, 'a> {
    file_path: Option<&'a Path>,
    fragment_type_conditions: &'a FragmentTypeConditions<'schema>,
    schema: &'schema Schema,
}
impl<'schema, 'a> SelectionSetBuilder<'schema, 'a> {
    pub fn new(
        schema: &'schema Schema,
        fragment_type_conditions: &'a FragmentTypeConditions<'schema>,
        file_path: Option<&'a Path>,
    ) -> Self {
        Self {
            file_path,
            fragment_type_conditions,
            schema,
        }
    }

    pub fn build_from_ast(
        &self,
        parent_type: &'schema GraphQLType,
        ast: &ast::operation::SelectionSet,
    ) -> Result<SelectionSet<'schema>> {
        let mut errors = vec![];
        let mut selections = vec![];

        for ast_selection in &ast.items {
            let maybe_selection = match ast_selection {
                ast::operation::Selection::Field(ast_field) =>
                    self.build_field(parent_type, ast_field),

                ast::operation::Selection::FragmentSpread(ast_spread) =>
                    self.build_fragment_spread(parent_type, ast_spread),

                ast::operation::Selection::InlineFragment(ast_inline) =>
                    self.build_inline_fragment(parent_type, ast_inline),
            };

            match maybe_selection {
                Ok(Some(selection)) => selections.push(selection),
                Ok(None) => (),
                Err(mut selection_errors) => errors.append(&mut selection_errors),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SelectionSet {
            parent_type,
            selections,
        })
    }

    /// Returns `Ok(None)` for a valid field that a literal `@include`/`@skip`
    /// condition always excludes.
    fn build_field(
        &self,
        parent_type: &'schema GraphQLType,
        ast_field: &ast::operation::Field,
    ) -> Result<Option<Selection<'schema>>> {
        let field_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_field.position,
        );

        let field = self.schema
            .field_on(parent_type.name(), ast_field.name.as_str())
            .ok_or_else(|| vec![DocumentBuildError::UndefinedField {
                field_name: ast_field.name.to_string(),
                location: field_srcloc.to_owned(),
                parent_type_name: parent_type.name().to_string(),
            }])?;

        let mut errors = vec![];

        let mut arguments = IndexMap::new();
        for (arg_name, ast_arg_value) in &ast_field.arguments {
            if !field.parameters().contains_key(arg_name) {
                errors.push(DocumentBuildError::UndefinedArgument {
                    argument_name: arg_name.to_string(),
                    field_name: field.name().to_string(),
                    location: field_srcloc.to_owned(),
                });
                continue;
            }

            let value = Value::from_ast(ast_arg_value);
            if arguments.insert(arg_name.to_string(), value).is_some() {
                errors.push(DocumentBuildError::DuplicateFieldArgument {
                    argument_name: arg_name.to_string(),
                    field_name: field.name().to_string(),
                    location: field_srcloc.to_owned(),
                });
            }
        }

        let directives = DirectiveAnnotationBuilder::from_ast(
            &field_srcloc,
            &ast_field.directives,
        );
        let inclusion_conditions =
            inclusion_conditions_from_directives(&directives)
                .map_err(|err| vec![err])?;

        let field_type_name = field.type_annotation().innermost_type_name();
        let selection_set = match self.schema.type_named(field_type_name) {
            None => {
                errors.push(DocumentBuildError::UndefinedType {
                    location: field_srcloc.to_owned(),
                    type_name: field_type_name.to_string(),
                });
                None
            },

            Some(field_type) if field_type.is_composite() => {
                if ast_field.selection_set.items.is_empty() {
                    errors.push(DocumentBuildError::MissingSelectionSet {
                        field_name: field.name().to_string(),
                        location: field_srcloc.to_owned(),
                        type_name: field_type_name.to_string(),
                    });
                    None
                } else {
                    match self.build_from_ast(field_type, &ast_field.selection_set) {
                        Ok(selection_set) => Some(selection_set),
                        Err(mut ss_errors) => {
                            errors.append(&mut ss_errors);
                            None
                        },
                    }
                }
            },

            Some(_) => {
                if !ast_field.selection_set.items.is_empty() {
                    errors.push(DocumentBuildError::SelectionSetOnLeafField {
                        field_name: field.name().to_string(),
                        location: field_srcloc.to_owned(),
                        type_name: field_type_name.to_string(),
                    });
                }
                None
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(inclusion_conditions.map(|inclusion_conditions| {
            Selection::Field(FieldSelection {
                alias: ast_field.alias.clone(),
                arguments,
                def_location: field_srcloc,
                directives,
                field,
                inclusion_conditions,
                selection_set,
            })
        }))
    }

    fn build_fragment_spread(
        &self,
        parent_type: &'schema GraphQLType,
        ast_spread: &ast::operation::FragmentSpread,
    ) -> Result<Option<Selection<'schema>>> {
        let spread_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_spread.position,
        );

        match self.fragment_type_conditions.get(ast_spread.fragment_name.as_str()) {
            None => return Err(vec![DocumentBuildError::UndefinedFragment {
                fragment_name: ast_spread.fragment_name.to_string(),
                location: spread_srcloc,
            }]),

            Some(Some(type_condition)) => self.check_type_condition(
                parent_type,
                type_condition,
                &spread_srcloc,
            ).map_err(|err| vec![err])?,

            Some(None) => (),
        }

        let directives = DirectiveAnnotationBuilder::from_ast(
            &spread_srcloc,
            &ast_spread.directives,
        );
        let inclusion_conditions =
            inclusion_conditions_from_directives(&directives)
                .map_err(|err| vec![err])?;

        Ok(inclusion_conditions.map(|inclusion_conditions| {
            Selection::FragmentSpread(FragmentSpread {
                def_location: spread_srcloc.to_owned(),
                directives,
                fragment: NamedFragmentRef::new(
                    ast_spread.fragment_name.as_str(),
                    spread_srcloc,
                ),
                inclusion_conditions,
            })
        }))
    }

    fn build_inline_fragment(
        &self,
        parent_type: &'schema GraphQLType,
        ast_inline: &ast::operation::InlineFragment,
    ) -> Result<Option<Selection<'schema>>> {
        let inline_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            self.file_path,
            &ast_inline.position,
        );

        let (type_condition, narrowed_type) = match &ast_inline.type_condition {
            Some(ast::operation::TypeCondition::On(type_name)) => {
                let condition_type = self.resolve_type_condition(
                    type_name,
                    &inline_srcloc,
                ).map_err(|err| vec![err])?;
                self.check_type_condition(parent_type, condition_type, &inline_srcloc)
                    .map_err(|err| vec![err])?;
                (
                    Some(NamedGraphQLTypeRef::new(type_name, inline_srcloc.to_owned())),
                    condition_type,
                )
            },
            None => (None, parent_type),
        };

        let directives = DirectiveAnnotationBuilder::from_ast(
            &inline_srcloc,
            &ast_inline.directives,
        );
        let inclusion_conditions =
            inclusion_conditions_from_directives(&directives)
                .map_err(|err| vec![err])?;

        let selection_set = self.build_from_ast(
            narrowed_type,
            &ast_inline.selection_set,
        )?;

        Ok(inclusion_conditions.map(|inclusion_conditions| {
            Selection::InlineFragment(InlineFragment {
                def_location: inline_srcloc,
                directives,
                inclusion_conditions,
                selection_set,
                type_condition,
            })
        }))
    }

    /// A type condition is valid within `parent_type` when it names the same
    /// type or when some object type could satisfy both of them.
    fn check_type_condition(
        &self,
        parent_type: &GraphQLType,
        condition_type: &GraphQLType,
        location: &loc::SourceLocation,
    ) -> std::result::Result<(), DocumentBuildError> {
        if parent_type.name() == condition_type.name() {
            return Ok(());
        }

        let parent_possible_types = self.schema.possible_types(parent_type.name());
        let overlaps = self.schema
            .possible_types(condition_type.name())
            .iter()
            .any(|type_name| parent_possible_types.contains(type_name));

        if overlaps {
            Ok(())
        } else {
            Err(DocumentBuildError::InvalidTypeCondition {
                location: location.to_owned(),
                parent_type_name: parent_type.name().to_string(),
                type_condition: condition_type.name().to_string(),
            })
        }
    }

    pub fn resolve_type_condition(
        &self,
        type_name: &str,
        location: &loc::SourceLocation,
    ) -> std::result::Result<&'schema GraphQLType, DocumentBuildError> {
        let condition_type = self.schema.type_named(type_name).ok_or_else(
            || DocumentBuildError::UndefinedType {
                location: location.to_owned(),
                type_name: type_name.to_string(),
            },
        )?;

        if !condition_type.is_composite() {
            return Err(DocumentBuildError::NonCompositeTypeCondition {
                location: location.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        Ok(condition_type)
    }
}
