use crate::ast;
use crate::DirectiveAnnotationBuilder;
use crate::loc;
use crate::operation::DocumentBuildError;
use crate::operation::Fragment;
use crate::operation::selection_set_builder::FragmentTypeConditions;
use crate::operation::SelectionSetBuilder;
use crate::schema::Schema;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

pub(crate) struct FragmentBuilder;
impl FragmentBuilder {
    /// Produce a [`Fragment`] from a
    /// [`FragmentDefinition`](ast::operation::FragmentDefinition).
    ///
    /// Spreads of other fragments are checked against
    /// `fragment_type_conditions` only; the spread fragments themselves are
    /// resolved later through the
    /// [`FragmentRegistry`](crate::operation::FragmentRegistry).
    pub fn from_ast<'schema>(
        schema: &'schema Schema,
        fragment_type_conditions: &FragmentTypeConditions<'schema>,
        ast: &ast::operation::FragmentDefinition,
        file_path: Option<&Path>,
    ) -> Result<Fragment<'schema>> {
        let fragdef_srcloc = loc::SourceLocation::from_execdoc_ast_position(
            file_path,
            &ast.position,
        );

        let selection_set_builder = SelectionSetBuilder::new(
            schema,
            fragment_type_conditions,
            file_path,
        );

        let ast::operation::TypeCondition::On(type_condition_name) =
            &ast.type_condition;
        let type_condition = selection_set_builder
            .resolve_type_condition(type_condition_name, &fragdef_srcloc)
            .map_err(|err| vec![err])?;

        let selection_set = selection_set_builder.build_from_ast(
            type_condition,
            &ast.selection_set,
        )?;

        Ok(Fragment {
            directives: DirectiveAnnotationBuilder::from_ast(
                &fragdef_srcloc,
                &ast.directives,
            ),
            def_location: fragdef_srcloc,
            definition: ast.clone(),
            name: ast.name.to_string(),
            selection_set,
            type_condition,
        })
    }
}
