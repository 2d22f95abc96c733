use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;
use crate::types::GraphQLType;

/// A named fragment definition, validated against the
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<'schema> {
    pub(super) def_location: loc::SourceLocation,
    pub(super) definition: ast::operation::FragmentDefinition,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet<'schema>,
    pub(super) type_condition: &'schema GraphQLType,
}
impl<'schema> Fragment<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The syntax tree this fragment was built from. Used to print the
    /// fragment's source text.
    pub fn definition(&self) -> &ast::operation::FragmentDefinition {
        &self.definition
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &'schema GraphQLType {
        self.type_condition
    }
}
impl<'schema> DerefByName for Fragment<'schema> {
    type Source = FragmentRegistry<'schema>;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        registry: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Fragment<'schema>, DerefByNameError> {
        registry.fragments.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedFragmentRef<'schema> = NamedRef<
    /* TSource = */ FragmentRegistry<'schema>,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ Fragment<'schema>,
>;
