use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::InclusionCondition;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'schema> {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) inclusion_conditions: Vec<InclusionCondition>,
    pub(super) selection_set: SelectionSet<'schema>,
    pub(super) type_condition: Option<NamedGraphQLTypeRef>,
}
impl<'schema> InlineFragment<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn inclusion_conditions(&self) -> &[InclusionCondition] {
        &self.inclusion_conditions
    }

    /// The selections within this inline fragment. Their parent type is the
    /// type condition, or the enclosing type when no condition was written.
    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    pub fn type_condition_name(&self) -> Option<&str> {
        self.type_condition.as_ref().map(|type_ref| type_ref.name())
    }

    pub fn type_condition_on<'a>(&self, schema: &'a Schema) -> Option<&'a GraphQLType> {
        self.type_condition.as_ref()
            .and_then(|type_ref| type_ref.deref(schema).ok())
    }
}
