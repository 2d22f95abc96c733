use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::InclusionCondition;
use crate::operation::SelectionSet;
use crate::types::Field;
use crate::Value;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection<'schema> {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) field: &'schema Field,
    pub(super) inclusion_conditions: Vec<InclusionCondition>,
    pub(super) selection_set: Option<SelectionSet<'schema>>,
}
impl<'schema> FieldSelection<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The schema definition of the selected field.
    pub fn field(&self) -> &'schema Field {
        self.field
    }

    pub fn inclusion_conditions(&self) -> &[InclusionCondition] {
        &self.inclusion_conditions
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// The key this field is stored under in a response: the alias if one
    /// was given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.field.name())
    }

    /// Sub-selections; only present when the field's type is composite.
    pub fn selection_set(&self) -> Option<&SelectionSet<'schema>> {
        self.selection_set.as_ref()
    }
}
