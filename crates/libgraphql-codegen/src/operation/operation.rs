use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use indexmap::IndexMap;

/// A named query, mutation, or subscription validated against the
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<'schema> {
    pub(super) def_location: loc::SourceLocation,
    pub(super) definition: ast::operation::OperationDefinition,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet<'schema>,
    pub(super) variables: IndexMap<String, Variable>,
}
impl<'schema> Operation<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The syntax tree this operation was built from. Used to print the
    /// operation's source text.
    pub fn definition(&self) -> &ast::operation::OperationDefinition {
        &self.definition
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The root selections, made on the schema's root operation type for
    /// this operation's [`OperationKind`].
    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    /// The variables declared by this operation, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}
