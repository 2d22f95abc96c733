use crate::operation::Selection;
use crate::types::GraphQLType;

/// The selections written for one composite type within a document,
/// validated against the [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'schema> {
    pub(super) parent_type: &'schema GraphQLType,
    pub(super) selections: Vec<Selection<'schema>>,
}
impl<'schema> SelectionSet<'schema> {
    /// The Object, Interface, or Union type these selections are made on.
    pub fn parent_type(&self) -> &'schema GraphQLType {
        self.parent_type
    }

    pub fn selections(&self) -> &Vec<Selection<'schema>> {
        &self.selections
    }
}
