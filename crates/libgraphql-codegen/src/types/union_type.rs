use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
}
impl UnionType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`UnionType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type in the schema. Members added from
    /// type extensions appear after those of the original definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
