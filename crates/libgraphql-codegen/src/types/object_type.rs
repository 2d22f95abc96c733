use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`ObjectType`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`] in the schema.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the type in the schema.
    /// Fields added from type extensions appear after those of the original
    /// definition, and the implicit `__typename` field comes last.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all interfaces this [`ObjectType`] declares that it
    /// implements, in declaration order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
