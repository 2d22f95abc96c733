use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceType for InterfaceType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InterfaceType`] was defined in the schema.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InterfaceType`].
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`] in the schema.
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the type in the schema.
    /// Fields added from type extensions appear after those of the original
    /// definition, and the implicit `__typename` field comes last.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all interfaces this [`InterfaceType`] declares that it
    /// implements, in declaration order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
