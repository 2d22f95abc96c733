use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceType;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceType for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
