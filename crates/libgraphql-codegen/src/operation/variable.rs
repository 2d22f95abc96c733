use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// A variable declared by an operation, e.g. `$id: ID!` or
/// `$first: Int = 10`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
