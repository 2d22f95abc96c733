use crate::types::GraphQLType;

/// The kind of a [`GraphQLType`], without its definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// The kind of the built-in scalar named `name`, if it is one.
    pub fn builtin_scalar(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(Self::Bool),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn is_builtin_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::Float | Self::ID | Self::Int | Self::String)
    }

    /// Sub-fields can only be selected on these.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }

    /// Directory (under `Schema/`) that generated files for types of this
    /// kind are written to. Built-in scalars are never generated.
    pub fn schema_types_dir(&self) -> Option<&'static str> {
        match self {
            Self::Enum => Some("Enums"),
            Self::InputObject => Some("InputObjects"),
            Self::Interface => Some("Interfaces"),
            Self::Object => Some("Objects"),
            Self::Scalar => Some("CustomScalars"),
            Self::Union => Some("Unions"),
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => None,
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => Self::Bool,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::Float => Self::Float,
            GraphQLType::ID => Self::ID,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Int => Self::Int,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::String => Self::String,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
