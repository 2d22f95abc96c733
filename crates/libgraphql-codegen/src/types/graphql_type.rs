use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self { Some(type_) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self { Some(type_) } else { None }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String
                => &BUILTIN_LOCATION,
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String
                => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// The fields that can be selected directly on this type. Only Object and
    /// Interface types define fields; `__typename` is handled separately for
    /// Union types by [`Schema::field_on`].
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Object, Interface, and Union types are "composite" types: the only
    /// types that a selection set can be written against.
    pub fn is_composite(&self) -> bool {
        self.type_kind().is_composite()
    }

    /// Types which may be used as the type of an argument, variable, or
    /// input field.
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Types which may be used as the type of a field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Self::Source,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedGraphQLTypeRef = NamedRef<
    /* TSource = */ Schema,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ GraphQLType,
>;
