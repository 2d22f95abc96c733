mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod object_or_interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_validator;
mod object_type;
mod scalar_type;
mod type_annotation;
mod type_builder;
mod types_map_builder;
mod union_type;
mod union_type_validator;

pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use field::Parameter;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
use union_type_validator::validate_union_type;

#[cfg(test)]
mod tests;
