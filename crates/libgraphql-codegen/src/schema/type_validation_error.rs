use crate::loc;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// A problem with how the types of a schema fit together. These are found
/// after every definition and extension has been loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object `{}` reaches itself through non-nullable fields only: {}",
        circular_field_path.last().map(String::as_str).unwrap_or_default(),
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
        location: loc::SourceLocation,
    },

    #[error("Union `{union_type_name}` has no member types")]
    EmptyUnion {
        location: loc::SourceLocation,
        union_type_name: String,
    },

    #[error("`{type_name}` implements `{non_interface_type_name}`, which is not an interface")]
    ImplementsNonInterfaceType {
        location: loc::SourceLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error("`{type_name}` implements `{undefined_interface_name}`, which is not defined")]
    ImplementsUndefinedInterface {
        location: loc::SourceLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input field `{parent_type_name}.{field_name}` has output-only type \
        `{invalid_type_name}`"
    )]
    InputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}(${parameter_name}:)` is \
        `{invalid_parameter_type}` but `{interface_name}.{field_name}` \
        declares it as `{expected_parameter_type}`"
    )]
    InterfaceFieldParameterTypeMismatch {
        expected_parameter_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: TypeAnnotation,
        location: loc::SourceLocation,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` is `{invalid_field_type}`, which is not a \
        subtype of `{expected_field_type}` as required by \
        `{interface_name}.{field_name}`"
    )]
    InterfaceFieldTypeMismatch {
        expected_field_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeAnnotation,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_type_name}` lists `{invalid_member_type_name}` as a \
        member, but it is {} type; members must be object types",
        article_kind(invalid_member_type_kind),
    )]
    InvalidUnionMemberTypeKind {
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
        location: loc::SourceLocation,
        union_type_name: String,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but has no \
        `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` is missing the `{missing_parameter_name}` \
        parameter declared by `{interface_name}.{field_name}`"
    )]
    MissingInterfaceFieldParameter {
        field_name: String,
        interface_name: String,
        location: loc::SourceLocation,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}` must also implement `{missing_recursive_interface_name}` \
        (via {})",
        inheritance_path.join(" -> "),
    )]
    MissingRecursiveInterfaceImplementation {
        inheritance_path: Vec<String>,
        location: loc::SourceLocation,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error(
        "Output field `{parent_type_name}.{field_name}` has input-only type \
        `{input_type_name}`"
    )]
    OutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error("Parameter `${parameter_name}` has output-only type `{output_type_name}`")]
    ParameterWithOutputType {
        location: loc::SourceLocation,
        output_type_name: String,
        parameter_name: String,
    },

    #[error(
        "`{type_name}.{field_name}` adds a required `{parameter_name}` \
        parameter that `{interface_name}.{field_name}` does not declare"
    )]
    RequiredParameterNotOnInterface {
        field_name: String,
        interface_name: String,
        location: loc::SourceLocation,
        parameter_name: String,
        type_name: String,
    },

    #[error("No type named `{undefined_type_name}` is defined")]
    UndefinedTypeName {
        location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
impl TypeValidationError {
    pub fn location(&self) -> &loc::SourceLocation {
        match self {
            Self::CircularInputFieldChain { location, .. }
                | Self::EmptyUnion { location, .. }
                | Self::ImplementsNonInterfaceType { location, .. }
                | Self::ImplementsUndefinedInterface { location, .. }
                | Self::InputFieldWithOutputType { location, .. }
                | Self::InterfaceFieldParameterTypeMismatch { location, .. }
                | Self::InterfaceFieldTypeMismatch { location, .. }
                | Self::InvalidUnionMemberTypeKind { location, .. }
                | Self::MissingInterfaceSpecifiedField { location, .. }
                | Self::MissingInterfaceFieldParameter { location, .. }
                | Self::MissingRecursiveInterfaceImplementation { location, .. }
                | Self::OutputFieldWithInputType { location, .. }
                | Self::ParameterWithOutputType { location, .. }
                | Self::RequiredParameterNotOnInterface { location, .. }
                | Self::UndefinedTypeName { location, .. }
                => location,
        }
    }
}

fn article_kind(kind: &GraphQLTypeKind) -> String {
    match kind {
        GraphQLTypeKind::Enum
            | GraphQLTypeKind::ID
            | GraphQLTypeKind::InputObject
            | GraphQLTypeKind::Int
            | GraphQLTypeKind::Interface
            | GraphQLTypeKind::Object
            => format!("an {}", kind.name()),
        _ => format!("a {}", kind.name()),
    }
}
