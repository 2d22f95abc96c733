use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error(
        "Operations must be named so that a type can be generated for them."
    )]
    AnonymousOperation {
        location: loc::SourceLocation,
    },

    #[error(
        "The `{argument_name}` argument was passed more than once to the \
        `{field_name}` field."
    )]
    DuplicateFieldArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("Multiple fragments are named `{fragment_name}`.")]
    DuplicateFragment {
        fragment_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple operations are named `{operation_name}`.")]
    DuplicateOperation {
        operation_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `${variable_name}` variable is declared more than once.")]
    DuplicateVariable {
        variable_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Failure while trying to read a document file from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadSourceError>),

    #[error("Fragments spread each other in a cycle: {}", cycle_path.join(" -> "))]
    FragmentCycle {
        cycle_path: Vec<String>,
        location: Option<loc::SourceLocation>,
    },

    #[error(
        "`@{directive_name}` must be given an `if` argument that is either a \
        Boolean literal or a variable."
    )]
    InvalidInclusionConditionArgument {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "A fragment on `{type_condition}` can never match a value of type \
        `{parent_type_name}`."
    )]
    InvalidTypeCondition {
        location: loc::SourceLocation,
        parent_type_name: String,
        type_condition: String,
    },

    #[error(
        "The `${variable_name}` variable is declared with type \
        `{type_name}`, which is not an input type."
    )]
    InvalidVariableType {
        location: loc::SourceLocation,
        type_name: String,
        variable_name: String,
    },

    #[error(
        "The `{field_name}` field has composite type `{type_name}` and must \
        select sub-fields."
    )]
    MissingSelectionSet {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Fragments and inline fragments must be written on an Object, \
        Interface, or Union type, but `{type_name}` is not one."
    )]
    NonCompositeTypeCondition {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("The schema defines no root type for {operation_kind} operations.")]
    NoRootOperationType {
        location: loc::SourceLocation,
        operation_kind: OperationKind,
    },

    #[error("Error parsing executable document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "The `{field_name}` field has leaf type `{type_name}`, so sub-fields \
        cannot be selected on it."
    )]
    SelectionSetOnLeafField {
        field_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{field_name}` field does not define an argument named \
        `{argument_name}`."
    )]
    UndefinedArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Attempted to select a field named `{field_name}` on the \
        `{parent_type_name}` type, but `{parent_type_name}` has no such field \
        defined."
    )]
    UndefinedField {
        field_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
    },

    #[error("No fragment named `{fragment_name}` is defined.")]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error("No type named `{type_name}` is defined in the schema.")]
    UndefinedType {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `${variable_name}` variable is used by the `{operation_name}` \
        operation but is not declared by it."
    )]
    UndefinedVariable {
        location: loc::SourceLocation,
        operation_name: String,
        variable_name: String,
    },
}
impl DocumentBuildError {
    /// Where in a document this error was found, if known.
    pub fn location(&self) -> Option<loc::SourceLocation> {
        match self {
            Self::AnonymousOperation { location }
                | Self::DuplicateFieldArgument { location, .. }
                | Self::DuplicateFragment { location2: location, .. }
                | Self::DuplicateOperation { location2: location, .. }
                | Self::DuplicateVariable { location2: location, .. }
                | Self::InvalidInclusionConditionArgument { location, .. }
                | Self::InvalidTypeCondition { location, .. }
                | Self::InvalidVariableType { location, .. }
                | Self::MissingSelectionSet { location, .. }
                | Self::NonCompositeTypeCondition { location, .. }
                | Self::NoRootOperationType { location, .. }
                | Self::SelectionSetOnLeafField { location, .. }
                | Self::UndefinedArgument { location, .. }
                | Self::UndefinedField { location, .. }
                | Self::UndefinedFragment { location, .. }
                | Self::UndefinedType { location, .. }
                | Self::UndefinedVariable { location, .. }
                => Some(location.to_owned()),

            Self::FragmentCycle { location, .. } => location.to_owned(),

            Self::ParseError { file: Some(file), .. } =>
                Some(loc::SourceLocation::ExecutableDocument(loc::FilePosition {
                    col: 0,
                    file: Some(file.to_owned()),
                    line: 0,
                })),

            Self::DocumentFileReadError(_)
                | Self::ParseError { file: None, .. }
                => None,
        }
    }
}
