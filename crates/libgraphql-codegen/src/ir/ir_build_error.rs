use crate::loc;
use thiserror::Error;

/// Why two selections of the same response key could not be merged.
#[derive(Clone, Debug, PartialEq)]
pub enum MergeConflictReason {
    DifferentArguments,
    DifferentFields {
        field_name1: String,
        field_name2: String,
    },
}
impl std::fmt::Display for MergeConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DifferentArguments =>
                write!(f, "they pass different arguments"),
            Self::DifferentFields { field_name1, field_name2 } =>
                write!(f, "`{field_name1}` and `{field_name2}` are different fields"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum IrBuildError {
    #[error("Building the IR was cancelled.")]
    Cancelled,

    #[error(
        "Selections of `{response_key}` on `{parent_type_name}` pass different \
        arguments under different @include/@skip conditions."
    )]
    ConflictingInclusionCondition {
        location1: Option<loc::SourceLocation>,
        location2: Option<loc::SourceLocation>,
        parent_type_name: String,
        response_key: String,
    },

    #[error("The `{fragment_name}` fragment is spread but was never defined.")]
    DanglingFragmentReference {
        fragment_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Selections of `{response_key}` on `{parent_type_name}` cannot be \
        merged because {reason}."
    )]
    MergeConflict {
        location1: Option<loc::SourceLocation>,
        location2: Option<loc::SourceLocation>,
        parent_type_name: String,
        reason: MergeConflictReason,
        response_key: String,
    },
}
impl IrBuildError {
    pub fn location(&self) -> Option<loc::SourceLocation> {
        match self {
            Self::ConflictingInclusionCondition { location1, location2, .. }
                | Self::MergeConflict { location1, location2, .. }
                => location2.to_owned().or_else(|| location1.to_owned()),

            Self::DanglingFragmentReference { location, .. } =>
                Some(location.to_owned()),

            Self::Cancelled => None,
        }
    }
}
