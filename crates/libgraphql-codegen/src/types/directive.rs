use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// A directive definition known to a [`Schema`](crate::schema::Schema):
/// either one of the built-in directives every schema has, or a custom one
/// declared with `directive @name(...) on ...`.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        description: Option<String>,
        name: String,
        params: IndexMap<String, Parameter>,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        static BUILTIN_LOCATION: loc::SourceLocation =
            loc::SourceLocation::GraphQLBuiltIn;
        match self {
            Self::Custom { def_location, .. } => def_location,
            Self::Deprecated
                | Self::Include
                | Self::Skip
                | Self::SpecifiedBy
                => &BUILTIN_LOCATION,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Custom { description, .. } => description.as_deref(),
            Self::Deprecated
                | Self::Include
                | Self::Skip
                | Self::SpecifiedBy
                => None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }
}
