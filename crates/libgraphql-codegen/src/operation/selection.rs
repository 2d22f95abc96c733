use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InclusionCondition;
use crate::operation::InlineFragment;

/// A single entry within a [`SelectionSet`](crate::operation::SelectionSet)
/// as written in a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'schema> {
    Field(FieldSelection<'schema>),
    FragmentSpread(FragmentSpread<'schema>),
    InlineFragment(InlineFragment<'schema>),
}
impl<'schema> Selection<'schema> {
    pub fn as_field(&self) -> Option<&FieldSelection<'schema>> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Field(field) => field.def_location(),
            Self::FragmentSpread(spread) => spread.def_location(),
            Self::InlineFragment(inline) => inline.def_location(),
        }
    }

    /// The `@include`/`@skip` conditions gating this selection. All of them
    /// must hold for the selection to be present in a response.
    pub fn inclusion_conditions(&self) -> &[InclusionCondition] {
        match self {
            Self::Field(field) => field.inclusion_conditions(),
            Self::FragmentSpread(spread) => spread.inclusion_conditions(),
            Self::InlineFragment(inline) => inline.inclusion_conditions(),
        }
    }
}
