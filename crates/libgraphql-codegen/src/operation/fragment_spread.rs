use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByNameError;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::InclusionCondition;
use crate::operation::NamedFragmentRef;

/// A `...FragmentName` spread. The spread only names its [`Fragment`]; the
/// fragment itself lives in the [`FragmentRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'schema> {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fragment: NamedFragmentRef<'schema>,
    pub(super) inclusion_conditions: Vec<InclusionCondition>,
}
impl<'schema> FragmentSpread<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fragment<'fragreg>(
        &self,
        fragment_registry: &'fragreg FragmentRegistry<'schema>,
    ) -> Result<&'fragreg Fragment<'schema>, DerefByNameError> {
        self.fragment.deref(fragment_registry)
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment.name()
    }

    pub fn inclusion_conditions(&self) -> &[InclusionCondition] {
        &self.inclusion_conditions
    }
}
