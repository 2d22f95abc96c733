use crate::ir::InclusionPredicate;
use crate::ir::SelectionSet;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// One merged field of an IR [`SelectionSet`]: every selection of the same
/// response key within a scope, folded together.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) inclusion: InclusionPredicate,
    pub(super) is_deprecated: bool,
    pub(super) is_direct: bool,
    pub(super) name: String,
    pub(super) response_key: String,
    pub(super) selection_set: Option<SelectionSet>,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// When this field is present in a response, relative to its enclosing
    /// scope.
    pub fn inclusion(&self) -> &InclusionPredicate {
        &self.inclusion
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    /// `true` if the field was written directly in this scope rather than
    /// only merged in from a fragment or an enclosing scope.
    pub fn is_direct(&self) -> bool {
        self.is_direct
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// The merged sub-selections of a composite-typed field.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
