use crate::ir::Field;
use crate::ir::InclusionPredicate;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;

/// Where in an operation or fragment a [`SelectionSet`] sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// The root of an operation or named fragment.
    Root,

    /// The sub-selections of a composite-typed field.
    Field,

    /// A narrower type condition within an abstract scope (an inline
    /// fragment, or a named fragment spread on a narrower type).
    TypeCase,
}

/// The Object, Interface, or Union type a [`SelectionSet`] applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParentType {
    pub(super) kind: GraphQLTypeKind,
    pub(super) name: String,
}
impl ParentType {
    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// An entry of a [`SelectionSet`] as it was written in that scope, in
/// document order.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectSelection {
    Field {
        inclusion: InclusionPredicate,
        response_key: String,
    },
    Fragment {
        inclusion: InclusionPredicate,
        name: String,
    },
    TypeCase {
        inclusion: InclusionPredicate,
        type_name: String,
    },
}
impl DirectSelection {
    pub fn inclusion(&self) -> &InclusionPredicate {
        match self {
            Self::Field { inclusion, .. }
                | Self::Fragment { inclusion, .. }
                | Self::TypeCase { inclusion, .. }
                => inclusion,
        }
    }
}

/// A named fragment whose type condition every value in a scope satisfies.
///
/// Only the fragment's name is kept; the fragment itself is looked up in
/// [`Ir::fragments()`](crate::ir::Ir::fragments).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentUse {
    pub(super) inclusion: InclusionPredicate,
    pub(super) is_direct: bool,
    pub(super) name: String,
}
impl FragmentUse {
    pub fn inclusion(&self) -> &InclusionPredicate {
        &self.inclusion
    }

    pub fn is_direct(&self) -> bool {
        self.is_direct
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A child scope for a type condition narrower than its parent scope.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCase {
    pub(super) inclusion: InclusionPredicate,
    pub(super) selection_set: SelectionSet,
}
impl TypeCase {
    pub fn inclusion(&self) -> &InclusionPredicate {
        &self.inclusion
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_name(&self) -> &str {
        self.selection_set.parent_type.name()
    }
}

/// The complete, merged selections for one type-condition scope.
///
/// Everything here is computed once by the
/// [`IrBuilder`](crate::ir::IrBuilder) and never changes afterwards:
/// - [`fields()`](Self::fields) are the merged selections, deduplicated by
///   response key, including fields contributed by fragments and (for type
///   cases) by the enclosing scope.
/// - [`type_cases()`](Self::type_cases) are nested scopes for narrower type
///   conditions, kept apart from the unconditional fields.
/// - [`fragments()`](Self::fragments) are the named fragments this scope
///   satisfies.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(super) direct_selections: Option<Vec<DirectSelection>>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) fragments: IndexMap<String, FragmentUse>,
    pub(super) parent_type: ParentType,
    pub(super) scope_kind: ScopeKind,
    pub(super) type_cases: IndexMap<String, TypeCase>,
}
impl SelectionSet {
    /// The selections written in this scope, or `None` if the scope only
    /// exists to hold merged selections.
    pub fn direct_selections(&self) -> Option<&[DirectSelection]> {
        self.direct_selections.as_deref()
    }

    pub fn field(&self, response_key: &str) -> Option<&Field> {
        self.fields.get(response_key)
    }

    /// Merged fields, keyed by response key.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn fragments(&self) -> &IndexMap<String, FragmentUse> {
        &self.fragments
    }

    pub fn parent_type(&self) -> &ParentType {
        &self.parent_type
    }

    pub fn scope_kind(&self) -> ScopeKind {
        self.scope_kind
    }

    pub fn type_case(&self, type_name: &str) -> Option<&TypeCase> {
        self.type_cases.get(type_name)
    }

    pub fn type_cases(&self) -> &IndexMap<String, TypeCase> {
        &self.type_cases
    }
}
