use crate::ir::NamedFragment;
use crate::ir::Operation;
use crate::ir::ReferencedTypes;
use std::collections::BTreeMap;

/// The built IR for a whole document set: an immutable snapshot handed to
/// the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ir {
    fragments: BTreeMap<String, NamedFragment>,
    operations: BTreeMap<String, Operation>,
    referenced_types: ReferencedTypes,
}
impl Ir {
    pub(crate) fn new(
        fragments: impl IntoIterator<Item = NamedFragment>,
        operations: impl IntoIterator<Item = Operation>,
        referenced_types: ReferencedTypes,
    ) -> Self {
        Self {
            fragments: fragments.into_iter()
                .map(|fragment| (fragment.name().to_string(), fragment))
                .collect(),
            operations: operations.into_iter()
                .map(|operation| (operation.name().to_string(), operation))
                .collect(),
            referenced_types,
        }
    }

    pub fn fragment(&self, fragment_name: &str) -> Option<&NamedFragment> {
        self.fragments.get(fragment_name)
    }

    /// All fragments, sorted by name.
    pub fn fragments(&self) -> &BTreeMap<String, NamedFragment> {
        &self.fragments
    }

    pub fn operation(&self, operation_name: &str) -> Option<&Operation> {
        self.operations.get(operation_name)
    }

    /// All operations, sorted by name.
    pub fn operations(&self) -> &BTreeMap<String, Operation> {
        &self.operations
    }

    pub fn referenced_types(&self) -> &ReferencedTypes {
        &self.referenced_types
    }
}
