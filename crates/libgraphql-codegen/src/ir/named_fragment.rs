use crate::ast;
use crate::ir::ParentType;
use crate::ir::SelectionSet;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedFragment {
    pub(super) definition: ast::operation::FragmentDefinition,
    pub(super) name: String,
    pub(super) referenced_fragments: BTreeSet<String>,
    pub(super) root: SelectionSet,
    pub(super) source_file: Option<PathBuf>,
}
impl NamedFragment {
    pub fn definition(&self) -> &ast::operation::FragmentDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Every fragment this fragment spreads, directly or transitively.
    pub fn referenced_fragments(&self) -> &BTreeSet<String> {
        &self.referenced_fragments
    }

    pub fn root(&self) -> &SelectionSet {
        &self.root
    }

    /// The document this definition was read from, if it came from a file.
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    pub fn type_condition(&self) -> &ParentType {
        self.root.parent_type()
    }
}
