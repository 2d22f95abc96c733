use crate::ast;
use crate::ir::SelectionSet;
use crate::operation::OperationKind;
use crate::operation::Variable;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) definition: ast::operation::OperationDefinition,
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) referenced_fragments: BTreeSet<String>,
    pub(super) root: SelectionSet,
    pub(super) source_file: Option<PathBuf>,
    pub(super) variables: Vec<Variable>,
}
impl Operation {
    pub fn definition(&self) -> &ast::operation::OperationDefinition {
        &self.definition
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Every fragment the operation spreads, directly or transitively, in
    /// sorted order.
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

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}
