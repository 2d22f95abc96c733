use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// The rendered text of every generated file, keyed by output path.
///
/// This is only ever produced by a run that finished without errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedOutput {
    pub(super) files: BTreeMap<PathBuf, String>,
}
impl GeneratedOutput {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    pub fn into_files(self) -> BTreeMap<PathBuf, String> {
        self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
