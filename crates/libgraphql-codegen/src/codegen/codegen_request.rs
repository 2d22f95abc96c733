use std::path::Path;
use std::path::PathBuf;

/// The text of one input document and, if it was read from disk, where it
/// came from.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceText {
    pub file_path: Option<PathBuf>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SchemaSource {
    /// The result of an introspection query, as JSON.
    IntrospectionJson(SourceText),
    Sdl(SourceText),
}

/// Everything [`generate()`](crate::codegen::generate) reads: the schema
/// sources and the executable documents compiled against them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CodegenRequest {
    documents: Vec<SourceText>,
    schema_sources: Vec<SchemaSource>,
}
impl CodegenRequest {
    pub fn add_document(
        mut self,
        file_path: Option<&Path>,
        text: impl Into<String>,
    ) -> Self {
        self.documents.push(SourceText {
            file_path: file_path.map(Path::to_path_buf),
            text: text.into(),
        });
        self
    }

    pub fn add_introspection_json(
        mut self,
        file_path: Option<&Path>,
        text: impl Into<String>,
    ) -> Self {
        self.schema_sources.push(SchemaSource::IntrospectionJson(SourceText {
            file_path: file_path.map(Path::to_path_buf),
            text: text.into(),
        }));
        self
    }

    pub fn add_schema_sdl(
        mut self,
        file_path: Option<&Path>,
        text: impl Into<String>,
    ) -> Self {
        self.schema_sources.push(SchemaSource::Sdl(SourceText {
            file_path: file_path.map(Path::to_path_buf),
            text: text.into(),
        }));
        self
    }

    pub fn documents(&self) -> &[SourceText] {
        &self.documents
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_sources(&self) -> &[SchemaSource] {
        &self.schema_sources
    }
}
