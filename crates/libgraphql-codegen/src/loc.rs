use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<unknown>:{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema definition, document selection, or reference was
/// defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Definitions that are implicitly provided by GraphQL itself (e.g. the
    /// `String` scalar or the `@include` directive).
    GraphQLBuiltIn,

    /// Definitions loaded from an introspection result. Introspection JSON
    /// carries no positions, so only the originating file is retained.
    Introspection(Option<PathBuf>),

    /// A position within an executable (operation/fragment) document.
    ExecutableDocument(FilePosition),

    /// A position within a schema (SDL) document.
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_execdoc_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::ExecutableDocument(FilePosition::from_pos(file_path, *pos))
    }

    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file_path, *pos))
    }

    /// The file this location points into, if known.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Introspection(file) => file.as_deref(),
            Self::ExecutableDocument(pos)
                | Self::Schema(pos)
                => pos.file.as_deref(),
        }
    }

    /// The 1-based line number this location points to, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::GraphQLBuiltIn | Self::Introspection(_) => None,
            Self::ExecutableDocument(pos) | Self::Schema(pos) => Some(pos.line),
        }
    }

    /// Produce a new [`SourceLocation`] in the same file as this one, but
    /// pointing at a different AST position.
    pub(crate) fn with_ast_position(&self, pos: &graphql_parser::Pos) -> Self {
        match self {
            Self::ExecutableDocument(file_pos) => Self::ExecutableDocument(
                FilePosition::from_pos(file_pos.file.as_ref(), *pos),
            ),
            Self::Schema(file_pos) => Self::Schema(
                FilePosition::from_pos(file_pos.file.as_ref(), *pos),
            ),
            Self::GraphQLBuiltIn | Self::Introspection(_) => self.to_owned(),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Introspection(Some(file)) => write!(f, "{}", file.display()),
            Self::Introspection(None) => write!(f, "<introspection>"),
            Self::ExecutableDocument(pos) | Self::Schema(pos) => pos.fmt(f),
        }
    }
}
