use crate::ir::IrBuildError;
use crate::loc;
use crate::operation::DocumentBuildError;
use crate::render::ConfigError;
use crate::render::RenderError;
use crate::schema::SchemaBuildError;
use thiserror::Error;

/// The coarse category of a [`CodegenError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodegenErrorKind {
    Cancelled,
    RenderError,
    SchemaError,
    ValidationError,
}
impl CodegenErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cancelled => "Cancelled",
            Self::RenderError => "RenderError",
            Self::SchemaError => "SchemaError",
            Self::ValidationError => "ValidationError",
        }
    }
}
impl std::fmt::Display for CodegenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Code generation was cancelled.")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentBuildError),

    #[error(transparent)]
    Ir(#[from] IrBuildError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Schema(#[from] SchemaBuildError),
}
impl CodegenError {
    /// Configuration problems are reported as render errors: they are
    /// conflicts in how output is named and placed.
    pub fn kind(&self) -> CodegenErrorKind {
        match self {
            Self::Cancelled => CodegenErrorKind::Cancelled,
            Self::Config(_) | Self::Render(_) => CodegenErrorKind::RenderError,
            Self::Document(_) | Self::Ir(_) => CodegenErrorKind::ValidationError,
            Self::Schema(_) => CodegenErrorKind::SchemaError,
        }
    }

    pub fn location(&self) -> Option<loc::SourceLocation> {
        match self {
            Self::Cancelled | Self::Config(_) | Self::Render(_) => None,
            Self::Document(err) => err.location(),
            Self::Ir(err) => err.location(),
            Self::Schema(err) => err.location(),
        }
    }

    /// The name of the operation, fragment, or schema type this error was
    /// found while rendering.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Self::Render(err) => err.entity_name(),
            _ => None,
        }
    }
}
