use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(
        "`{entity_name1}` and `{entity_name2}` would both be written to \
        `{}`.",
        .path.display()
    )]
    DuplicateOutputPath {
        entity_name1: String,
        entity_name2: String,
        path: PathBuf,
    },

    #[error("The `{module_type}` module type requires a module name.")]
    MissingModuleName {
        module_type: String,
    },

    #[error(
        "`{entity_name}` can't be rendered: the declaration name `{name}` is \
        used more than once within `{scope}`."
    )]
    NameCollision {
        entity_name: String,
        name: String,
        scope: String,
    },

    #[error(
        "Unknown module type `{module_type}`. Expected one of \
        `swiftPackageManager`, `embeddedInTarget`, or `other`."
    )]
    UnknownModuleType {
        module_type: String,
    },
}
impl RenderError {
    /// The generated entity (operation, fragment, or schema type) the error
    /// is about, if any.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateOutputPath { entity_name2, .. } =>
                Some(entity_name2.as_str()),
            Self::NameCollision { entity_name, .. } =>
                Some(entity_name.as_str()),
            Self::MissingModuleName { .. } | Self::UnknownModuleType { .. } =>
                None,
        }
    }
}
