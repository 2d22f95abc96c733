use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The schema namespace must not be empty.")]
    EmptySchemaNamespace,

    #[error(
        "The schema namespace `{namespace}` is not a valid identifier: it \
        must start with a letter or `_` and contain only letters, digits, \
        and `_`."
    )]
    InvalidSchemaNamespace {
        namespace: String,
    },

    #[error("No operation search paths were configured.")]
    NoOperationSearchPaths,

    #[error("No schema search paths were configured.")]
    NoSchemaSearchPaths,

    #[error(
        "The schema namespace `{namespace}` conflicts with a name the \
        generated code depends on."
    )]
    ReservedSchemaNamespace {
        namespace: String,
    },
}
