use crate::render::ConfigError;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Where `init` writes a configuration when no path is given.
pub const DEFAULT_CONFIG_FILE_PATH: &str = "./graphql-codegen-config.json";

const RESERVED_SCHEMA_NAMESPACES: &[&str] = &[
    "ApolloAPI",
    "Any",
    "DataDict",
    "Protocol",
    "Schema",
    "Self",
    "Type",
];

/// The complete configuration of a code generation run, decoded from (and
/// encoded to) camelCase JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    #[serde(default)]
    pub experimental_features: ExperimentalFeatures,
    pub input: InputConfig,
    #[serde(default)]
    pub options: OutputOptions,
    pub output: OutputConfig,
    pub schema_namespace: String,
}
impl CodegenConfig {
    /// The configuration written by `graphql-codegen init`.
    pub fn default_for_init() -> Self {
        Self {
            experimental_features: ExperimentalFeatures::default(),
            input: InputConfig {
                operation_search_paths: vec![PathBuf::from("./graphql")],
                schema_search_paths: vec![PathBuf::from("./schema.graphqls")],
            },
            options: OutputOptions::default(),
            output: OutputConfig {
                operations: OperationsLocation::Relative { subpath: None },
                schema_types: SchemaTypesConfig {
                    module_type: ModuleTypeConfig {
                        name: None,
                        module_type: "swiftPackageManager".to_string(),
                    },
                    path: PathBuf::from("./"),
                },
            },
            schema_namespace: "GraphQLSchemaName".to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check the structural constraints JSON decoding can't express.
    ///
    /// The module type is checked by
    /// [`RenderContext::new()`](crate::render::RenderContext::new).
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = vec![];

        let namespace = self.schema_namespace.as_str();
        if namespace.trim().is_empty() {
            errors.push(ConfigError::EmptySchemaNamespace);
        } else if !is_identifier(namespace) {
            errors.push(ConfigError::InvalidSchemaNamespace {
                namespace: namespace.to_string(),
            });
        } else if RESERVED_SCHEMA_NAMESPACES.contains(&namespace) {
            errors.push(ConfigError::ReservedSchemaNamespace {
                namespace: namespace.to_string(),
            });
        }

        if self.input.schema_search_paths.is_empty() {
            errors.push(ConfigError::NoSchemaSearchPaths);
        }
        if self.input.operation_search_paths.is_empty() {
            errors.push(ConfigError::NoOperationSearchPaths);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentalFeatures {
    /// Embed operation and fragment documents with `__typename` selected in
    /// every nested composite selection set.
    #[serde(default)]
    pub legacy_safelisting_compatible_operations: bool,
}

/// Where the CLI looks for schema and operation documents.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    pub operation_search_paths: Vec<PathBuf>,
    pub schema_search_paths: Vec<PathBuf>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub operations: OperationsLocation,
    pub schema_types: SchemaTypesConfig,
}

/// Where operation and fragment files are placed, relative to the schema
/// module.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationsLocation {
    /// All operations and fragments go in `path`.
    Absolute { path: PathBuf },

    /// Operations and fragments are part of the schema module itself.
    InSchemaModule,

    /// Each operation or fragment is written next to the document that
    /// defines it, optionally in a `subpath` directory.
    Relative {
        #[serde(default)]
        subpath: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTypesConfig {
    pub module_type: ModuleTypeConfig,
    pub path: PathBuf,
}

/// The schema module's packaging as written in the configuration.
///
/// `type` is kept as raw text; unknown values are reported as a
/// [`RenderError`](crate::render::RenderError) once rendering starts.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTypeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub module_type: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default)]
    pub conversion_strategies: ConversionStrategies,
    #[serde(default)]
    pub deprecated_enum_cases: Composition,
    #[serde(default)]
    pub query_string_literal_format: QueryStringLiteralFormat,
    #[serde(default)]
    pub warnings_on_deprecated_usage: Composition,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStrategies {
    #[serde(default)]
    pub enum_cases: CaseConversionStrategy,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseConversionStrategy {
    #[default]
    CamelCase,
    None,
}

/// Whether some optional piece of output is generated.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Composition {
    Exclude,
    #[default]
    Include,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryStringLiteralFormat {
    #[default]
    Multiline,
    SingleLine,
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}
