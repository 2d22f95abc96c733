mod codegen_config;
mod composite_type_template;
mod config_error;
mod custom_scalar_template;
mod embedded_document;
mod entity;
mod enum_template;
mod fragment_template;
mod input_object_template;
mod naming;
mod operation_template;
mod render_context;
mod render_error;
mod schema_metadata_template;
mod schema_type_file;
mod selection_set_template;
mod swift_types;
mod swift_writer;

pub use codegen_config::CaseConversionStrategy;
pub use codegen_config::CodegenConfig;
pub use codegen_config::Composition;
pub use codegen_config::ConversionStrategies;
pub use codegen_config::DEFAULT_CONFIG_FILE_PATH;
pub use codegen_config::ExperimentalFeatures;
pub use codegen_config::InputConfig;
pub use codegen_config::ModuleTypeConfig;
pub use codegen_config::OperationsLocation;
pub use codegen_config::OutputConfig;
pub use codegen_config::OutputOptions;
pub use codegen_config::QueryStringLiteralFormat;
pub use codegen_config::SchemaTypesConfig;
pub use config_error::ConfigError;
pub use entity::Entity;
pub use render_context::ModuleType;
pub use render_context::RenderContext;
pub use render_error::RenderError;

#[cfg(test)]
mod tests;
