use crate::ir::Ir;
use crate::render::CodegenConfig;
use crate::render::OperationsLocation;
use crate::render::RenderError;

/// How the generated schema module is packaged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleType {
    /// Schema types are declared inside a namespace in the application's
    /// own target.
    EmbeddedInTarget,

    /// Schema types live in a module linked into the application by other
    /// means.
    Other,

    /// Schema types live in their own Swift package.
    SwiftPackageManager,
}
impl ModuleType {
    fn from_config_str(module_type: &str) -> Option<Self> {
        match module_type {
            "embeddedInTarget" => Some(Self::EmbeddedInTarget),
            "other" => Some(Self::Other),
            "swiftPackageManager" => Some(Self::SwiftPackageManager),
            _ => None,
        }
    }
}

/// Everything a template may consult: the built [`Ir`] and the resolved
/// configuration.
///
/// A context is built once per run and shared (immutably) by every
/// template.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    config: &'a CodegenConfig,
    ir: &'a Ir,
    module_name: Option<&'a str>,
    module_type: ModuleType,
}
impl<'a> RenderContext<'a> {
    pub fn new(config: &'a CodegenConfig, ir: &'a Ir) -> Result<Self, RenderError> {
        let module_config = &config.output.schema_types.module_type;
        let module_type = ModuleType::from_config_str(module_config.module_type.as_str())
            .ok_or_else(|| RenderError::UnknownModuleType {
                module_type: module_config.module_type.to_string(),
            })?;

        let configured_name = module_config.name.as_deref()
            .filter(|name| !name.trim().is_empty());
        let module_name = match module_type {
            ModuleType::EmbeddedInTarget => Some(configured_name.ok_or_else(|| {
                RenderError::MissingModuleName {
                    module_type: module_config.module_type.to_string(),
                }
            })?),
            ModuleType::Other => configured_name,
            ModuleType::SwiftPackageManager =>
                Some(configured_name.unwrap_or(config.schema_namespace.as_str())),
        };

        Ok(Self {
            config,
            ir,
            module_name,
            module_type,
        })
    }

    pub fn config(&self) -> &'a CodegenConfig {
        self.config
    }

    /// The import lines every operation and fragment file starts with.
    ///
    /// The schema module is only imported when operations are generated
    /// outside of it and it is a separately linked module.
    pub fn operation_imports(&self) -> Vec<String> {
        let mut imports = vec!["import ApolloAPI".to_string()];
        if self.config.output.operations == OperationsLocation::InSchemaModule {
            return imports;
        }
        match (self.module_type, self.module_name) {
            (ModuleType::SwiftPackageManager | ModuleType::Other, Some(module_name)) =>
                imports.push(format!("import {module_name}")),
            _ => (),
        }
        imports
    }

    pub fn ir(&self) -> &'a Ir {
        self.ir
    }

    pub fn is_embedded_in_target(&self) -> bool {
        self.module_type == ModuleType::EmbeddedInTarget
    }

    pub fn module_name(&self) -> Option<&'a str> {
        self.module_name
    }

    pub fn module_type(&self) -> ModuleType {
        self.module_type
    }

    /// The name generated code uses to qualify schema types.
    pub fn schema_namespace(&self) -> &'a str {
        self.config.schema_namespace.as_str()
    }

    /// `name` qualified by the schema namespace.
    pub fn schema_type_ref(&self, name: &str) -> String {
        format!("{}.{name}", self.schema_namespace())
    }
}
