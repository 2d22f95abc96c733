//! Helpers shared by the render tests.

use crate::ir::Ir;
use crate::ir::IrBuilder;
use crate::operation::DocumentSetBuilder;
use crate::render::CodegenConfig;
use crate::render::Entity;
use crate::render::ExperimentalFeatures;
use crate::render::InputConfig;
use crate::render::ModuleTypeConfig;
use crate::render::OperationsLocation;
use crate::render::OutputConfig;
use crate::render::OutputOptions;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::SchemaTypesConfig;
use crate::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

/// A `TestSchema` configuration: a Swift package module with operations
/// generated inside it.
pub fn test_config() -> CodegenConfig {
    CodegenConfig {
        experimental_features: ExperimentalFeatures::default(),
        input: InputConfig {
            operation_search_paths: vec![PathBuf::from("./graphql")],
            schema_search_paths: vec![PathBuf::from("./schema.graphqls")],
        },
        options: OutputOptions::default(),
        output: OutputConfig {
            operations: OperationsLocation::InSchemaModule,
            schema_types: SchemaTypesConfig {
                module_type: ModuleTypeConfig {
                    name: None,
                    module_type: "swiftPackageManager".to_string(),
                },
                path: PathBuf::from("Generated"),
            },
        },
        schema_namespace: "TestSchema".to_string(),
    }
}

pub fn module_type(module_type: &str, name: Option<&str>) -> ModuleTypeConfig {
    ModuleTypeConfig {
        name: name.map(str::to_string),
        module_type: module_type.to_string(),
    }
}

pub fn build_ir(schema_sdl: &str, document: &str) -> Ir {
    let schema = SchemaBuilder::new()
        .load_str(None, schema_sdl)
        .unwrap()
        .build()
        .unwrap();
    let compilation = DocumentSetBuilder::new(&schema)
        .add_str(Some(Path::new("graphql/doc.graphql")), document)
        .build()
        .unwrap();
    IrBuilder::new(&compilation).build().unwrap()
}

pub fn try_render_fragment(
    config: &CodegenConfig,
    ir: &Ir,
    fragment_name: &str,
) -> Result<String, RenderError> {
    let ctx = RenderContext::new(config, ir).unwrap();
    Entity::Fragment(ir.fragment(fragment_name).unwrap()).render(&ctx)
}

pub fn render_fragment(config: &CodegenConfig, ir: &Ir, fragment_name: &str) -> String {
    try_render_fragment(config, ir, fragment_name).unwrap()
}

pub fn render_operation(config: &CodegenConfig, ir: &Ir, operation_name: &str) -> String {
    let ctx = RenderContext::new(config, ir).unwrap();
    Entity::Operation(ir.operation(operation_name).unwrap())
        .render(&ctx)
        .unwrap()
}

/// Assert that `expected`, line by line, appears in `actual` starting at the
/// 1-based line `at_line`. Lines of `actual` past the window are ignored.
pub fn assert_lines_at(actual: &str, expected: &str, at_line: usize) {
    let actual_lines = actual.lines().skip(at_line - 1).collect::<Vec<_>>();
    for (offset, expected_line) in expected.lines().enumerate() {
        let line_number = at_line + offset;
        let actual_line = actual_lines.get(offset).unwrap_or_else(|| panic!(
            "expected line {line_number} to be `{expected_line}`, but the output \
            ends before it:\n{actual}",
        ));
        assert_eq!(
            *actual_line,
            expected_line,
            "line {line_number} differs in:\n{actual}",
        );
    }
}

/// Prefix every non-empty line of `text` with `depth` levels of Swift
/// indentation.
pub fn indent(text: &str, depth: usize) -> String {
    let prefix = "  ".repeat(depth);
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{prefix}{line}") })
        .map(|line| line + "\n")
        .collect()
}
