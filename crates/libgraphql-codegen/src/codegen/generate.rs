use crate::codegen::CodegenError;
use crate::codegen::CodegenRequest;
use crate::codegen::GeneratedOutput;
use crate::codegen::SchemaSource;
use crate::ir::IrBuildError;
use crate::ir::IrBuilder;
use crate::operation::DocumentSetBuilder;
use crate::render::CodegenConfig;
use crate::render::Entity;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, Vec<CodegenError>>;

/// Compile the request's schema and documents and render every generated
/// file.
///
/// Nothing is returned unless the whole run succeeds: a schema error stops
/// the run immediately, while validation and render errors are collected
/// across every document and entity and returned together.
///
/// `cancel` is checked before each stage, before building each operation
/// and fragment, and before rendering each entity.
pub fn generate(
    request: &CodegenRequest,
    config: &CodegenConfig,
    cancel: &CancellationToken,
) -> Result<GeneratedOutput> {
    config.validate().map_err(|errors| {
        errors.into_iter().map(CodegenError::from).collect::<Vec<_>>()
    })?;

    check_cancelled(cancel)?;
    let schema = build_schema(request)?;
    log::debug!("Built a schema with {} types.", schema.all_types().len());

    check_cancelled(cancel)?;
    let (compilation, document_errors) = request.documents().iter()
        .fold(DocumentSetBuilder::new(&schema), |builder, document| {
            builder.add_str(document.file_path.as_deref(), document.text.as_str())
        })
        .build_partial();

    // Merge conflicts in whatever did validate are reported together with
    // the document errors.
    check_cancelled(cancel)?;
    let ir_result = IrBuilder::new(&compilation)
        .with_cancellation(cancel)
        .build();
    let mut validation_errors = into_codegen_errors(document_errors);
    let ir = match ir_result {
        Ok(ir) => ir,
        Err(ir_errors) if ir_errors.contains(&IrBuildError::Cancelled) =>
            return Err(vec![CodegenError::Cancelled]),
        Err(ir_errors) => {
            validation_errors.extend(into_codegen_errors(ir_errors));
            return Err(validation_errors);
        },
    };
    if !validation_errors.is_empty() {
        return Err(validation_errors);
    }

    check_cancelled(cancel)?;
    let ctx = RenderContext::new(config, &ir).map_err(|err| vec![err.into()])?;
    let entities = Entity::all(&ir);
    log::debug!("Rendering {} entities...", entities.len());
    let rendered = entities.par_iter()
        .map(|entity| {
            if cancel.is_cancelled() {
                return Err(CodegenError::Cancelled);
            }
            let text = entity.render(&ctx)?;
            log::trace!("Rendered `{}`.", entity.name());
            Ok((entity.name(), entity.output_path(&ctx), text))
        })
        .collect::<Vec<_>>();

    let mut errors = vec![];
    let mut files = BTreeMap::<PathBuf, (&str, String)>::new();
    for result in rendered {
        let (entity_name, path, text) = match result {
            Ok(rendered) => rendered,
            Err(CodegenError::Cancelled) => return Err(vec![CodegenError::Cancelled]),
            Err(err) => {
                errors.push(err);
                continue;
            },
        };
        if let Some((existing_name, _)) = files.get(&path) {
            errors.push(CodegenError::Render(RenderError::DuplicateOutputPath {
                entity_name1: existing_name.to_string(),
                entity_name2: entity_name.to_string(),
                path,
            }));
            continue;
        }
        files.insert(path, (entity_name, text));
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    check_cancelled(cancel)?;

    log::debug!("Generated {} files.", files.len());
    Ok(GeneratedOutput {
        files: files.into_iter()
            .map(|(path, (_, text))| (path, text))
            .collect(),
    })
}

fn build_schema(request: &CodegenRequest) -> Result<Schema> {
    let mut builder = SchemaBuilder::new();
    for source in request.schema_sources() {
        builder = match source {
            SchemaSource::IntrospectionJson(source) => builder.load_introspection_json(
                source.file_path.as_deref(),
                source.text.as_str(),
            ),
            SchemaSource::Sdl(source) => builder.load_str(
                source.file_path.as_deref(),
                source.text.as_str(),
            ),
        }.map_err(|err| vec![err.into()])?;
    }
    builder.build().map_err(|err| vec![err.into()])
}

fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        log::debug!("Code generation was cancelled.");
        return Err(vec![CodegenError::Cancelled]);
    }
    Ok(())
}

fn into_codegen_errors<E: Into<CodegenError>>(errors: Vec<E>) -> Vec<CodegenError> {
    errors.into_iter().map(Into::into).collect()
}
