use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use super::RunnableCommand;
use libgraphql_codegen::codegen;
use libgraphql_codegen::codegen::CodegenError;
use libgraphql_codegen::codegen::CodegenRequest;
use libgraphql_codegen::codegen::GeneratedOutput;
use libgraphql_codegen::render::CodegenConfig;
use libgraphql_codegen::render::DEFAULT_CONFIG_FILE_PATH;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

const DOCUMENT_FILE_EXTS: &[&str] = &["gql", "graphql"];
const SCHEMA_FILE_EXTS: &[&str] = &["graphql", "graphqls", "json"];

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value=DEFAULT_CONFIG_FILE_PATH,
        help="Path to the configuration file. Search paths and output paths \
             in it are relative to the file's directory.",
        long,
        short='p',
    )]
    path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match super::read_config_file(self.path.as_path()) {
            Ok(config) => config,
            Err(err) => return CommandResult::failure(format_args!("{err:#}")),
        };
        let root_dir = self.path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let request = match build_request(&config, root_dir.as_path()) {
            Ok(request) => request,
            Err(err) => return CommandResult::failure(format_args!("{err:#}")),
        };
        log::debug!(
            "Found {} schema file(s) and {} document(s).",
            request.schema_sources().len(),
            request.documents().len(),
        );

        let output = match run_codegen(request, config).await {
            Ok(Ok(output)) => output,
            Ok(Err(errors)) => return CommandResult::failure_list(
                format_args!("Code generation failed with {} error(s):", errors.len()),
                errors.iter().map(format_codegen_error),
            ),
            Err(err) => return CommandResult::failure(format_args!("{err:#}")),
        };

        match write_files(root_dir.as_path(), output) {
            Ok(num_files) => CommandResult::success(format_args!(
                "Generated {num_files} files.",
            )),
            Err(err) => CommandResult::failure(format_args!("{err:#}")),
        }
    }
}

/// Run the pipeline off the async runtime; Ctrl-C cancels it.
async fn run_codegen(
    request: CodegenRequest,
    config: CodegenConfig,
) -> anyhow::Result<Result<GeneratedOutput, Vec<CodegenError>>> {
    let cancel = CancellationToken::new();
    let mut task = tokio::task::spawn_blocking({
        let cancel = cancel.clone();
        move || codegen::generate(&request, &config, &cancel)
    });

    let joined = tokio::select! {
        joined = &mut task => joined,
        _ = tokio::signal::ctrl_c() => {
            log::warn!("Cancelling code generation...");
            cancel.cancel();
            task.await
        },
    };
    joined.context("The code generation task failed")
}

fn build_request(config: &CodegenConfig, root_dir: &Path) -> anyhow::Result<CodegenRequest> {
    let schema_files = find_files(
        root_dir,
        &config.input.schema_search_paths,
        SCHEMA_FILE_EXTS,
    )?;
    if schema_files.is_empty() {
        anyhow::bail!("No schema files were found in the schema search paths.");
    }
    let document_files = find_files(
        root_dir,
        &config.input.operation_search_paths,
        DOCUMENT_FILE_EXTS,
    )?;

    let mut request = CodegenRequest::new();
    for path in &schema_files {
        let text = read_file(root_dir, path)?;
        let is_json = path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        request =
            if is_json {
                request.add_introspection_json(Some(path.as_path()), text)
            } else {
                request.add_schema_sdl(Some(path.as_path()), text)
            };
    }

    // A schema search path may overlap an operation search path.
    for path in document_files.difference(&schema_files) {
        let text = read_file(root_dir, path)?;
        request = request.add_document(Some(path.as_path()), text);
    }

    Ok(request)
}

/// Find every file at or under `search_paths` with one of `extensions`.
/// A search path naming a file directly is used whatever its extension.
///
/// Paths are returned relative to `root_dir`.
fn find_files(
    root_dir: &Path,
    search_paths: &[PathBuf],
    extensions: &[&str],
) -> anyhow::Result<BTreeSet<PathBuf>> {
    let mut found = BTreeSet::new();
    for search_path in search_paths {
        let search_path = root_dir.join(search_path);
        log::debug!("Scanning {search_path:#?}...");
        for entry in WalkDir::new(search_path.as_path()).follow_links(true) {
            let entry = entry
                .with_context(|| format!("Failed to search files under {search_path:#?}"))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }

            let has_extension = path.extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| extensions.iter().any(|known| ext.eq_ignore_ascii_case(known)));
            if has_extension || path == search_path.as_path() {
                log::trace!("Found file at {path:#?}.");
                let relative_path = path.strip_prefix(root_dir).unwrap_or(path);
                found.insert(relative_path.to_path_buf());
            }
        }
    }
    Ok(found)
}

fn format_codegen_error(err: &CodegenError) -> String {
    match err.location() {
        Some(location) => format!("{}: {err} ({location})", err.kind()),
        None => format!("{}: {err}", err.kind()),
    }
}

fn read_file(root_dir: &Path, relative_path: &Path) -> anyhow::Result<String> {
    let path = root_dir.join(relative_path);
    std::fs::read_to_string(path.as_path())
        .with_context(|| format!("Failed to read {path:#?}"))
}

fn write_files(root_dir: &Path, output: GeneratedOutput) -> anyhow::Result<usize> {
    let num_files = output.len();
    for (relative_path, text) in output.into_files() {
        let path = root_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {parent:#?}"))?;
        }
        std::fs::write(path.as_path(), text)
            .with_context(|| format!("Failed to write {path:#?}"))?;
        log::trace!("Wrote {path:#?}.");
    }
    Ok(num_files)
}
