use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::CompilationResult;
use crate::operation::DocumentBuildError;
use crate::operation::FragmentBuilder;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::Operation;
use crate::operation::OperationBuilder;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::selection_set_builder::FragmentTypeConditions;
use crate::schema::Schema;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

#[derive(Clone, Debug)]
struct SourceDocument {
    content: String,
    file_path: Option<PathBuf>,
}

/// Collects executable documents (operations and fragments, possibly spread
/// across many files) and validates them together against a [`Schema`].
///
/// Fragments are resolved by name across the whole set, so the order in
/// which documents are added does not affect the [`CompilationResult`].
#[derive(Debug)]
pub struct DocumentSetBuilder<'schema> {
    documents: Vec<SourceDocument>,
    schema: &'schema Schema,
}
impl<'schema> DocumentSetBuilder<'schema> {
    /// Add a document's text. `file_path` is only used to report where
    /// problems were found.
    pub fn add_str(
        mut self,
        file_path: Option<&Path>,
        content: impl Into<String>,
    ) -> Self {
        self.documents.push(SourceDocument {
            content: content.into(),
            file_path: file_path.map(|path| path.to_path_buf()),
        });
        self
    }

    /// Parse and validate every added document.
    ///
    /// Documents are parsed in parallel. If any of them fails to parse, only
    /// the parse errors are returned. Otherwise every validation error found
    /// across the whole document set is returned at once.
    pub fn build(self) -> Result<CompilationResult<'schema>> {
        let (compilation_result, errors) = self.build_partial();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(compilation_result)
    }

    /// Like [`build`](Self::build), but also returns whatever did validate.
    ///
    /// The [`CompilationResult`] holds each operation and fragment that is
    /// valid and whose spread fragments are all valid, so later stages can
    /// still report their own errors for those.
    pub fn build_partial(self) -> (CompilationResult<'schema>, Vec<DocumentBuildError>) {
        let parsed_documents = self.documents
            .par_iter()
            .map(|doc| {
                ast::operation::parse(doc.content.as_str())
                    .map(|ast_doc| (doc.file_path.as_deref(), ast_doc))
                    .map_err(|err| DocumentBuildError::ParseError {
                        file: doc.file_path.to_owned(),
                        err: err.to_string(),
                    })
            })
            .collect::<Vec<_>>();

        let mut errors = vec![];
        let mut documents = vec![];
        for parsed in parsed_documents {
            match parsed {
                Ok(document) => documents.push(document),
                Err(err) => errors.push(err),
            }
        }
        if !errors.is_empty() {
            let empty_result = CompilationResult::new(
                self.schema,
                IndexMap::new(),
                FragmentRegistry::default(),
            );
            return (empty_result, errors);
        }

        let mut fragment_defs = vec![];
        let mut operation_defs = vec![];
        for (file_path, ast_doc) in &documents {
            for def in &ast_doc.definitions {
                match def {
                    ast::operation::Definition::Fragment(frag_def) =>
                        fragment_defs.push((*file_path, frag_def)),
                    ast::operation::Definition::Operation(op_def) =>
                        operation_defs.push((*file_path, op_def)),
                }
            }
        }

        let mut fragment_type_conditions = FragmentTypeConditions::new();
        for (_, frag_def) in &fragment_defs {
            let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
            let type_condition = self.schema
                .type_named(type_name.as_str())
                .filter(|graphql_type| graphql_type.is_composite());
            fragment_type_conditions
                .entry(frag_def.name.to_string())
                .or_insert(type_condition);
        }

        let fragment_results = fragment_defs
            .par_iter()
            .map(|(file_path, frag_def)| FragmentBuilder::from_ast(
                self.schema,
                &fragment_type_conditions,
                frag_def,
                *file_path,
            ))
            .collect::<Vec<_>>();

        let mut registry_builder = FragmentRegistryBuilder::new();
        for fragment_result in fragment_results {
            match fragment_result {
                Ok(fragment) => {
                    if let Err(err) = registry_builder.add_fragment(fragment) {
                        errors.push(err);
                    }
                },
                Err(mut fragment_errors) => errors.append(&mut fragment_errors),
            }
        }
        let (fragment_registry, mut registry_errors) = registry_builder.build_partial();
        errors.append(&mut registry_errors);

        let operation_results = operation_defs
            .par_iter()
            .map(|(file_path, op_def)| OperationBuilder::from_ast(
                self.schema,
                &fragment_type_conditions,
                op_def,
                *file_path,
            ))
            .collect::<Vec<_>>();

        let mut operations = IndexMap::<String, Operation<'schema>>::new();
        for operation_result in operation_results {
            match operation_result {
                Ok(operation) => {
                    if let Some(existing) = operations.get(operation.name()) {
                        errors.push(DocumentBuildError::DuplicateOperation {
                            operation_name: operation.name.to_string(),
                            location1: existing.def_location.to_owned(),
                            location2: operation.def_location.to_owned(),
                        });
                        continue;
                    }
                    operations.insert(operation.name.to_string(), operation);
                },
                Err(mut operation_errors) => errors.append(&mut operation_errors),
            }
        }

        // Variable usages can only be checked through fragments that were
        // kept; an operation spreading a dropped fragment is dropped too.
        operations.retain(|_, operation| {
            let spreads_only_kept_fragments = fragment_registry
                .referenced_fragment_names(&operation.selection_set)
                .iter()
                .all(|fragment_name| fragment_registry.get(fragment_name).is_some());
            if !spreads_only_kept_fragments {
                return false;
            }
            let variable_errors = check_variable_usages(operation, &fragment_registry);
            let is_valid = variable_errors.is_empty();
            errors.extend(variable_errors);
            is_valid
        });

        operations.sort_keys();

        let compilation_result = CompilationResult::new(
            self.schema,
            operations,
            fragment_registry,
        );
        log::debug!(
            "Compiled {} operation(s) and {} fragment(s) referencing {} schema type(s).",
            compilation_result.operations().len(),
            compilation_result.fragments().fragments().len(),
            compilation_result.referenced_types().len(),
        );
        (compilation_result, errors)
    }

    /// Read a document from disk and add it.
    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> std::result::Result<Self, DocumentBuildError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_source(file_path)
            .map_err(|err| DocumentBuildError::DocumentFileReadError(Box::new(err)))?;
        Ok(self.add_str(Some(file_path), content))
    }

    pub fn load_files(
        self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> std::result::Result<Self, DocumentBuildError> {
        let mut builder = self;
        for file_path in file_paths {
            builder = builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            documents: vec![],
            schema,
        }
    }
}

/// Report each variable that `operation` (or a fragment it spreads) uses but
/// that the operation does not declare.
fn check_variable_usages<'schema>(
    operation: &Operation<'schema>,
    fragment_registry: &FragmentRegistry<'schema>,
) -> Vec<DocumentBuildError> {
    let mut usages = vec![];
    let mut visited_fragments = HashSet::new();
    collect_variable_usages(
        &operation.selection_set,
        fragment_registry,
        &mut visited_fragments,
        &mut usages,
    );

    let mut reported = HashSet::new();
    usages.into_iter()
        .filter(|(var_name, _)| !operation.variables.contains_key(var_name))
        .filter(|(var_name, _)| reported.insert(var_name.to_string()))
        .map(|(variable_name, location)| DocumentBuildError::UndefinedVariable {
            location,
            operation_name: operation.name.to_string(),
            variable_name,
        })
        .collect()
}

fn collect_variable_usages<'schema>(
    selection_set: &SelectionSet<'schema>,
    fragment_registry: &FragmentRegistry<'schema>,
    visited_fragments: &mut HashSet<String>,
    usages: &mut Vec<(String, loc::SourceLocation)>,
) {
    for selection in &selection_set.selections {
        for condition in selection.inclusion_conditions() {
            usages.push((
                condition.variable().to_string(),
                selection.def_location().to_owned(),
            ));
        }

        match selection {
            Selection::Field(field) => {
                for value in field.arguments().values() {
                    for var_name in value.variable_names() {
                        usages.push((
                            var_name.to_string(),
                            field.def_location().to_owned(),
                        ));
                    }
                }
                if let Some(nested_set) = field.selection_set() {
                    collect_variable_usages(
                        nested_set,
                        fragment_registry,
                        visited_fragments,
                        usages,
                    );
                }
            },

            Selection::InlineFragment(inline) => collect_variable_usages(
                inline.selection_set(),
                fragment_registry,
                visited_fragments,
                usages,
            ),

            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name().to_string()) {
                    continue;
                }
                if let Ok(fragment) = spread.fragment(fragment_registry) {
                    collect_variable_usages(
                        fragment.selection_set(),
                        fragment_registry,
                        visited_fragments,
                        usages,
                    );
                }
            },
        }
    }
}
