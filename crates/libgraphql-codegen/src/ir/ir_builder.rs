use crate::ir::DirectSelection;
use crate::ir::Field;
use crate::ir::FragmentUse;
use crate::ir::InclusionPredicate;
use crate::ir::Ir;
use crate::ir::IrBuildError;
use crate::ir::MergeConflictReason;
use crate::ir::NamedFragment;
use crate::ir::Operation;
use crate::ir::ParentType;
use crate::ir::ReferencedTypes;
use crate::ir::ScopeKind;
use crate::ir::SelectionSet;
use crate::ir::TypeCase;
use crate::loc;
use crate::operation;
use crate::operation::CompilationResult;
use crate::operation::InclusionCondition;
use crate::operation::Selection;
use crate::schema::Schema;
use crate::types;
use crate::types::GraphQLType;
use crate::Value;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, Vec<IrBuildError>>;

/// Turns a validated [`CompilationResult`] into [`Ir`].
///
/// Each operation and fragment is built independently and only reads from
/// the [`CompilationResult`], so they can be built in parallel.
pub struct IrBuilder<'schema, 'c> {
    cancel: CancellationToken,
    compilation: &'c CompilationResult<'schema>,
    schema: &'schema Schema,
}
impl<'schema, 'c> IrBuilder<'schema, 'c> {
    pub fn new(compilation: &'c CompilationResult<'schema>) -> Self {
        Self {
            cancel: CancellationToken::new(),
            compilation,
            schema: compilation.schema(),
        }
    }

    /// Stop building (with [`IrBuildError::Cancelled`]) once `cancel` is
    /// cancelled. Checked before each fragment and operation.
    pub fn with_cancellation(mut self, cancel: &CancellationToken) -> Self {
        self.cancel = cancel.clone();
        self
    }

    /// Build every fragment and operation along with the referenced type
    /// descriptors.
    pub fn build(&self) -> Result<Ir> {
        let compilation: &'c CompilationResult<'schema> = self.compilation;

        let fragment_results = compilation.fragments()
            .fragments()
            .par_iter()
            .map(|(_, fragment)| {
                self.check_cancelled()?;
                self.build_fragment(fragment)
            })
            .collect::<Vec<_>>();

        let operations = compilation.operations().values().collect::<Vec<_>>();
        let operation_results = operations
            .into_par_iter()
            .map(|operation| {
                self.check_cancelled()?;
                self.build_operation(operation)
            })
            .collect::<Vec<_>>();

        let mut errors = vec![];
        let mut fragments = vec![];
        for result in fragment_results {
            match result {
                Ok(fragment) => fragments.push(fragment),
                Err(mut fragment_errors) => errors.append(&mut fragment_errors),
            }
        }
        let mut built_operations = vec![];
        for result in operation_results {
            match result {
                Ok(operation) => built_operations.push(operation),
                Err(mut operation_errors) => errors.append(&mut operation_errors),
            }
        }

        if errors.contains(&IrBuildError::Cancelled) {
            return Err(vec![IrBuildError::Cancelled]);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "Built IR for {} fragment(s) and {} operation(s).",
            fragments.len(),
            built_operations.len(),
        );

        Ok(Ir::new(fragments, built_operations, self.referenced_types()))
    }

    pub fn build_fragment(
        &self,
        fragment: &'c operation::Fragment<'schema>,
    ) -> Result<NamedFragment> {
        let type_condition = fragment.type_condition();
        let mut entries = Entry::direct_entries(fragment.selection_set());
        if !self.schema.is_root_operation_type(type_condition.name()) {
            entries.push(Entry::typename(true));
        }

        let mut errors = vec![];
        let root = self.build_selection_set(
            ScopeKind::Root,
            type_condition,
            &[],
            entries,
            &mut errors,
        );
        if !errors.is_empty() {
            return Err(dedupe_errors(errors));
        }

        log::trace!("Built IR for fragment `{}`.", fragment.name());
        Ok(NamedFragment {
            definition: fragment.definition().to_owned(),
            name: fragment.name().to_string(),
            referenced_fragments: self.compilation.fragments()
                .referenced_fragment_names(fragment.selection_set()),
            root,
            source_file: fragment.def_location().file().map(Path::to_path_buf),
        })
    }

    pub fn build_operation(
        &self,
        operation: &'c operation::Operation<'schema>,
    ) -> Result<Operation> {
        let mut errors = vec![];
        let root = self.build_selection_set(
            ScopeKind::Root,
            operation.selection_set().parent_type(),
            &[],
            Entry::direct_entries(operation.selection_set()),
            &mut errors,
        );
        if !errors.is_empty() {
            return Err(dedupe_errors(errors));
        }

        log::trace!("Built IR for operation `{}`.", operation.name());
        Ok(Operation {
            definition: operation.definition().to_owned(),
            kind: operation.kind(),
            name: operation.name().to_string(),
            referenced_fragments: self.compilation.fragments()
                .referenced_fragment_names(operation.selection_set()),
            root,
            source_file: operation.def_location().file().map(Path::to_path_buf),
            variables: operation.variables().values().cloned().collect(),
        })
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(vec![IrBuildError::Cancelled]);
        }
        Ok(())
    }

    pub fn referenced_types(&self) -> ReferencedTypes {
        ReferencedTypes::from_schema_types(
            self.schema,
            self.compilation.referenced_types().values().copied(),
        )
    }

    fn build_selection_set(
        &self,
        scope_kind: ScopeKind,
        scope_type: &'schema GraphQLType,
        enclosing_types: &[&'schema GraphQLType],
        entries: Vec<Entry<'c, 'schema>>,
        errors: &mut Vec<IrBuildError>,
    ) -> SelectionSet {
        let mut scope = ScopeState::new(scope_type, enclosing_types);
        for entry in &entries {
            self.collect_entry(&mut scope, entry.to_owned(), errors);
        }

        let mut fields = IndexMap::new();
        for (response_key, occurrences) in scope.field_groups {
            let merged = self.merge_field(
                scope_type,
                response_key.as_str(),
                occurrences,
                errors,
            );
            if let Some(field) = merged {
                fields.insert(response_key, field);
            }
        }

        let mut type_case_enclosing_types = enclosing_types.to_vec();
        type_case_enclosing_types.push(scope_type);
        let mut type_cases = IndexMap::new();
        for (type_name, type_case) in scope.type_cases {
            // A type case sees everything its enclosing scope selects; only
            // the entries routed to it count as written there.
            let mut type_case_entries = entries.iter()
                .map(|entry| Entry {
                    is_direct: false,
                    ..entry.to_owned()
                })
                .collect::<Vec<_>>();
            type_case_entries.extend(type_case.routed);

            let selection_set = self.build_selection_set(
                ScopeKind::TypeCase,
                type_case.graphql_type,
                &type_case_enclosing_types,
                type_case_entries,
                errors,
            );
            type_cases.insert(type_name, TypeCase {
                inclusion: InclusionPredicate::any_of(&type_case.conditions),
                selection_set,
            });
        }

        let fragments = scope.fragments.into_iter()
            .map(|(name, fragment)| (name.to_owned(), FragmentUse {
                inclusion: InclusionPredicate::any_of(&fragment.conditions),
                is_direct: fragment.is_direct,
                name,
            }))
            .collect();

        let direct_selections = if scope.direct.is_empty() {
            None
        } else {
            Some(scope.direct.into_iter().map(|(key, conditions)| {
                let inclusion = InclusionPredicate::any_of(&conditions);
                match key {
                    DirectKey::Field(response_key) =>
                        DirectSelection::Field { inclusion, response_key },
                    DirectKey::Fragment(name) =>
                        DirectSelection::Fragment { inclusion, name },
                    DirectKey::TypeCase(type_name) =>
                        DirectSelection::TypeCase { inclusion, type_name },
                }
            }).collect())
        };

        SelectionSet {
            direct_selections,
            fields,
            fragments,
            parent_type: ParentType {
                kind: scope_type.type_kind(),
                name: scope_type.name().to_string(),
            },
            scope_kind,
            type_cases,
        }
    }

    /// Flatten one entry into `scope`: fields are grouped by response key,
    /// fragments whose type condition the scope satisfies are inlined, and
    /// narrower type conditions are routed to a type case.
    fn collect_entry(
        &self,
        scope: &mut ScopeState<'c, 'schema>,
        entry: Entry<'c, 'schema>,
        errors: &mut Vec<IrBuildError>,
    ) {
        let selection = match entry.kind {
            EntryKind::Selection(selection) => selection,
            EntryKind::Typename => {
                let typename_field = self.schema.field_on(
                    scope.scope_type.name(),
                    "__typename",
                );
                if let Some(schema_field) = typename_field {
                    scope.add_field("__typename", FieldOccurrence {
                        alias: None,
                        arguments: None,
                        conditions: entry.conditions,
                        is_direct: entry.is_direct,
                        location: None,
                        schema_field,
                        selection_set: None,
                    });
                }
                return;
            },
        };

        match selection {
            Selection::Field(field) => {
                let conditions = with_conditions(
                    &entry.conditions,
                    field.inclusion_conditions(),
                );
                scope.add_field(field.response_key(), FieldOccurrence {
                    alias: field.alias(),
                    arguments: Some(field.arguments()),
                    conditions,
                    is_direct: entry.is_direct,
                    location: Some(field.def_location()),
                    schema_field: field.field(),
                    selection_set: field.selection_set(),
                });
            },

            Selection::InlineFragment(inline) => {
                if let Some(condition_type) = inline.type_condition_on(self.schema) {
                    if !self.is_satisfied(scope, condition_type) {
                        self.route_to_type_case(
                            scope,
                            condition_type,
                            inline.inclusion_conditions(),
                            entry,
                        );
                        return;
                    }
                }

                let conditions = with_conditions(
                    &entry.conditions,
                    inline.inclusion_conditions(),
                );
                for nested in inline.selection_set().selections() {
                    self.collect_entry(scope, Entry {
                        conditions: conditions.to_owned(),
                        is_direct: entry.is_direct,
                        kind: EntryKind::Selection(nested),
                    }, errors);
                }
            },

            Selection::FragmentSpread(spread) => {
                let compilation: &'c CompilationResult<'schema> = self.compilation;
                let fragment = match spread.fragment(compilation.fragments()) {
                    Ok(fragment) => fragment,
                    Err(_) => {
                        errors.push(IrBuildError::DanglingFragmentReference {
                            fragment_name: spread.fragment_name().to_string(),
                            location: spread.def_location().to_owned(),
                        });
                        return;
                    },
                };

                if !self.is_satisfied(scope, fragment.type_condition()) {
                    self.route_to_type_case(
                        scope,
                        fragment.type_condition(),
                        spread.inclusion_conditions(),
                        entry,
                    );
                    return;
                }

                let conditions = with_conditions(
                    &entry.conditions,
                    spread.inclusion_conditions(),
                );
                scope.add_fragment(fragment.name(), conditions.to_owned(), entry.is_direct);
                for nested in fragment.selection_set().selections() {
                    self.collect_entry(scope, Entry {
                        conditions: conditions.to_owned(),
                        is_direct: false,
                        kind: EntryKind::Selection(nested),
                    }, errors);
                }
            },
        }
    }

    /// Every value in the scope is of `condition_type` when the scope's type,
    /// or any type condition already entered to reach the scope, is a
    /// sub-type of it.
    fn is_satisfied(
        &self,
        scope: &ScopeState<'c, 'schema>,
        condition_type: &GraphQLType,
    ) -> bool {
        std::iter::once(scope.scope_type)
            .chain(scope.enclosing_types.iter().copied())
            .any(|scope_type| self.schema.is_subtype(scope_type.name(), condition_type.name()))
    }

    /// Some value in the scope could be of `condition_type`.
    fn overlaps(
        &self,
        scope: &ScopeState<'c, 'schema>,
        condition_type: &GraphQLType,
    ) -> bool {
        let mut candidates = self.schema.possible_types(condition_type.name());
        for scope_type in std::iter::once(scope.scope_type).chain(scope.enclosing_types.iter().copied()) {
            let scope_possible_types = self.schema.possible_types(scope_type.name());
            candidates.retain(|type_name| scope_possible_types.contains(type_name));
        }
        !candidates.is_empty()
    }

    fn route_to_type_case(
        &self,
        scope: &mut ScopeState<'c, 'schema>,
        condition_type: &'schema GraphQLType,
        own_conditions: &[InclusionCondition],
        entry: Entry<'c, 'schema>,
    ) {
        if !self.overlaps(scope, condition_type) {
            return;
        }

        let gate = with_conditions(&entry.conditions, own_conditions);
        let type_name = condition_type.name().to_string();
        if entry.is_direct {
            scope.record_direct(DirectKey::TypeCase(type_name.to_owned()), gate.to_owned());
        }

        let type_case = scope.type_cases.entry(type_name).or_insert_with(|| TypeCaseState {
            conditions: vec![],
            graphql_type: condition_type,
            routed: vec![],
        });
        type_case.conditions.push(gate);
        type_case.routed.push(entry);
    }

    fn merge_field(
        &self,
        parent_type: &GraphQLType,
        response_key: &str,
        occurrences: Vec<FieldOccurrence<'c, 'schema>>,
        errors: &mut Vec<IrBuildError>,
    ) -> Option<Field> {
        let first = occurrences.first()?;

        let mut has_conflict = false;
        for other in &occurrences[1..] {
            let reason = if other.schema_field.name() != first.schema_field.name() {
                MergeConflictReason::DifferentFields {
                    field_name1: first.schema_field.name().to_string(),
                    field_name2: other.schema_field.name().to_string(),
                }
            } else if !arguments_equal(first.arguments, other.arguments) {
                MergeConflictReason::DifferentArguments
            } else {
                continue;
            };
            has_conflict = true;

            let location1 = first.location.cloned();
            let location2 = other.location.cloned();
            let unconditional =
                first.conditions.is_empty() && other.conditions.is_empty();
            errors.push(match reason {
                MergeConflictReason::DifferentArguments if !unconditional =>
                    IrBuildError::ConflictingInclusionCondition {
                        location1,
                        location2,
                        parent_type_name: parent_type.name().to_string(),
                        response_key: response_key.to_string(),
                    },
                reason => IrBuildError::MergeConflict {
                    location1,
                    location2,
                    parent_type_name: parent_type.name().to_string(),
                    reason,
                    response_key: response_key.to_string(),
                },
            });
        }
        if has_conflict {
            return None;
        }

        let inclusion = InclusionPredicate::any_of(
            occurrences.iter().map(|occurrence| &occurrence.conditions),
        );
        let is_direct = occurrences.iter().any(|occurrence| occurrence.is_direct);
        let schema_field = first.schema_field;

        let field_type = self.schema.type_named(
            schema_field.type_annotation().innermost_type_name(),
        );
        let selection_set = match field_type {
            Some(field_type) if field_type.is_composite() => {
                // Conditions every occurrence shares already gate the field
                // itself.
                let shared_conditions = inclusion.single_clause().cloned();
                let mut entries = vec![];
                for occurrence in &occurrences {
                    let Some(nested_set) = occurrence.selection_set else {
                        continue;
                    };
                    let conditions: BTreeSet<InclusionCondition> = match &shared_conditions {
                        Some(shared) =>
                            occurrence.conditions.difference(shared).cloned().collect(),
                        None => occurrence.conditions.to_owned(),
                    };
                    entries.extend(nested_set.selections().iter().map(|nested| Entry {
                        conditions: conditions.to_owned(),
                        is_direct: occurrence.is_direct,
                        kind: EntryKind::Selection(nested),
                    }));
                }
                entries.push(Entry::typename(is_direct));

                Some(self.build_selection_set(
                    ScopeKind::Field,
                    field_type,
                    &[],
                    entries,
                    errors,
                ))
            },
            _ => None,
        };

        let deprecation = schema_field.deprecation_state();
        Some(Field {
            alias: first.alias.map(str::to_string),
            arguments: first.arguments.cloned().unwrap_or_default(),
            deprecation_reason: deprecation.reason().map(str::to_string),
            description: schema_field.description().map(str::to_string),
            inclusion,
            is_deprecated: deprecation.is_deprecated(),
            is_direct,
            name: schema_field.name().to_string(),
            response_key: response_key.to_string(),
            selection_set,
            type_annotation: schema_field.type_annotation().to_owned(),
        })
    }
}

/// One thing to flatten into a scope, along with the conjunction of
/// `@include`/`@skip` conditions collected on the way to it.
#[derive(Clone, Debug)]
struct Entry<'c, 'schema> {
    conditions: BTreeSet<InclusionCondition>,
    is_direct: bool,
    kind: EntryKind<'c, 'schema>,
}
impl<'c, 'schema> Entry<'c, 'schema> {
    fn direct_entries(selection_set: &'c operation::SelectionSet<'schema>) -> Vec<Self> {
        selection_set.selections().iter().map(|selection| Self {
            conditions: BTreeSet::new(),
            is_direct: true,
            kind: EntryKind::Selection(selection),
        }).collect()
    }

    fn typename(is_direct: bool) -> Self {
        Self {
            conditions: BTreeSet::new(),
            is_direct,
            kind: EntryKind::Typename,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum EntryKind<'c, 'schema> {
    Selection(&'c Selection<'schema>),
    /// The implicit `__typename` of a non-root scope.
    Typename,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum DirectKey {
    Field(String),
    Fragment(String),
    TypeCase(String),
}

struct FieldOccurrence<'c, 'schema> {
    alias: Option<&'c str>,
    arguments: Option<&'c IndexMap<String, Value>>,
    conditions: BTreeSet<InclusionCondition>,
    is_direct: bool,
    location: Option<&'c loc::SourceLocation>,
    schema_field: &'schema types::Field,
    selection_set: Option<&'c operation::SelectionSet<'schema>>,
}

struct FragmentUseState {
    conditions: Vec<BTreeSet<InclusionCondition>>,
    is_direct: bool,
}

struct TypeCaseState<'c, 'schema> {
    conditions: Vec<BTreeSet<InclusionCondition>>,
    graphql_type: &'schema GraphQLType,
    routed: Vec<Entry<'c, 'schema>>,
}

struct ScopeState<'c, 'schema> {
    direct: IndexMap<DirectKey, Vec<BTreeSet<InclusionCondition>>>,
    enclosing_types: Vec<&'schema GraphQLType>,
    field_groups: IndexMap<String, Vec<FieldOccurrence<'c, 'schema>>>,
    fragments: IndexMap<String, FragmentUseState>,
    scope_type: &'schema GraphQLType,
    type_cases: IndexMap<String, TypeCaseState<'c, 'schema>>,
}
impl<'c, 'schema> ScopeState<'c, 'schema> {
    fn new(
        scope_type: &'schema GraphQLType,
        enclosing_types: &[&'schema GraphQLType],
    ) -> Self {
        Self {
            direct: IndexMap::new(),
            enclosing_types: enclosing_types.to_vec(),
            field_groups: IndexMap::new(),
            fragments: IndexMap::new(),
            scope_type,
            type_cases: IndexMap::new(),
        }
    }

    fn add_field(&mut self, response_key: &str, occurrence: FieldOccurrence<'c, 'schema>) {
        if occurrence.is_direct {
            self.record_direct(
                DirectKey::Field(response_key.to_string()),
                occurrence.conditions.to_owned(),
            );
        }
        self.field_groups
            .entry(response_key.to_string())
            .or_default()
            .push(occurrence);
    }

    fn add_fragment(
        &mut self,
        fragment_name: &str,
        conditions: BTreeSet<InclusionCondition>,
        is_direct: bool,
    ) {
        if is_direct {
            self.record_direct(
                DirectKey::Fragment(fragment_name.to_string()),
                conditions.to_owned(),
            );
        }
        let fragment = self.fragments
            .entry(fragment_name.to_string())
            .or_insert_with(|| FragmentUseState {
                conditions: vec![],
                is_direct: false,
            });
        fragment.conditions.push(conditions);
        fragment.is_direct |= is_direct;
    }

    fn record_direct(&mut self, key: DirectKey, conditions: BTreeSet<InclusionCondition>) {
        self.direct.entry(key).or_default().push(conditions);
    }
}

fn arguments_equal(
    args1: Option<&IndexMap<String, Value>>,
    args2: Option<&IndexMap<String, Value>>,
) -> bool {
    match (args1, args2) {
        (Some(args1), Some(args2)) => args1 == args2,
        (Some(args), None) | (None, Some(args)) => args.is_empty(),
        (None, None) => true,
    }
}

fn dedupe_errors(errors: Vec<IrBuildError>) -> Vec<IrBuildError> {
    let mut deduped = Vec::with_capacity(errors.len());
    for error in errors {
        if !deduped.contains(&error) {
            deduped.push(error);
        }
    }
    deduped
}

fn with_conditions(
    conditions: &BTreeSet<InclusionCondition>,
    additional: &[InclusionCondition],
) -> BTreeSet<InclusionCondition> {
    let mut combined = conditions.to_owned();
    combined.extend(additional.iter().cloned());
    combined
}

