use crate::operation::DocumentBuildError;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Vec<DocumentBuildError>>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Soundness {
    Sound,
    Unsound,
    Visiting,
}

/// Collects [`Fragment`]s one at a time and then validates them as a whole
/// (spread cycles, dangling spreads) to produce an immutable
/// [`FragmentRegistry`].
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder<'schema> {
    fragments: BTreeMap<String, Fragment<'schema>>,
}
impl<'schema> FragmentRegistryBuilder<'schema> {
    /// Add a [`Fragment`]. Fails if a fragment with the same name was
    /// already added.
    pub fn add_fragment(
        &mut self,
        fragment: Fragment<'schema>,
    ) -> std::result::Result<(), DocumentBuildError> {
        if let Some(existing) = self.fragments.get(fragment.name()) {
            return Err(DocumentBuildError::DuplicateFragment {
                fragment_name: fragment.name.to_string(),
                location1: existing.def_location.to_owned(),
                location2: fragment.def_location.to_owned(),
            });
        }

        self.fragments.insert(fragment.name.to_string(), fragment);
        Ok(())
    }

    /// Validate every added fragment and produce the [`FragmentRegistry`].
    ///
    /// All cycle and dangling-spread errors are reported together. A cycle
    /// is reported once no matter which of its fragments it was reached
    /// from.
    pub fn build(self) -> Result<FragmentRegistry<'schema>> {
        let (registry, errors) = self.build_partial();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(registry)
    }

    /// Like [`build`](Self::build), but also returns a registry holding the
    /// fragments that are sound: fragments that are not part of a spread
    /// cycle and whose spreads (transitively) all name sound fragments.
    pub fn build_partial(mut self) -> (FragmentRegistry<'schema>, Vec<DocumentBuildError>) {
        let mut errors = self.validate_no_cycles();
        errors.extend(self.validate_fragment_references());

        if !errors.is_empty() {
            let mut soundness = HashMap::new();
            let fragment_names = self.fragments.keys().cloned().collect::<Vec<_>>();
            for fragment_name in &fragment_names {
                self.is_sound(fragment_name, &mut soundness);
            }
            self.fragments.retain(|name, _| soundness.get(name) == Some(&Soundness::Sound));
        }

        (FragmentRegistry { fragments: self.fragments }, errors)
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment reached again while it is still being visited is on a
    /// cycle, so everything visiting it is unsound too.
    fn is_sound(
        &self,
        fragment_name: &str,
        soundness: &mut HashMap<String, Soundness>,
    ) -> bool {
        match soundness.get(fragment_name) {
            Some(Soundness::Sound) => return true,
            Some(Soundness::Unsound | Soundness::Visiting) => return false,
            None => (),
        }
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return false;
        };

        soundness.insert(fragment_name.to_string(), Soundness::Visiting);
        let mut spread_names = vec![];
        collect_spread_names(&fragment.selection_set, &mut spread_names);
        let sound = spread_names.iter()
            .all(|spread_name| self.is_sound(spread_name, soundness));
        soundness.insert(
            fragment_name.to_string(),
            if sound { Soundness::Sound } else { Soundness::Unsound },
        );
        sound
    }

    fn validate_no_cycles(&self) -> Vec<DocumentBuildError> {
        let mut errors = vec![];
        let mut seen_normalized_cycles = HashSet::new();

        for fragment_name in self.fragments.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut errors,
                &mut seen_normalized_cycles,
            );
        }

        errors
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<DocumentBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            let cycle_start = path.iter()
                .position(|name| name == fragment_name)
                .unwrap_or(0);
            let mut cycle = path[cycle_start..].to_vec();
            cycle.push(fragment_name.to_string());

            let normalized = Self::normalize_cycle(&cycle);
            if seen_normalized.insert(normalized.clone()) {
                let location = normalized.first()
                    .and_then(|name| self.fragments.get(name))
                    .map(|fragment| fragment.def_location.to_owned());
                errors.push(DocumentBuildError::FragmentCycle {
                    cycle_path: normalized,
                    location,
                });
            }
            return;
        }

        // Dangling spreads are reported by `validate_fragment_references`.
        let Some(fragment) = self.fragments.get(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());

        self.check_selection_set_cycles(
            &fragment.selection_set,
            path,
            visiting,
            errors,
            seen_normalized,
        );

        path.pop();
        visiting.remove(fragment_name);
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &SelectionSet<'schema>,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<DocumentBuildError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                Selection::FragmentSpread(spread) => self.check_fragment_cycles(
                    spread.fragment_name(),
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                Selection::InlineFragment(inline) => self.check_selection_set_cycles(
                    inline.selection_set(),
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),

                Selection::Field(field) => {
                    if let Some(nested_set) = field.selection_set() {
                        self.check_selection_set_cycles(
                            nested_set,
                            path,
                            visiting,
                            errors,
                            seen_normalized,
                        );
                    }
                },
            }
        }
    }

    fn validate_fragment_references(&self) -> Vec<DocumentBuildError> {
        let mut errors = vec![];
        for fragment in self.fragments.values() {
            self.check_fragment_refs_in_selection_set(
                &fragment.selection_set,
                &mut errors,
            );
        }
        errors
    }

    fn check_fragment_refs_in_selection_set(
        &self,
        selection_set: &SelectionSet<'schema>,
        errors: &mut Vec<DocumentBuildError>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                Selection::FragmentSpread(spread) => {
                    if !self.fragments.contains_key(spread.fragment_name()) {
                        errors.push(DocumentBuildError::UndefinedFragment {
                            fragment_name: spread.fragment_name().to_string(),
                            location: spread.def_location.to_owned(),
                        });
                    }
                },

                Selection::InlineFragment(inline) =>
                    self.check_fragment_refs_in_selection_set(
                        inline.selection_set(),
                        errors,
                    ),

                Selection::Field(field) => {
                    if let Some(nested_set) = field.selection_set() {
                        self.check_fragment_refs_in_selection_set(
                            nested_set,
                            errors,
                        );
                    }
                },
            }
        }
    }

    /// Rotate a cycle (`[B, C, A, B]`) so that it starts with its
    /// lexicographically smallest fragment name (`[A, B, C, A]`).
    fn normalize_cycle(cycle: &[String]) -> Vec<String> {
        if cycle.len() < 2 {
            return cycle.to_vec();
        }

        let cycle_without_repeat = &cycle[..cycle.len() - 1];
        let min_idx = cycle_without_repeat.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let mut normalized = vec![];
        normalized.extend_from_slice(&cycle_without_repeat[min_idx..]);
        normalized.extend_from_slice(&cycle_without_repeat[..min_idx]);
        normalized.push(normalized[0].clone());
        normalized
    }
}

fn collect_spread_names<'a>(selection_set: &'a SelectionSet<'_>, found: &mut Vec<&'a str>) {
    for selection in &selection_set.selections {
        match selection {
            Selection::FragmentSpread(spread) => found.push(spread.fragment_name()),
            Selection::InlineFragment(inline) =>
                collect_spread_names(inline.selection_set(), found),
            Selection::Field(field) => {
                if let Some(nested_set) = field.selection_set() {
                    collect_spread_names(nested_set, found);
                }
            },
        }
    }
}
