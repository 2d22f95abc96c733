use crate::operation::Fragment;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Every [`Fragment`] defined across a document set, keyed by name.
///
/// Built once by the
/// [`FragmentRegistryBuilder`](crate::operation::FragmentRegistryBuilder)
/// and never mutated afterwards, so it can be read from many threads while
/// spreads are resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry<'schema> {
    pub(super) fragments: BTreeMap<String, Fragment<'schema>>,
}
impl<'schema> FragmentRegistry<'schema> {
    pub fn fragments(&self) -> &BTreeMap<String, Fragment<'schema>> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Option<&Fragment<'schema>> {
        self.fragments.get(fragment_name)
    }

    /// The names of every fragment spread within `selection_set`, including
    /// fragments spread by those fragments, in sorted order.
    pub fn referenced_fragment_names(
        &self,
        selection_set: &SelectionSet<'schema>,
    ) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        self.collect_spreads(selection_set, &mut found);
        found
    }

    fn collect_spreads(
        &self,
        selection_set: &SelectionSet<'schema>,
        found: &mut BTreeSet<String>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                Selection::Field(field) => {
                    if let Some(nested_set) = field.selection_set() {
                        self.collect_spreads(nested_set, found);
                    }
                },
                Selection::InlineFragment(inline) =>
                    self.collect_spreads(inline.selection_set(), found),
                Selection::FragmentSpread(spread) => {
                    if !found.insert(spread.fragment_name().to_string()) {
                        continue;
                    }
                    if let Some(fragment) = self.fragments.get(spread.fragment_name()) {
                        self.collect_spreads(&fragment.selection_set, found);
                    }
                },
            }
        }
    }
}
