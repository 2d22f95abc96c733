use crate::operation::InclusionCondition;
use std::collections::BTreeSet;

/// The runtime condition under which a merged selection is present in a
/// response.
///
/// A predicate is a disjunction of clauses where each clause is a
/// conjunction of [`InclusionCondition`]s. A selection that was written
/// unconditionally anywhere in a scope is always present, which is
/// represented by a single empty clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InclusionPredicate {
    clauses: BTreeSet<BTreeSet<InclusionCondition>>,
}
impl InclusionPredicate {
    pub fn always() -> Self {
        Self {
            clauses: BTreeSet::from([BTreeSet::new()]),
        }
    }

    /// OR together a set of conjunctions.
    ///
    /// Clauses implied by a weaker clause are dropped, so `$a || ($a && $b)`
    /// collapses to `$a` and anything OR'd with an unconditional clause is
    /// [`always()`](Self::always).
    pub fn any_of<'a>(
        conjunctions: impl IntoIterator<Item = &'a BTreeSet<InclusionCondition>>,
    ) -> Self {
        let mut candidates = conjunctions.into_iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        candidates.sort_by_key(|clause| clause.len());

        let mut clauses: BTreeSet<BTreeSet<InclusionCondition>> = BTreeSet::new();
        for candidate in candidates {
            if clauses.iter().any(|kept| kept.is_subset(&candidate)) {
                continue;
            }
            clauses.insert(candidate);
        }

        if clauses.is_empty() {
            return Self::always();
        }
        Self { clauses }
    }

    pub fn clauses(&self) -> &BTreeSet<BTreeSet<InclusionCondition>> {
        &self.clauses
    }

    pub fn is_always(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The one conjunction this predicate consists of, if it is a single
    /// clause with at least one condition.
    pub fn single_clause(&self) -> Option<&BTreeSet<InclusionCondition>> {
        if self.clauses.len() != 1 || self.is_always() {
            return None;
        }
        self.clauses.first()
    }
}
impl std::default::Default for InclusionPredicate {
    fn default() -> Self {
        Self::always()
    }
}
impl std::fmt::Display for InclusionPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_always() {
            return write!(f, "true");
        }

        let multi_clause = self.clauses.len() > 1;
        let rendered_clauses = self.clauses.iter().map(|clause| {
            let conjunction = clause.iter()
                .map(|condition| condition.to_string())
                .collect::<Vec<_>>()
                .join(" && ");
            if multi_clause && clause.len() > 1 {
                format!("({conjunction})")
            } else {
                conjunction
            }
        }).collect::<Vec<_>>();

        write!(f, "{}", rendered_clauses.join(" || "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(conditions: &[InclusionCondition]) -> BTreeSet<InclusionCondition> {
        conditions.iter().cloned().collect()
    }

    #[test]
    fn empty_input_is_always() {
        let predicate = InclusionPredicate::any_of(std::iter::empty());
        assert!(predicate.is_always());
        assert_eq!(predicate.to_string(), "true");
    }

    #[test]
    fn unconditional_clause_absorbs_everything() {
        let predicate = InclusionPredicate::any_of(&[
            clause(&[InclusionCondition::include("a")]),
            clause(&[]),
        ]);
        assert_eq!(predicate, InclusionPredicate::always());
    }

    #[test]
    fn disjoint_clauses_are_ored() {
        let predicate = InclusionPredicate::any_of(&[
            clause(&[InclusionCondition::include("b")]),
            clause(&[InclusionCondition::include("a")]),
        ]);
        assert_eq!(predicate.to_string(), "$a || $b");
        assert!(predicate.single_clause().is_none());
    }

    #[test]
    fn weaker_clause_absorbs_stronger_clause() {
        let predicate = InclusionPredicate::any_of(&[
            clause(&[InclusionCondition::include("a"), InclusionCondition::skip("b")]),
            clause(&[InclusionCondition::include("a")]),
        ]);
        assert_eq!(predicate.to_string(), "$a");
        assert_eq!(
            predicate.single_clause(),
            Some(&clause(&[InclusionCondition::include("a")])),
        );
    }

    #[test]
    fn conjunctions_are_parenthesized_within_disjunctions() {
        let predicate = InclusionPredicate::any_of(&[
            clause(&[InclusionCondition::include("a"), InclusionCondition::skip("b")]),
            clause(&[InclusionCondition::include("c")]),
        ]);
        assert_eq!(predicate.to_string(), "($a && !$b) || $c");
    }
}
