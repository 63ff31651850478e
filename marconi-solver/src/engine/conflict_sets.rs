use crate::basic_types::HashSet;
use crate::containers::KeyedVec;
use crate::engine::variables::Variable;
use crate::marconi_assert_moderate;

/// For every variable, the set of ancestor variables blamed for pruning its domain.
///
/// The sets only grow during a run: conflict information is accumulated learning, read when a
/// variable exhausts its values to decide how far the search can unwind. A variable never
/// appears in its own conflict set.
#[derive(Debug)]
pub(crate) struct ConflictSets {
    sets: KeyedVec<Variable, HashSet<Variable>>,
}

impl ConflictSets {
    pub(crate) fn new(num_variables: usize) -> Self {
        ConflictSets {
            sets: KeyedVec::filled_with(num_variables, HashSet::default()),
        }
    }

    /// Records that `culprit` pruned a value from the domain of `variable`.
    pub(crate) fn record(&mut self, variable: Variable, culprit: Variable) {
        marconi_assert_moderate!(
            variable != culprit,
            "a variable cannot prune its own domain"
        );

        let _ = self.sets[variable].insert(culprit);
    }

    /// Merges the conflict set of `wiped_out` into the conflict set of `variable`.
    ///
    /// After `variable`'s assignment emptied the domain of `wiped_out`, the failure of
    /// `wiped_out` is attributable to everything that ever pruned it, so `variable` inherits its
    /// accusers. `variable` itself is filtered out of the merge: it pruned `wiped_out` just now
    /// and must not end up in its own set.
    pub(crate) fn absorb(&mut self, variable: Variable, wiped_out: Variable) {
        let inherited = self.sets[wiped_out]
            .iter()
            .copied()
            .filter(|&accuser| accuser != variable)
            .collect::<Vec<_>>();

        self.sets[variable].extend(inherited);
    }

    pub(crate) fn contains(&self, variable: Variable, candidate: Variable) -> bool {
        self.sets[variable].contains(&candidate)
    }
}
