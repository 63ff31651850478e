use crate::engine::assignments::Assignments;
use crate::engine::conflict_sets::ConflictSets;
use crate::engine::domain_store::DomainStore;
use crate::engine::variables::Variable;
use crate::engine::weights::ConstraintWeights;
use crate::model::ConstraintModel;

/// Returned by [`forward_check`] when pruning emptied the current domain of a neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DomainWipeout {
    /// The neighbour whose domain became empty.
    pub(crate) variable: Variable,
}

/// Propagates the tentative assignment `variable := value` by pruning every incompatible value
/// from the current domains of the unassigned neighbours of `variable`.
///
/// Every removal is logged in the open trial scope of `domains` and blamed on `variable` in the
/// pruned neighbour's conflict set. When a neighbour's domain becomes empty the weight of the
/// edge between `variable` and that neighbour is incremented and checking stops immediately;
/// the remaining neighbours are left unexamined for this trial. Weights change only on a
/// wipeout, never on an ordinary removal.
pub(crate) fn forward_check(
    model: &ConstraintModel,
    domains: &mut DomainStore,
    assignments: &Assignments,
    conflict_sets: &mut ConflictSets,
    weights: &mut ConstraintWeights,
    variable: Variable,
    value: i32,
) -> Result<(), DomainWipeout> {
    for &neighbour in model.neighbours(variable) {
        if assignments.is_assigned(neighbour) {
            continue;
        }

        let mut position = 0;
        while position < domains.size(neighbour) {
            let candidate = domains.values(neighbour)[position];

            if model.compatible(variable, value, neighbour, candidate) {
                position += 1;
            } else {
                domains.prune(neighbour, position);
                conflict_sets.record(neighbour, variable);
            }
        }

        if domains.is_wiped_out(neighbour) {
            weights.increment(variable, neighbour);
            return Err(DomainWipeout {
                variable: neighbour,
            });
        }
    }

    Ok(())
}
