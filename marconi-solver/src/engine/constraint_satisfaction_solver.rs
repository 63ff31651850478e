use log::debug;

use crate::basic_types::Solution;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::engine::assignments::Assignments;
use crate::engine::conflict_sets::ConflictSets;
use crate::engine::domain_store::DomainStore;
use crate::engine::forward_checking::forward_check;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::Variable;
use crate::engine::weights::ConstraintWeights;
use crate::marconi_assert_simple;
use crate::model::ConstraintModel;

/// The conclusion of one search run.
#[derive(Debug)]
pub(crate) enum SearchConclusion {
    /// A complete assignment satisfying every constraint was found.
    Solution(Solution),
    /// The search space was exhausted without finding an assignment.
    Exhausted,
    /// A [`TerminationCondition`] triggered before the search reached a conclusion.
    Cancelled,
}

/// One level of the search: the variable branched on at this level and the candidate values
/// which have not been tried yet.
///
/// The candidates are a snapshot of the variable's current domain taken when the level was
/// opened; pruning by deeper levels does not change which values this level still tries, the
/// conflict recheck before every trial covers that.
#[derive(Debug)]
struct Frame {
    variable: Variable,
    values: std::vec::IntoIter<i32>,
}

impl Frame {
    fn new(variable: Variable, candidates: Vec<i32>) -> Self {
        Frame {
            variable,
            values: candidates.into_iter(),
        }
    }
}

/// Solves a frequency-assignment instance by depth-first search with forward checking and
/// conflict-directed backjumping.
///
/// The search is organised around an explicit stack of [`Frame`]s instead of native recursion,
/// so the memory used per level is a handful of words regardless of the instance size. The
/// currently active frame is kept separately from the stack of suspended ancestors; descending
/// suspends the active frame, unwinding pops ancestors until the frame blamed for the failure
/// becomes active again.
///
/// Every trial (tentative assignment plus the pruning it caused) is undone exactly once on
/// every exit path: when forward checking wipes out a neighbour, when a descendant reports a
/// failure, and when an unwinding passes through the frame. The weight table and the conflict
/// sets are deliberately not rolled back; they accumulate what the run has learned about the
/// instance.
#[derive(Debug)]
pub(crate) struct ConstraintSatisfactionSolver {
    model: ConstraintModel,
    /// The counters of the most recent run.
    statistics: SolverStatistics,
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn new(model: ConstraintModel) -> Self {
        ConstraintSatisfactionSolver {
            model,
            statistics: SolverStatistics::default(),
        }
    }

    pub(crate) fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub(crate) fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Runs the search until a conclusion is reached or `termination` triggers.
    ///
    /// Every run starts from a fresh copy of the model domains and fresh weight/conflict
    /// state; nothing is carried over from previous runs.
    pub(crate) fn solve(
        &mut self,
        selector: &mut impl VariableSelector,
        termination: &mut impl TerminationCondition,
    ) -> SearchConclusion {
        self.statistics = SolverStatistics::default();

        let mut domains = DomainStore::from_model(&self.model);
        let mut assignments = Assignments::new(self.model.num_variables());
        let mut weights = ConstraintWeights::from_model(&self.model);
        let mut conflict_sets = ConflictSets::new(self.model.num_variables());

        let conclusion = self.search(
            &mut domains,
            &mut assignments,
            &mut weights,
            &mut conflict_sets,
            selector,
            termination,
        );

        self.statistics.num_prunings = domains.num_prunings();
        debug!(
            "search finished: {conclusion:?} after {} assignments",
            self.statistics.num_assignments
        );

        conclusion
    }

    fn search(
        &mut self,
        domains: &mut DomainStore,
        assignments: &mut Assignments,
        weights: &mut ConstraintWeights,
        conflict_sets: &mut ConflictSets,
        selector: &mut impl VariableSelector,
        termination: &mut impl TerminationCondition,
    ) -> SearchConclusion {
        if assignments.is_complete() {
            // An instance without variables is trivially satisfied.
            return SearchConclusion::Solution(self.extract_solution(assignments));
        }

        let mut suspended: Vec<Frame> = Vec::new();
        let mut current = self.open_frame(selector, domains, assignments, weights);

        loop {
            if termination.should_stop() {
                return SearchConclusion::Cancelled;
            }

            let Some(value) = current.values.next() else {
                // Every candidate of the current variable failed.
                let Some(resumed) =
                    self.unwind(&mut suspended, current.variable, domains, assignments, conflict_sets)
                else {
                    return SearchConclusion::Exhausted;
                };
                current = resumed;
                continue;
            };

            // The snapshot was taken when the frame was opened, so the candidate may have been
            // ruled out against the assignment in the meantime.
            if self.number_of_conflicts(assignments, current.variable, value) > 0 {
                continue;
            }

            self.statistics.num_assignments += 1;
            termination.assignment_has_been_made();
            assignments.assign(current.variable, value);
            domains.begin_trial();

            match forward_check(
                &self.model,
                domains,
                assignments,
                conflict_sets,
                weights,
                current.variable,
                value,
            ) {
                Ok(()) => {
                    if assignments.is_complete() {
                        return SearchConclusion::Solution(self.extract_solution(assignments));
                    }

                    let next = self.open_frame(selector, domains, assignments, weights);
                    suspended.push(std::mem::replace(&mut current, next));
                }
                Err(wipeout) => {
                    // The wiped-out neighbour's failure is attributable to everything that ever
                    // pruned it; the current variable inherits its accusers before the trial is
                    // undone.
                    self.statistics.num_wipeouts += 1;
                    conflict_sets.absorb(current.variable, wipeout.variable);
                    domains.undo_trial();
                    assignments.unassign(current.variable);
                }
            }
        }
    }

    /// Selects the next variable to branch on and opens a frame for it with a snapshot of its
    /// current domain as the candidate values.
    fn open_frame(
        &self,
        selector: &mut impl VariableSelector,
        domains: &DomainStore,
        assignments: &Assignments,
        weights: &ConstraintWeights,
    ) -> Frame {
        let mut context = SelectionContext::new(&self.model, assignments, domains, weights);
        let Some(variable) = selector.select_variable(&mut context) else {
            unreachable!(
                "the variable selector must return a variable while the assignment is incomplete"
            )
        };

        Frame::new(variable, domains.values(variable).to_vec())
    }

    /// Unwinds the suspended frames after `variable` ran out of candidates.
    ///
    /// The unwind target is the most recently assigned variable in `variable`'s conflict set.
    /// Every frame above the target is discarded and its trial undone; the target frame itself
    /// is resumed (it continues with its next candidate). Without a target the unwind is an
    /// ordinary single-level backtrack to the parent frame. Returns [`None`] when no frame is
    /// left to resume, in which case the instance is unsatisfiable.
    fn unwind(
        &mut self,
        suspended: &mut Vec<Frame>,
        variable: Variable,
        domains: &mut DomainStore,
        assignments: &mut Assignments,
        conflict_sets: &ConflictSets,
    ) -> Option<Frame> {
        let target = assignments
            .newest_first()
            .find(|&ancestor| conflict_sets.contains(variable, ancestor));

        let Some(target) = target else {
            let parent = suspended.pop()?;
            domains.undo_trial();
            assignments.unassign(parent.variable);
            self.statistics.num_backtracks += 1;
            return Some(parent);
        };

        marconi_assert_simple!(
            assignments.is_assigned(target),
            "the unwind target has to be part of the assignment"
        );

        let mut skipped = 0_u64;
        loop {
            let Some(ancestor) = suspended.pop() else {
                unreachable!("the unwind target {target} is not on the search stack")
            };

            domains.undo_trial();
            assignments.unassign(ancestor.variable);

            if ancestor.variable == target {
                if skipped == 0 {
                    self.statistics.num_backtracks += 1;
                } else {
                    self.statistics.num_backjumps += 1;
                    debug!("backjump from {variable} to {target}, skipping {skipped} levels");
                }
                return Some(ancestor);
            }

            skipped += 1;
        }
    }

    /// Counts how many assigned neighbours are incompatible with assigning `value` to
    /// `variable`.
    fn number_of_conflicts(
        &self,
        assignments: &Assignments,
        variable: Variable,
        value: i32,
    ) -> usize {
        self.model
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| match assignments.value(neighbour) {
                Some(assigned) => !self.model.compatible(variable, value, neighbour, assigned),
                None => false,
            })
            .count()
    }

    fn extract_solution(&self, assignments: &Assignments) -> Solution {
        marconi_assert_simple!(assignments.is_complete());

        let mut values = KeyedVec::default();
        for variable in self.model.variables() {
            let Some(value) = assignments.value(variable) else {
                unreachable!("a complete assignment has a value for every variable")
            };
            let _ = values.push(value);
        }

        Solution::new(values)
    }
}
