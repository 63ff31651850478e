use crate::api::outputs::SatisfactionResult;
use crate::branching::variable_selection::DomWdeg;
use crate::branching::variable_selection::VariableSelector;
use crate::engine::constraint_satisfaction_solver::ConstraintSatisfactionSolver;
use crate::engine::constraint_satisfaction_solver::SearchConclusion;
use crate::engine::termination::TerminationCondition;
use crate::model::ConstraintModel;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The solver for frequency-assignment instances.
///
/// A [`Solver`] is constructed from a [`ConstraintModel`] and searches for an assignment with
/// [`Solver::satisfy`]. Every call to [`Solver::satisfy`] is an independent run starting from
/// the model's original domains; the learned constraint weights of a run steer the variable
/// ordering within that run only.
#[derive(Debug)]
pub struct Solver {
    csp_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    pub fn with_model(model: ConstraintModel) -> Self {
        Solver {
            csp_solver: ConstraintSatisfactionSolver::new(model),
        }
    }

    pub fn model(&self) -> &ConstraintModel {
        self.csp_solver.model()
    }

    /// The dom/wdeg variable ordering over all variables of the model, considering variables in
    /// ascending index order.
    pub fn default_selector(&self) -> DomWdeg {
        let variables = self.model().variables().collect::<Vec<_>>();
        DomWdeg::new(&variables)
    }

    /// Searches for an assignment satisfying every constraint of the model.
    ///
    /// The search runs until it reaches a conclusion or `termination` triggers; in the latter
    /// case [`SatisfactionResult::Unknown`] is returned and nothing can be said about the
    /// instance.
    pub fn satisfy(
        &mut self,
        selector: &mut impl VariableSelector,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        match self.csp_solver.solve(selector, termination) {
            SearchConclusion::Solution(solution) => SatisfactionResult::Satisfiable(solution),
            SearchConclusion::Exhausted => SatisfactionResult::Unsatisfiable,
            SearchConclusion::Cancelled => SatisfactionResult::Unknown,
        }
    }

    /// The number of variable assignments performed by the most recent run, as a measure of
    /// search effort.
    pub fn number_of_assignments(&self) -> u64 {
        self.csp_solver.statistics().num_assignments
    }

    /// Logs the statistics of the most recent run through the configured statistic writer (see
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging)).
    pub fn log_statistics(&self) {
        self.csp_solver
            .statistics()
            .log(StatisticLogger::default());
    }
}
