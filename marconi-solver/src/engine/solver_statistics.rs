use crate::create_statistics_struct;

create_statistics_struct!(
    /// Structure responsible for storing statistics of one solving run of the
    /// [`ConstraintSatisfactionSolver`](crate::engine::constraint_satisfaction_solver::ConstraintSatisfactionSolver).
    SolverStatistics {
        /// The number of variable assignments performed by the solver
        num_assignments: u64,
        /// The number of values removed from domains by forward checking
        num_prunings: u64,
        /// The number of domain wipeouts encountered by forward checking
        num_wipeouts: u64,
        /// The number of single-level backtracks performed by the solver
        num_backtracks: u64,
        /// The number of backjumps which skipped at least one level
        num_backjumps: u64,
    }
);
