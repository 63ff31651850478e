pub(crate) mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! A call to [`Solver::satisfy`] concludes in exactly one of three ways: an assignment was
    //! found ([`SatisfactionResult::Satisfiable`]), the search space was exhausted
    //! ([`SatisfactionResult::Unsatisfiable`]), or a
    //! [`TerminationCondition`](crate::termination::TerminationCondition) triggered first
    //! ([`SatisfactionResult::Unknown`]).
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which determine when the [`Solver`] should give up searching.
    pub use crate::engine::termination::AssignmentBudget;
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the [`Variable`] handle used to refer to the variables of a
    //! [`ConstraintModel`](crate::model::ConstraintModel).
    pub use crate::engine::variables::Variable;
}

pub mod asserts {
    //! Assertion levels used by the internal consistency checks of the solver.
    pub use crate::marconi_asserts::*;
}
