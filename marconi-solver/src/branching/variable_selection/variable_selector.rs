use crate::branching::SelectionContext;
use crate::engine::variables::Variable;

/// A trait containing the interface for variable selectors: the strategy which determines the
/// order in which the solver branches on variables.
pub trait VariableSelector {
    /// Determines which variable to branch on next.
    ///
    /// Should only return [`None`] when all variables which have been passed to the selector
    /// have been assigned; the solver treats a [`None`] while unassigned variables remain as a
    /// contract violation. A variable whose current domain is empty may be returned so that the
    /// solver observes the dead end immediately.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Variable>;
}
