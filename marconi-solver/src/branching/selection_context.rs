use crate::engine::assignments::Assignments;
use crate::engine::domain_store::DomainStore;
use crate::engine::variables::Variable;
use crate::engine::weights::ConstraintWeights;
use crate::model::ConstraintModel;

/// The context provided to a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector).
///
/// It gives a read-only view of the search state: which variables are assigned, the size of the
/// current (pruned) domains, the neighbour relation, and the learned constraint weights.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    model: &'a ConstraintModel,
    assignments: &'a Assignments,
    domains: &'a DomainStore,
    weights: &'a ConstraintWeights,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        model: &'a ConstraintModel,
        assignments: &'a Assignments,
        domains: &'a DomainStore,
        weights: &'a ConstraintWeights,
    ) -> Self {
        SelectionContext {
            model,
            assignments,
            domains,
            weights,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.model.num_variables()
    }

    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.assignments.is_assigned(variable)
    }

    /// The number of values left in the current (pruned) domain of the variable.
    pub fn domain_size(&self, variable: Variable) -> usize {
        self.domains.size(variable)
    }

    /// The variables sharing a constraint with the given variable, ascending.
    pub fn neighbours(&self, variable: Variable) -> &'a [Variable] {
        self.model.neighbours(variable)
    }

    /// The learned weight of the constraint edge between the two variables.
    pub fn constraint_weight(&self, a: Variable, b: Variable) -> u64 {
        self.weights.get(a, b)
    }
}
