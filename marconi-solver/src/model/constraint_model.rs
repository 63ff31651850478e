use crate::basic_types::HashMap;
use crate::containers::KeyedVec;
use crate::engine::variables::Variable;
use crate::marconi_assert_simple;
use crate::model::BinaryConstraint;

/// The immutable description of one frequency-assignment instance.
///
/// A model consists of variables with an integer label (the identifier used in the instance
/// files) and an ordered candidate domain, together with the binary distance constraints between
/// pairs of variables. Once a model is handed to the [`Solver`](crate::Solver) it is never
/// mutated; the search operates on its own copy of the domains.
///
/// The neighbour list of every variable is kept sorted by ascending variable index so that
/// iteration over neighbours is deterministic regardless of the order in which constraints were
/// added.
#[derive(Default, Debug, Clone)]
pub struct ConstraintModel {
    /// The label each variable carries in the instance files.
    labels: KeyedVec<Variable, i32>,
    /// The inverse of [`ConstraintModel::labels`].
    variable_with_label: HashMap<i32, Variable>,
    /// The ordered candidate domain of each variable.
    domains: KeyedVec<Variable, Vec<i32>>,
    /// The variables each variable shares a constraint with, sorted ascending.
    neighbours: KeyedVec<Variable, Vec<Variable>>,
    /// The constraint of each constrained pair, keyed by the unordered pair of indices.
    constraints: HashMap<(u32, u32), BinaryConstraint>,
}

impl ConstraintModel {
    /// Adds a variable with the given instance label and candidate domain.
    ///
    /// The label has to be unused and the domain order is preserved; it determines the order in
    /// which values are tried during search.
    pub fn new_variable(&mut self, label: i32, domain: Vec<i32>) -> Variable {
        marconi_assert_simple!(
            !self.variable_with_label.contains_key(&label),
            "a variable with label {label} is already part of the model"
        );

        let variable = self.labels.push(label);
        let _ = self.domains.push(domain);
        let _ = self.neighbours.push(Vec::new());
        let _ = self.variable_with_label.insert(label, variable);

        variable
    }

    /// Adds a distance constraint between two distinct variables.
    ///
    /// Adding a second constraint for the same pair replaces the first one.
    pub fn add_constraint(&mut self, a: Variable, b: Variable, constraint: BinaryConstraint) {
        marconi_assert_simple!(a != b, "a variable cannot be constrained against itself");

        let _ = self.constraints.insert(Self::pair(a, b), constraint);
        self.connect(a, b);
        self.connect(b, a);
    }

    /// Registers `other` as a neighbour of `variable`, keeping the list sorted and duplicate
    /// free.
    fn connect(&mut self, variable: Variable, other: Variable) {
        let neighbours = &mut self.neighbours[variable];
        if let Err(position) = neighbours.binary_search(&other) {
            neighbours.insert(position, other);
        }
    }

    pub fn num_variables(&self) -> usize {
        self.labels.len()
    }

    /// The number of constrained variable pairs.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The variables of the model in ascending index order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        self.labels.keys()
    }

    /// The variable carrying the given instance label, if any.
    pub fn variable_with_label(&self, label: i32) -> Option<Variable> {
        self.variable_with_label.get(&label).copied()
    }

    /// The instance label of the given variable.
    pub fn label(&self, variable: Variable) -> i32 {
        self.labels[variable]
    }

    /// The original (unpruned) candidate domain of the given variable.
    pub fn domain(&self, variable: Variable) -> &[i32] {
        &self.domains[variable]
    }

    /// The variables sharing a constraint with the given variable, ascending.
    pub fn neighbours(&self, variable: Variable) -> &[Variable] {
        &self.neighbours[variable]
    }

    /// The constraint between the two variables, if they are constrained at all.
    pub fn constraint_between(&self, a: Variable, b: Variable) -> Option<BinaryConstraint> {
        self.constraints.get(&Self::pair(a, b)).copied()
    }

    /// Tests whether assigning `value_a` to `a` and `value_b` to `b` simultaneously is allowed.
    ///
    /// Unconstrained pairs are always compatible.
    pub fn compatible(&self, a: Variable, value_a: i32, b: Variable, value_b: i32) -> bool {
        match self.constraints.get(&Self::pair(a, b)) {
            Some(constraint) => constraint.is_satisfied(value_a, value_b),
            None => true,
        }
    }

    /// The unordered pairs of variables which share a constraint.
    pub(crate) fn constraint_edges(&self) -> impl Iterator<Item = (Variable, Variable)> + '_ {
        self.constraints
            .keys()
            .map(|&(a, b)| (Variable::new(a), Variable::new(b)))
    }

    fn pair(a: Variable, b: Variable) -> (u32, u32) {
        if a.id <= b.id {
            (a.id, b.id)
        } else {
            (b.id, a.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConstraintOp;

    #[test]
    fn unconstrained_pairs_are_compatible() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![0, 1]);
        let y = model.new_variable(2, vec![0, 1]);

        assert!(model.compatible(x, 0, y, 0));
        assert!(model.constraint_between(x, y).is_none());
    }

    #[test]
    fn constraints_are_symmetric() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![0, 1, 2]);
        let y = model.new_variable(2, vec![0, 1, 2]);
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));

        assert!(!model.compatible(x, 0, y, 1));
        assert!(!model.compatible(y, 1, x, 0));
        assert!(model.compatible(x, 0, y, 2));
        assert!(model.compatible(y, 2, x, 0));
    }

    #[test]
    fn duplicate_constraints_are_replaced_by_the_last_one() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![0, 1, 2]);
        let y = model.new_variable(2, vec![0, 1, 2]);
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 2));
        model.add_constraint(y, x, BinaryConstraint::new(ConstraintOp::DifferenceEquals, 1));

        assert_eq!(
            model.constraint_between(x, y),
            Some(BinaryConstraint::new(ConstraintOp::DifferenceEquals, 1))
        );
        assert_eq!(model.neighbours(x), &[y]);
        assert_eq!(model.neighbours(y), &[x]);
    }

    #[test]
    fn neighbours_are_sorted_by_index() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(10, vec![0]);
        let y = model.new_variable(20, vec![0]);
        let z = model.new_variable(30, vec![0]);
        model.add_constraint(y, z, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));
        model.add_constraint(y, x, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));

        assert_eq!(model.neighbours(y), &[x, z]);
    }

    #[test]
    fn labels_resolve_back_to_variables() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(42, vec![0]);

        assert_eq!(model.label(x), 42);
        assert_eq!(model.variable_with_label(42), Some(x));
        assert_eq!(model.variable_with_label(7), None);
    }
}
