use crate::containers::KeyedVec;
use crate::engine::variables::Variable;
use crate::marconi_assert_extreme;
use crate::marconi_assert_simple;
use crate::model::ConstraintModel;

/// A single pruning event: `value` was removed from the current domain of `variable` at
/// `position`.
///
/// The position is recorded so that replaying the log in reverse puts every value back into the
/// exact slot it was removed from, making the restored domain identical to the domain before the
/// trial rather than merely containing the same values.
#[derive(Clone, Copy, Debug)]
struct Removal {
    variable: Variable,
    value: i32,
    position: usize,
}

/// The current (pruned) domains of all variables, layered over the original domains of the
/// model, together with the removal log that undoes pruning.
///
/// Removals are grouped into *trial scopes*: one scope per tentative assignment. Opening a scope
/// ([`DomainStore::begin_trial`]) and undoing it ([`DomainStore::undo_trial`]) are strictly
/// paired on every exit path of a trial; undoing with no open scope is a contract violation.
#[derive(Debug)]
pub(crate) struct DomainStore {
    domains: KeyedVec<Variable, Vec<i32>>,
    /// All removals of the currently open trial scopes, oldest first.
    removals: Vec<Removal>,
    /// At index i is the position in [`DomainStore::removals`] where the i-th open scope starts.
    trial_starts: Vec<usize>,
    /// Total number of pruning operations performed, for effort reporting.
    num_prunings: u64,
}

impl DomainStore {
    /// Creates a fresh store with every current domain equal to the model domain.
    pub(crate) fn from_model(model: &ConstraintModel) -> Self {
        let mut domains = KeyedVec::default();
        for variable in model.variables() {
            let _ = domains.push(model.domain(variable).to_vec());
        }

        DomainStore {
            domains,
            removals: Vec::new(),
            trial_starts: Vec::new(),
            num_prunings: 0,
        }
    }

    pub(crate) fn values(&self, variable: Variable) -> &[i32] {
        &self.domains[variable]
    }

    pub(crate) fn size(&self, variable: Variable) -> usize {
        self.domains[variable].len()
    }

    pub(crate) fn is_wiped_out(&self, variable: Variable) -> bool {
        self.domains[variable].is_empty()
    }

    pub(crate) fn num_prunings(&self) -> u64 {
        self.num_prunings
    }

    /// Opens a removal scope for one tentative assignment.
    pub(crate) fn begin_trial(&mut self) {
        self.trial_starts.push(self.removals.len());
    }

    /// Removes the value at `position` from the current domain of `variable`, logging the
    /// removal in the open trial scope.
    pub(crate) fn prune(&mut self, variable: Variable, position: usize) {
        marconi_assert_simple!(
            !self.trial_starts.is_empty(),
            "pruning requires an open trial scope"
        );

        let value = self.domains[variable].remove(position);
        self.removals.push(Removal {
            variable,
            value,
            position,
        });
        self.num_prunings += 1;
    }

    /// Undoes the most recent trial scope by replaying its removals in reverse.
    ///
    /// Afterwards the current domains are identical to their state at the matching
    /// [`DomainStore::begin_trial`], including the order of values.
    pub(crate) fn undo_trial(&mut self) {
        let Some(start) = self.trial_starts.pop() else {
            panic!("no open trial scope to undo");
        };

        for removal in self.removals.drain(start..).rev() {
            self.domains[removal.variable].insert(removal.position, removal.value);

            marconi_assert_extreme!(
                {
                    let domain = &self.domains[removal.variable];
                    domain.iter().filter(|&&value| value == removal.value).count() == 1
                },
                "restoring a removal must not duplicate a domain value"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BinaryConstraint;
    use crate::model::ConstraintOp;

    fn two_variable_model() -> (ConstraintModel, Variable, Variable) {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![2, 4, 6, 8]);
        let y = model.new_variable(2, vec![1, 3, 5]);
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));
        (model, x, y)
    }

    #[test]
    fn pruning_removes_the_value_at_the_position() {
        let (model, x, _) = two_variable_model();
        let mut domains = DomainStore::from_model(&model);

        domains.begin_trial();
        domains.prune(x, 1);

        assert_eq!(domains.values(x), &[2, 6, 8]);
        assert_eq!(domains.size(x), 3);
        assert_eq!(domains.num_prunings(), 1);
    }

    #[test]
    fn undo_restores_domains_bit_for_bit() {
        let (model, x, y) = two_variable_model();
        let mut domains = DomainStore::from_model(&model);

        domains.begin_trial();
        domains.prune(x, 0);
        domains.prune(x, 2);
        domains.prune(y, 1);
        domains.undo_trial();

        assert_eq!(domains.values(x), &[2, 4, 6, 8]);
        assert_eq!(domains.values(y), &[1, 3, 5]);
    }

    #[test]
    fn scopes_are_undone_innermost_first() {
        let (model, x, y) = two_variable_model();
        let mut domains = DomainStore::from_model(&model);

        domains.begin_trial();
        domains.prune(x, 0);
        domains.begin_trial();
        domains.prune(x, 0);
        domains.prune(y, 0);

        domains.undo_trial();
        assert_eq!(domains.values(x), &[4, 6, 8]);
        assert_eq!(domains.values(y), &[1, 3, 5]);

        domains.undo_trial();
        assert_eq!(domains.values(x), &[2, 4, 6, 8]);
    }

    #[test]
    fn wipeout_is_observable_and_reversible() {
        let (model, _, y) = two_variable_model();
        let mut domains = DomainStore::from_model(&model);

        domains.begin_trial();
        domains.prune(y, 0);
        domains.prune(y, 0);
        domains.prune(y, 0);
        assert!(domains.is_wiped_out(y));

        domains.undo_trial();
        assert!(!domains.is_wiped_out(y));
        assert_eq!(domains.values(y), &[1, 3, 5]);
    }

    #[test]
    #[should_panic(expected = "no open trial scope")]
    fn undoing_twice_is_a_contract_violation() {
        let (model, x, _) = two_variable_model();
        let mut domains = DomainStore::from_model(&model);

        domains.begin_trial();
        domains.prune(x, 0);
        domains.undo_trial();
        domains.undo_trial();
    }
}
