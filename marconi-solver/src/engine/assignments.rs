use crate::containers::KeyedVec;
use crate::engine::variables::Variable;
use crate::marconi_assert_eq_simple;
use crate::marconi_assert_simple;

/// The partial assignment built up during search.
///
/// Next to the value of every assigned variable, the chronological order in which variables were
/// assigned is maintained; computing an unwind target requires walking the assigned variables
/// from the most recent to the oldest. Variables are unassigned strictly in reverse assignment
/// order.
#[derive(Debug)]
pub(crate) struct Assignments {
    values: KeyedVec<Variable, Option<i32>>,
    /// Assigned variables in chronological order; the last entry is the most recent one.
    order: Vec<Variable>,
}

impl Assignments {
    pub(crate) fn new(num_variables: usize) -> Self {
        Assignments {
            values: KeyedVec::filled_with(num_variables, None),
            order: Vec::with_capacity(num_variables),
        }
    }

    pub(crate) fn value(&self, variable: Variable) -> Option<i32> {
        self.values[variable]
    }

    pub(crate) fn is_assigned(&self, variable: Variable) -> bool {
        self.values[variable].is_some()
    }

    pub(crate) fn assign(&mut self, variable: Variable, value: i32) {
        marconi_assert_simple!(
            !self.is_assigned(variable),
            "variable {variable} is already assigned"
        );

        self.values[variable] = Some(value);
        self.order.push(variable);
    }

    /// Removes the assignment of `variable`, which has to be the most recently assigned
    /// variable.
    pub(crate) fn unassign(&mut self, variable: Variable) {
        marconi_assert_eq_simple!(
            self.order.last(),
            Some(&variable),
            "variables are unassigned in reverse assignment order"
        );

        let _ = self.order.pop();
        self.values[variable] = None;
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.order.len() == self.values.len()
    }

    /// The assigned variables from the most recently assigned to the oldest.
    pub(crate) fn newest_first(&self) -> impl Iterator<Item = Variable> + '_ {
        self.order.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_records_value_and_order() {
        let mut assignments = Assignments::new(3);
        let x = Variable::new(0);
        let y = Variable::new(2);

        assignments.assign(y, 7);
        assignments.assign(x, 3);

        assert_eq!(assignments.value(y), Some(7));
        assert_eq!(assignments.value(x), Some(3));
        assert_eq!(assignments.num_assigned(), 2);
        assert!(!assignments.is_complete());
        assert_eq!(assignments.newest_first().collect::<Vec<_>>(), vec![x, y]);
    }

    #[test]
    fn unassigning_restores_the_previous_state() {
        let mut assignments = Assignments::new(2);
        let x = Variable::new(0);
        let y = Variable::new(1);

        assignments.assign(x, 1);
        assignments.assign(y, 2);
        assignments.unassign(y);

        assert_eq!(assignments.value(y), None);
        assert_eq!(assignments.newest_first().collect::<Vec<_>>(), vec![x]);
    }

    #[test]
    fn completion_requires_every_variable() {
        let mut assignments = Assignments::new(2);
        assignments.assign(Variable::new(0), 0);
        assert!(!assignments.is_complete());

        assignments.assign(Variable::new(1), 0);
        assert!(assignments.is_complete());
    }

    #[test]
    #[should_panic(expected = "reverse assignment order")]
    fn out_of_order_unassignment_is_rejected() {
        let mut assignments = Assignments::new(2);
        let x = Variable::new(0);
        let y = Variable::new(1);

        assignments.assign(x, 1);
        assignments.assign(y, 2);
        assignments.unassign(x);
    }
}
