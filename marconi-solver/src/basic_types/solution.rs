use crate::containers::KeyedVec;
use crate::engine::variables::Variable;

/// A complete assignment of frequencies to variables, produced by a successful search.
///
/// A [`Solution`] takes ownership of its values; it stays valid after the
/// [`Solver`](crate::Solver) is reused or dropped.
#[derive(Clone, Debug)]
pub struct Solution {
    values: KeyedVec<Variable, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<Variable, i32>) -> Self {
        Solution { values }
    }

    /// The frequency assigned to the given variable.
    pub fn value(&self, variable: Variable) -> i32 {
        self.values[variable]
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Iterates over all `(variable, value)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}
