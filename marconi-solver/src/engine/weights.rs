use crate::basic_types::HashMap;
use crate::engine::variables::Variable;
use crate::marconi_assert_simple;
use crate::model::ConstraintModel;

/// The learned weight of every constraint edge, driving the dom/wdeg variable ordering.
///
/// Every constrained pair starts at weight 1. The weight of an edge is incremented exactly when
/// forward checking along that edge empties a domain, and is never decreased during a run; the
/// table accumulates learning, it is not search-path state and is not rolled back.
#[derive(Debug)]
pub(crate) struct ConstraintWeights {
    weights: HashMap<(u32, u32), u64>,
}

impl ConstraintWeights {
    pub(crate) fn from_model(model: &ConstraintModel) -> Self {
        let weights = model
            .constraint_edges()
            .map(|(a, b)| (key(a, b), 1))
            .collect();

        ConstraintWeights { weights }
    }

    /// The weight of the edge between the two variables; unrecorded pairs weigh 1.
    pub(crate) fn get(&self, a: Variable, b: Variable) -> u64 {
        self.weights.get(&key(a, b)).copied().unwrap_or(1)
    }

    pub(crate) fn increment(&mut self, a: Variable, b: Variable) {
        marconi_assert_simple!(a != b, "a variable shares no constraint edge with itself");

        *self.weights.entry(key(a, b)).or_insert(1) += 1;
    }
}

fn key(a: Variable, b: Variable) -> (u32, u32) {
    if a.id <= b.id {
        (a.id, b.id)
    } else {
        (b.id, a.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BinaryConstraint;
    use crate::model::ConstraintOp;

    #[test]
    fn every_edge_starts_at_one() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![0]);
        let y = model.new_variable(2, vec![0]);
        let z = model.new_variable(3, vec![0]);
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));

        let weights = ConstraintWeights::from_model(&model);
        assert_eq!(weights.get(x, y), 1);
        assert_eq!(weights.get(y, x), 1);
        // Pairs without a constraint still report the default weight.
        assert_eq!(weights.get(x, z), 1);
    }

    #[test]
    fn increments_are_symmetric_and_monotone() {
        let mut model = ConstraintModel::default();
        let x = model.new_variable(1, vec![0]);
        let y = model.new_variable(2, vec![0]);
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));

        let mut weights = ConstraintWeights::from_model(&model);
        weights.increment(x, y);
        assert_eq!(weights.get(y, x), 2);

        weights.increment(y, x);
        assert_eq!(weights.get(x, y), 3);
    }
}
