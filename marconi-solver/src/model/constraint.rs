/// The operator of a distance constraint between two frequency variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintOp {
    /// The absolute difference between the two frequencies must exceed the threshold.
    DifferenceExceeds,
    /// The absolute difference between the two frequencies must equal the threshold exactly.
    DifferenceEquals,
}

/// A binary distance constraint `|a - b| > k` or `|a - b| = k` between two variables.
///
/// The constraint is symmetric in its two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryConstraint {
    operator: ConstraintOp,
    threshold: i32,
}

impl BinaryConstraint {
    pub fn new(operator: ConstraintOp, threshold: i32) -> Self {
        BinaryConstraint {
            operator,
            threshold,
        }
    }

    pub fn operator(&self) -> ConstraintOp {
        self.operator
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Evaluates whether the two frequencies satisfy this constraint.
    pub fn is_satisfied(&self, a: i32, b: i32) -> bool {
        let difference = (a - b).abs();

        match self.operator {
            ConstraintOp::DifferenceExceeds => difference > self.threshold,
            ConstraintOp::DifferenceEquals => difference == self.threshold,
        }
    }
}

impl std::fmt::Display for BinaryConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            ConstraintOp::DifferenceExceeds => write!(f, "> {}", self.threshold),
            ConstraintOp::DifferenceEquals => write!(f, "= {}", self.threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_exceeds_is_strict() {
        let constraint = BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 2);

        assert!(constraint.is_satisfied(0, 3));
        assert!(constraint.is_satisfied(3, 0));
        assert!(!constraint.is_satisfied(0, 2));
        assert!(!constraint.is_satisfied(5, 5));
    }

    #[test]
    fn difference_equals_requires_exact_distance() {
        let constraint = BinaryConstraint::new(ConstraintOp::DifferenceEquals, 4);

        assert!(constraint.is_satisfied(10, 14));
        assert!(constraint.is_satisfied(14, 10));
        assert!(!constraint.is_satisfied(10, 13));
        assert!(!constraint.is_satisfied(10, 10));
    }
}
