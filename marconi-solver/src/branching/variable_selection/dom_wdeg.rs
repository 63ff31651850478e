use std::cmp::Ordering;

use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::Variable;
use crate::marconi_assert_eq_simple;

/// A [`VariableSelector`] which selects the variable minimising the ratio between its current
/// domain size and its weighted degree: the sum of the learned weights of the constraints it
/// shares with unassigned neighbours.
///
/// Variables are considered in the order they were provided (ascending variable index when
/// constructed through [`Solver::default_selector`](crate::Solver::default_selector)), which
/// also fixes the tie-break: the first variable with the minimal ratio wins. A variable whose
/// current domain is empty is returned immediately, without comparing the remaining variables;
/// the solver has to observe the dead end.
#[derive(Debug)]
pub struct DomWdeg<TieBreaking = InOrderTieBreaker<Variable, DomWdegScore>> {
    variables: Vec<Variable>,
    tie_breaker: TieBreaking,
}

impl DomWdeg {
    pub fn new(variables: &[Variable]) -> Self {
        if variables.is_empty() {
            warn!("The DomWdeg variable selector was not provided with any variables");
        }

        Self {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<TieBreaking: TieBreaker<Variable, DomWdegScore>> DomWdeg<TieBreaking> {
    pub fn with_tie_breaker(variables: &[Variable], tie_breaker: TieBreaking) -> Self {
        marconi_assert_eq_simple!(
            tie_breaker.direction(),
            Direction::Minimum,
            "the provided tie-breaker to DomWdeg attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker"
        );
        if variables.is_empty() {
            warn!("The DomWdeg variable selector was not provided with any variables");
        }

        Self {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector for DomWdeg<TieBreaking>
where
    TieBreaking: TieBreaker<Variable, DomWdegScore>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Variable> {
        for &variable in self.variables.iter() {
            if context.is_assigned(variable) {
                continue;
            }

            let domain_size = context.domain_size(variable);
            if domain_size == 0 {
                // A wiped-out domain is a guaranteed dead end; report it without comparing the
                // remaining variables. The tie-breaker state of this round is discarded.
                let _ = self.tie_breaker.select();
                return Some(variable);
            }

            let mut weighted_degree = 0;
            for &neighbour in context.neighbours(variable) {
                if !context.is_assigned(neighbour) {
                    weighted_degree += context.constraint_weight(variable, neighbour);
                }
            }

            self.tie_breaker.consider(
                variable,
                DomWdegScore::new(domain_size as u64, weighted_degree.max(1)),
            );
        }

        self.tie_breaker.select()
    }
}

/// The score `domain_size / weighted_degree` of one variable.
///
/// Scores are compared as exact rationals through cross-multiplication, so no precision is lost
/// to floating-point division.
#[derive(Clone, Copy, Debug)]
pub struct DomWdegScore {
    domain_size: u64,
    weighted_degree: u64,
}

impl DomWdegScore {
    fn new(domain_size: u64, weighted_degree: u64) -> Self {
        DomWdegScore {
            domain_size,
            weighted_degree,
        }
    }

    fn cross(&self, other: &DomWdegScore) -> (u128, u128) {
        (
            u128::from(self.domain_size) * u128::from(other.weighted_degree),
            u128::from(other.domain_size) * u128::from(self.weighted_degree),
        )
    }
}

impl PartialEq for DomWdegScore {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl PartialOrd for DomWdegScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (lhs, rhs) = self.cross(other);
        lhs.partial_cmp(&rhs)
    }
}
