use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two variables
/// `x1` with value 5 and `x2` with value 5, if the tie-breaker first receives `x2` and then `x1`
/// then it will return `x2` because it was the first variable with the minimum value which was
/// provided.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable, could be [`None`] if no variable has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [`None`] if no variable has been considered yet
    selected_value: Option<Value>,
    /// Whether the tie-breaker should find the variable with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        if let Some(selected_value) = self.selected_value.as_ref() {
            let replaces = match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            };

            if replaces {
                self.selected_variable = Some(variable);
                self.selected_value = Some(value);
            }
        } else {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::Variable;

    #[test]
    fn the_first_variable_with_the_minimum_value_wins() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(Variable::new(0), 10);
        breaker.consider(Variable::new(1), 5);
        breaker.consider(Variable::new(2), 5);

        assert_eq!(breaker.select(), Some(Variable::new(1)));
    }

    #[test]
    fn selecting_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(Variable::new(0), 10);
        assert_eq!(breaker.select(), Some(Variable::new(0)));
        assert_eq!(breaker.select(), None);
    }

    #[test]
    fn maximum_direction_prefers_larger_values() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(Variable::new(0), 1);
        breaker.consider(Variable::new(1), 3);
        breaker.consider(Variable::new(2), 2);

        assert_eq!(breaker.select(), Some(Variable::new(1)));
    }
}
