/// Whether a [`TieBreaker`] searches for the variable with the minimum or the maximum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimum,
    Maximum,
}

/// A trait for deciding which variable wins when several variables are compared on a score.
///
/// Variables are offered one at a time through [`TieBreaker::consider`]; afterwards
/// [`TieBreaker::select`] returns the winner and resets the tie-breaker for the next round of
/// comparisons.
pub trait TieBreaker<Var, Value> {
    /// Offers a variable with its score for the current round.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the winning variable of the current round (if any variable was considered) and
    /// resets the tie-breaker.
    fn select(&mut self) -> Option<Var>;

    /// The [`Direction`] this tie-breaker optimises for.
    fn direction(&self) -> Direction;
}
