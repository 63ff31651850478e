//! Contains the variable ordering used by the [`Solver`](crate::Solver) during search.
//!
//! A [`variable_selection::VariableSelector`] decides which unassigned variable the solver
//! branches on next; ties between equally attractive variables are resolved by a
//! [`tie_breaking::TieBreaker`].
mod selection_context;
pub mod tie_breaking;
pub mod variable_selection;

pub use selection_context::SelectionContext;
