//! Contains the problem description consumed by the [`Solver`](crate::Solver): variables with
//! their candidate frequency domains and the pairwise distance constraints between them.
mod constraint;
mod constraint_model;

pub use constraint::BinaryConstraint;
pub use constraint::ConstraintOp;
pub use constraint_model::ConstraintModel;
