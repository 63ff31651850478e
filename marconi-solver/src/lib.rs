//! # Marconi
//! Marconi is a solver for radio link frequency assignment problems (RLFAP): binary
//! constraint-satisfaction problems in which every variable takes a frequency from a finite
//! integer domain and constrained pairs of variables must keep a minimum (or exact) distance
//! between their frequencies.
//!
//! The solver performs depth-first search with forward checking and conflict-directed
//! backjumping, ordering variables with the dom/wdeg heuristic: the constraint weights learned
//! from domain wipeouts steer the search towards the variables that caused failures before.
//!
//! # Using Marconi
//! The first step to solving a problem is building a [`model::ConstraintModel`]:
//! ```rust
//! use marconi_solver::model::BinaryConstraint;
//! use marconi_solver::model::ConstraintModel;
//! use marconi_solver::model::ConstraintOp;
//!
//! let mut model = ConstraintModel::default();
//!
//! // Two transmitters which may use frequencies 0 through 2
//! let x = model.new_variable(1, vec![0, 1, 2]);
//! let y = model.new_variable(2, vec![0, 1, 2]);
//!
//! // Their frequencies have to be more than 1 apart
//! model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));
//! ```
//!
//! For finding an assignment, a [`termination::TerminationCondition`] and a
//! [`branching::variable_selection::VariableSelector`] should be specified, which determine
//! when the solver should stop searching and the variable ordering used during the search:
//! ```rust
//! # use marconi_solver::model::BinaryConstraint;
//! # use marconi_solver::model::ConstraintModel;
//! # use marconi_solver::model::ConstraintOp;
//! use marconi_solver::results::SatisfactionResult;
//! use marconi_solver::termination::Indefinite;
//! use marconi_solver::Solver;
//!
//! # let mut model = ConstraintModel::default();
//! # let x = model.new_variable(1, vec![0, 1, 2]);
//! # let y = model.new_variable(2, vec![0, 1, 2]);
//! # model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));
//! let mut solver = Solver::with_model(model);
//!
//! // We let the solver run for as long as it takes
//! let mut termination = Indefinite;
//! // And we branch with the default dom/wdeg variable ordering
//! let mut selector = solver.default_selector();
//!
//! match solver.satisfy(&mut selector, &mut termination) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert!((solution.value(x) - solution.value(y)).abs() > 1);
//!     }
//!     SatisfactionResult::Unsatisfiable => panic!("this instance has a solution"),
//!     SatisfactionResult::Unknown => panic!("no termination condition was set"),
//! }
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the solver. Turning this on slows down the
//!   solver considerably, so it is turned off by default.
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod marconi_asserts;

pub mod branching;
pub mod model;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use marconi_solver::Solver;`
// vs.
// `use marconi_solver::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
