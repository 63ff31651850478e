//! Contains the strategies for deciding which variable the solver branches on next.
mod dom_wdeg;
mod variable_selector;

pub use dom_wdeg::DomWdeg;
pub use dom_wdeg::DomWdegScore;
pub use variable_selector::VariableSelector;
