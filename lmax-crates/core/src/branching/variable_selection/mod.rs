//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement.
mod input_order;
mod smallest;
mod variable_selector;

pub use input_order::InputOrder;
pub use smallest::Smallest;
pub use variable_selector::VariableSelector;
