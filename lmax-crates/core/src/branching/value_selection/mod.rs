//! Provides the [`ValueSelector`] trait which is required for value selectors to implement.
mod in_domain_min;
mod value_selector;

pub use in_domain_min::InDomainMin;
pub use value_selector::ValueSelector;
