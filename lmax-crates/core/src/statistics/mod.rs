//! Contains the structures and functions for logging statistics of the search.
pub mod statistic_logging;

pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
