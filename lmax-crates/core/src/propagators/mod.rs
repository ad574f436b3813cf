//! Contains propagator implementations that are used in the solver.
pub(crate) mod arithmetic;
pub(crate) mod disjunction;
