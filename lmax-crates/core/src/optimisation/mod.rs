//! Contains structures related to optimisation.
pub mod linear_sat_unsat;
mod solution_callback;

pub use solution_callback::SolutionCallback;

use crate::branching::Brancher;
use crate::results::OptimisationResult;
use crate::termination::TerminationCondition;
use crate::Solver;

/// A procedure which repeatedly calls the [`Solver`] to find a solution of optimal quality.
pub trait OptimisationProcedure {
    fn optimise(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult;
}

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}
