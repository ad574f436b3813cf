use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug)]
pub enum SatisfactionResult {
    Satisfiable(Solution),
    /// The search space was exhausted without finding a solution.
    Unsatisfiable,
    /// The [`TerminationCondition`] stopped the search first.
    Unknown,
}

/// The result of a call to [`Solver::satisfy_under_assumptions`].
#[derive(Debug)]
pub enum SatisfactionResultUnderAssumptions {
    Satisfiable(Solution),
    /// Every conflict traced back to the assumptions; without them a solution may exist.
    UnsatisfiableUnderAssumptions,
    /// No solution exists, whatever the assumptions.
    Unsatisfiable,
    /// The [`TerminationCondition`] stopped the search first.
    Unknown,
}

/// The result of a call to [`Solver::optimise`].
#[derive(Debug)]
pub enum OptimisationResult {
    /// The solution could not be improved upon.
    Optimal(Solution),
    /// The best solution found before the [`TerminationCondition`] stopped the search.
    Satisfiable(Solution),
    Unsatisfiable,
    /// Stopped before any solution was found.
    Unknown,
}
