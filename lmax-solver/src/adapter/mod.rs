//! The seam between a model and the engine that solves it.
//!
//! A model only talks to a [`SolverAdapter`]: it registers bounded integer variables, posts
//! [`Expression`]s over their handles and asks for a solution. [`EngineAdapter`] implements the
//! trait on top of the `lmax-core` engine.
mod engine;
mod expression;
#[cfg(test)]
pub(crate) mod recording;

use std::fmt::Debug;
use std::hash::Hash;

pub use engine::EngineAdapter;
pub use expression::Comparator;
pub use expression::Expression;
pub use expression::LinearComparison;
use lmax_core::containers::HashMap;
use thiserror::Error;

/// A finite-domain solver which can be handed a model.
pub trait SolverAdapter {
    /// Identifies a registered variable.
    type Handle: Copy + Eq + Hash + Debug;

    /// Registers the integer variable `name` with domain `[lower, upper]`.
    fn register_variable(&mut self, name: &str, lower: i32, upper: i32) -> Self::Handle;

    /// Posts a constraint over registered variables.
    ///
    /// A constraint which is infeasible together with the ones posted before is not an error;
    /// the next solve reports [`SolveOutcome::Infeasible`] instead.
    fn post_constraint(&mut self, expression: Expression<Self::Handle>) -> Result<(), AdapterError>;

    /// Tells the adapter that `starts` are the start times of jobs which share one machine, so
    /// that its search can fix them in chronological order. Adapters are free to ignore this.
    fn declare_start_times(&mut self, _starts: &[Self::Handle]) {}

    /// Searches for any assignment which satisfies the posted constraints.
    fn solve_satisfy(&mut self) -> SolveOutcome<Self::Handle>;

    /// Searches for an assignment which satisfies the posted constraints and minimises
    /// `objective`.
    fn solve_minimize(&mut self, objective: Self::Handle) -> SolveOutcome<Self::Handle>;
}

/// Errors raised by a [`SolverAdapter`] when it is handed something it cannot represent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("the expression {expression} is not supported: {reason}")]
    Unsupported { expression: String, reason: String },
}

/// The result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome<Handle: Eq + Hash> {
    /// A solution was found. When minimising, it is not known to be optimal.
    Satisfiable(Assignment<Handle>),
    /// A solution was found and proven to be optimal.
    Optimal(Assignment<Handle>),
    /// There is no solution.
    Infeasible,
    /// The search stopped before reaching a conclusion.
    Unknown,
}

impl<Handle: Eq + Hash> SolveOutcome<Handle> {
    /// The assignment of the solution, if one was found.
    pub fn assignment(&self) -> Option<&Assignment<Handle>> {
        match self {
            SolveOutcome::Satisfiable(assignment) | SolveOutcome::Optimal(assignment) => {
                Some(assignment)
            }
            SolveOutcome::Infeasible | SolveOutcome::Unknown => None,
        }
    }
}

/// Maps every registered variable to its value in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<Handle: Eq + Hash> {
    values: HashMap<Handle, i32>,
}

impl<Handle: Copy + Eq + Hash> Assignment<Handle> {
    /// The value of `handle`, if it was registered.
    pub fn value(&self, handle: Handle) -> Option<i32> {
        self.values.get(&handle).copied()
    }

    /// The number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, i32)> + '_ {
        self.values.iter().map(|(&handle, &value)| (handle, value))
    }
}

impl<Handle: Eq + Hash> FromIterator<(Handle, i32)> for Assignment<Handle> {
    fn from_iter<T: IntoIterator<Item = (Handle, i32)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}
