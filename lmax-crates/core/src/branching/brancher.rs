use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// A trait for defining a branching strategy (oftentimes utilising a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector) and a
/// [`ValueSelector`](crate::branching::value_selection::ValueSelector)).
///
/// Implementations of this trait control which part of the search space the solver explores
/// next. The returned decision must shrink the domain of at least one variable. A decision which
/// is already false prunes the current node: the solver handles it as a conflict.
pub trait Brancher {
    /// Returns the next decision as a [`Predicate`] (or [`None`] if all variables under
    /// consideration are assigned).
    ///
    /// This method **cannot** perform the assignment of the decision, it only suggests it.
    fn next_decision(&mut self, context: &mut SelectionContext<'_>) -> Option<Predicate>;

    /// Called after a conflict has been found.
    fn on_conflict(&mut self) {}

    /// Called whenever the solver backtracks to `backtrack_level`.
    fn on_backtrack(&mut self, _backtrack_level: usize) {}

    /// Called after the subtree below `decision` turned out to have no solution and its negation
    /// was posted on `decision_level`.
    fn on_decision_refuted(&mut self, _decision: Predicate, _decision_level: usize) {}

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: SolutionReference<'_>) {}
}
