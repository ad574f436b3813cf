use crate::basic_types::SolutionReference;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// Determines, for a variable selected by a
/// [`VariableSelector`](crate::branching::variable_selection::VariableSelector), how its domain is
/// split.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on. The domain
    /// of `decision_variable` has at least 2 values in it. Returns a [`Predicate`] specifying the
    /// required change in the domain.
    fn select_value(
        &mut self,
        context: &mut SelectionContext<'_>,
        decision_variable: Var,
    ) -> Predicate;

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: SolutionReference<'_>) {}
}
