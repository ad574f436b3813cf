use super::Constraint;
pub use crate::propagators::disjunction::LinearInequality;
use crate::propagators::disjunction::DisjunctionArgs;
use crate::variables::IntegerVariable;

/// Creates the [`Constraint`] `left \/ right`: at least one of the two linear inequalities holds.
///
/// Ordering two tasks on a machine is the typical use:
/// ```rust
/// # use lmax_core::constraints;
/// # use lmax_core::constraints::LinearInequality;
/// # use lmax_core::variables::TransformableVariable;
/// # use lmax_core::Solver;
/// let mut solver = Solver::default();
/// let start_a = solver.new_bounded_integer(0, 10);
/// let start_b = solver.new_bounded_integer(0, 10);
///
/// // a (length 4) runs before b, or b (length 2) runs before a
/// let a_before_b = LinearInequality::less_than_or_equals(
///     vec![start_a.offset(4), start_b.scaled(-1)],
///     0,
/// );
/// let b_before_a = LinearInequality::less_than_or_equals(
///     vec![start_b.offset(2), start_a.scaled(-1)],
///     0,
/// );
///
/// let result = solver
///     .add_constraint(constraints::disjunction(a_before_b, b_before_a))
///     .post();
/// assert!(result.is_ok());
/// ```
pub fn disjunction<Var: IntegerVariable + 'static>(
    left: LinearInequality<Var>,
    right: LinearInequality<Var>,
) -> impl Constraint {
    DisjunctionArgs { left, right }
}
