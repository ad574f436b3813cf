use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;
use crate::propagators::arithmetic::linear_less_or_equal::lower_bound_of_sum;
use crate::propagators::arithmetic::linear_less_or_equal::propagate_less_or_equal;

/// The linear inequality `\sum terms <= rhs`, used as one side of a disjunction.
#[derive(Clone, Debug)]
pub struct LinearInequality<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable> LinearInequality<Var> {
    pub fn less_than_or_equals(terms: impl Into<Box<[Var]>>, rhs: i32) -> Self {
        LinearInequality {
            terms: terms.into(),
            rhs,
        }
    }

    pub fn terms(&self) -> &[Var] {
        &self.terms
    }

    pub fn rhs(&self) -> i32 {
        self.rhs
    }

    /// Whether no assignment within the current bounds can satisfy the inequality.
    fn is_violated(&self, context: &impl ReadDomains) -> bool {
        lower_bound_of_sum(context, &self.terms) > self.rhs as i64
    }
}

/// The [`PropagatorConstructor`] for the [`DisjunctionPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct DisjunctionArgs<Var> {
    pub(crate) left: LinearInequality<Var>,
    pub(crate) right: LinearInequality<Var>,
}

impl<Var> PropagatorConstructor for DisjunctionArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = DisjunctionPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self::PropagatorImpl {
        let DisjunctionArgs { left, right } = self;

        // Both whether a side is violated and what it implies only depend on lower bounds.
        for var in left.terms.iter().chain(right.terms.iter()) {
            context.register(var.clone(), DomainEvents::LOWER_BOUND);
        }

        DisjunctionPropagator { left, right }
    }
}

/// Propagator for `left \/ right` where both sides are linear inequalities. As long as both sides
/// can still hold nothing is inferred; once one side is violated, the other side is enforced.
#[derive(Clone, Debug)]
pub(crate) struct DisjunctionPropagator<Var> {
    left: LinearInequality<Var>,
    right: LinearInequality<Var>,
}

impl<Var> Propagator for DisjunctionPropagator<Var>
where
    Var: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "Disjunction"
    }

    fn propagate(&mut self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        let left_violated = self.left.is_violated(&context);
        let right_violated = self.right.is_violated(&context);

        match (left_violated, right_violated) {
            (true, true) => Err(Inconsistency::Conflict),
            (true, false) => {
                propagate_less_or_equal(&mut context, &self.right.terms, self.right.rhs)
            }
            (false, true) => propagate_less_or_equal(&mut context, &self.left.terms, self.left.rhs),
            (false, false) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;
    use crate::engine::variables::AffineView;
    use crate::engine::variables::DomainId;
    use crate::engine::variables::TransformableVariable;

    /// `end_a <= start_b \/ end_b <= start_a` for two tasks with processing times `p_a` and `p_b`.
    fn no_overlap(
        start_a: DomainId,
        p_a: i32,
        start_b: DomainId,
        p_b: i32,
    ) -> DisjunctionArgs<AffineView<DomainId>> {
        DisjunctionArgs {
            left: LinearInequality::less_than_or_equals(
                vec![start_a.scaled(1), start_b.scaled(-1)],
                -p_a,
            ),
            right: LinearInequality::less_than_or_equals(
                vec![start_b.scaled(1), start_a.scaled(-1)],
                -p_b,
            ),
        }
    }

    #[test]
    fn nothing_is_inferred_while_both_orders_are_possible() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 10);
        let b = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(no_overlap(a, 3, b, 2))
            .expect("no empty domain");

        solver.assert_bounds(a, 0, 10);
        solver.assert_bounds(b, 0, 10);
    }

    #[test]
    fn violated_side_enforces_the_other_order() {
        let mut solver = TestSolver::default();
        // a cannot finish before b starts: a + 3 <= b is impossible when b <= 2.
        let a = solver.new_variable(0, 10);
        let b = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(no_overlap(a, 3, b, 2))
            .expect("no empty domain");

        // b + 2 <= a
        solver.assert_bounds(a, 2, 10);
        solver.assert_bounds(b, 0, 2);
    }

    #[test]
    fn both_sides_violated_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(4, 5);
        let b = solver.new_variable(4, 5);

        let result = solver.new_propagator(no_overlap(a, 3, b, 3));

        assert!(result.is_err());
    }

    #[test]
    fn propagation_is_triggered_by_later_changes() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 10);
        let b = solver.new_variable(0, 10);

        let propagator = solver
            .new_propagator(no_overlap(a, 3, b, 2))
            .expect("no empty domain");

        solver.set_lower_bound(a, 9).expect("non-empty domain");
        solver.propagate(propagator).expect("non-empty domain");

        // a + 3 <= b would need b >= 12, so b + 2 <= a.
        solver.assert_bounds(b, 0, 8);
    }
}
