use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`LinearLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagatorArgs<Var> {
    pub(crate) x: Box<[Var]>,
    pub(crate) c: i32,
}

impl<Var> PropagatorConstructor for LinearLessOrEqualPropagatorArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = LinearLessOrEqualPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self::PropagatorImpl {
        let LinearLessOrEqualPropagatorArgs { x, c } = self;

        for x_i in x.iter() {
            context.register(x_i.clone(), DomainEvents::LOWER_BOUND);
        }

        LinearLessOrEqualPropagator { x, c }
    }
}

/// Propagator for the constraint `\sum x_i <= c`.
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i32,
}

impl<Var> Propagator for LinearLessOrEqualPropagator<Var>
where
    Var: IntegerVariable + 'static,
{
    fn priority(&self) -> Priority {
        Priority::High
    }

    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn propagate(&mut self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        propagate_less_or_equal(&mut context, &self.x, self.c)
    }
}

/// The smallest value `\sum x_i` can take under the current bounds.
pub(crate) fn lower_bound_of_sum<Var: IntegerVariable>(
    context: &impl ReadDomains,
    x: &[Var],
) -> i64 {
    x.iter().map(|x_i| context.lower_bound(x_i) as i64).sum()
}

/// Enforces `\sum x_i <= c` on the bounds: every `x_i` can at most take up the slack that is left
/// by the lower bounds of the other terms. The sum is computed in `i64`, so large domains cannot
/// overflow.
pub(crate) fn propagate_less_or_equal<Var: IntegerVariable>(
    context: &mut PropagationContext<'_>,
    x: &[Var],
    c: i32,
) -> PropagationStatusCP {
    let lower_bound_left_hand_side = lower_bound_of_sum(&*context, x);
    if lower_bound_left_hand_side > c as i64 {
        return Err(Inconsistency::Conflict);
    }

    for x_i in x.iter() {
        let lower_bound = context.lower_bound(x_i) as i64;
        let bound = c as i64 - (lower_bound_left_hand_side - lower_bound);

        // `bound >= lower_bound`, so it only needs converting when it is below the upper bound.
        if (context.upper_bound(x_i) as i64) > bound {
            context.set_upper_bound(x_i, bound as i32)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn test_bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: 7,
            })
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn negated_terms_raise_lower_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(4, 6);

        // y - x <= 1
        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [y.scaled(1), x.scaled(-1)].into(),
                c: 1,
            })
            .expect("no empty domains");

        solver.assert_bounds(x, 3, 10);
        solver.assert_bounds(y, 4, 6);
    }

    #[test]
    fn lower_bounds_beyond_the_right_hand_side_are_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(4, 5);
        let y = solver.new_variable(4, 10);

        let result = solver.new_propagator(LinearLessOrEqualPropagatorArgs {
            x: [x, y].into(),
            c: 7,
        });

        assert!(result.is_err());
    }

    #[test]
    fn large_domains_do_not_overflow() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, i32::MAX);
        let y = solver.new_variable(1, 2);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: i32::MAX,
            })
            .expect("no empty domains");

        solver.assert_bounds(x, 0, i32::MAX - 1);
    }

    #[test]
    fn tightening_a_lower_bound_wakes_the_propagation_up() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);

        let propagator = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: 12,
            })
            .expect("no empty domains");
        solver.assert_bounds(y, 0, 10);

        solver.set_lower_bound(x, 5).expect("non-empty domain");
        solver.propagate(propagator).expect("non-empty domain");

        solver.assert_bounds(y, 0, 7);
    }
}
