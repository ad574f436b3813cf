use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

#[derive(Clone, Debug)]
pub(crate) struct MaximumArgs<ElementVar, Rhs> {
    pub(crate) array: Box<[ElementVar]>,
    pub(crate) rhs: Rhs,
}

impl<ElementVar, Rhs> PropagatorConstructor for MaximumArgs<ElementVar, Rhs>
where
    ElementVar: IntegerVariable + 'static,
    Rhs: IntegerVariable + 'static,
{
    type PropagatorImpl = MaximumPropagator<ElementVar, Rhs>;

    fn create(self, mut context: PropagatorConstructorContext<'_>) -> Self::PropagatorImpl {
        let MaximumArgs { array, rhs } = self;

        for var in array.iter() {
            context.register(var.clone(), DomainEvents::BOUNDS);
        }
        context.register(rhs.clone(), DomainEvents::BOUNDS);

        MaximumPropagator { array, rhs }
    }
}

/// Bounds-consistent propagator which enforces `max(array) = rhs`. Can be constructed through
/// [`MaximumArgs`]. The array is never empty.
#[derive(Clone, Debug)]
pub(crate) struct MaximumPropagator<ElementVar, Rhs> {
    array: Box<[ElementVar]>,
    rhs: Rhs,
}

impl<ElementVar, Rhs> Propagator for MaximumPropagator<ElementVar, Rhs>
where
    ElementVar: IntegerVariable + 'static,
    Rhs: IntegerVariable + 'static,
{
    fn priority(&self) -> Priority {
        Priority::High
    }

    fn name(&self) -> &str {
        "Maximum"
    }

    fn propagate(&mut self, mut context: PropagationContext<'_>) -> PropagationStatusCP {
        // max(a_0, a_1, ..., a_{n-1}) = rhs
        let rhs_ub = context.upper_bound(&self.rhs);
        let mut max_ub = context.upper_bound(&self.array[0]);
        let mut max_lb = context.lower_bound(&self.array[0]);

        for var in self.array.iter() {
            // Rule 1.
            // UB(a_i) <= UB(rhs).
            context.set_upper_bound(var, rhs_ub)?;

            max_lb = max_lb.max(context.lower_bound(var));
            max_ub = max_ub.max(context.upper_bound(var));
        }

        // Rule 2.
        // LB(rhs) >= max{LB(a_i)}.
        context.set_lower_bound(&self.rhs, max_lb)?;

        // Rule 3.
        // UB(rhs) <= max{UB(a_i)}.
        // This also covers 'if LB(rhs) > UB(a_i) for all i, then conflict'.
        context.set_upper_bound(&self.rhs, max_ub)?;

        // Rule 4.
        // If there is only one variable with UB(a_i) >= LB(rhs), then the bounds for rhs and that
        // variable should be intersected.
        let rhs_lb = context.lower_bound(&self.rhs);
        let mut supports = self
            .array
            .iter()
            .filter(|var| context.upper_bound(*var) >= rhs_lb);
        if let (Some(propagating_variable), None) = (supports.next(), supports.next()) {
            // The previous rules already bound the upper bound of the variable.
            context.set_lower_bound(propagating_variable, rhs_lb)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn upper_bound_of_rhs_matches_maximum_upper_bound_of_array_at_initialise() {
        let mut solver = TestSolver::default();

        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(1, 4);
        let c = solver.new_variable(1, 5);

        let rhs = solver.new_variable(1, 10);

        let _ = solver
            .new_propagator(MaximumArgs {
                array: [a, b, c].into(),
                rhs,
            })
            .expect("no empty domain");

        solver.assert_bounds(rhs, 1, 5);
    }

    #[test]
    fn lower_bound_of_rhs_is_maximum_of_lower_bounds_in_array() {
        let mut solver = TestSolver::default();

        let a = solver.new_variable(3, 10);
        let b = solver.new_variable(4, 10);
        let c = solver.new_variable(5, 10);

        let rhs = solver.new_variable(1, 10);

        let _ = solver
            .new_propagator(MaximumArgs {
                array: [a, b, c].into(),
                rhs,
            })
            .expect("no empty domain");

        solver.assert_bounds(rhs, 5, 10);
    }

    #[test]
    fn upper_bound_of_all_array_elements_at_most_rhs_max_at_initialise() {
        let mut solver = TestSolver::default();

        let array = (1..=5)
            .map(|idx| solver.new_variable(1, 4 + idx))
            .collect::<Box<_>>();

        let rhs = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(MaximumArgs {
                array: array.clone(),
                rhs,
            })
            .expect("no empty domain");

        for var in array.iter() {
            solver.assert_bounds(*var, 1, 3);
        }
    }

    #[test]
    fn single_variable_propagate() {
        let mut solver = TestSolver::default();

        let array = (1..=5)
            .map(|idx| solver.new_variable(1, 1 + 10 * idx))
            .collect::<Box<_>>();

        let rhs = solver.new_variable(45, 60);

        let _ = solver
            .new_propagator(MaximumArgs {
                array: array.clone(),
                rhs,
            })
            .expect("no empty domain");

        solver.assert_bounds(*array.last().unwrap(), 45, 51);
        solver.assert_bounds(rhs, 45, 51);
    }

    #[test]
    fn rhs_above_every_element_is_a_conflict() {
        let mut solver = TestSolver::default();

        let a = solver.new_variable(0, 2);
        let b = solver.new_variable(0, 3);
        let rhs = solver.new_variable(4, 8);

        let result = solver.new_propagator(MaximumArgs {
            array: [a, b].into(),
            rhs,
        });

        assert!(result.is_err());
    }
}
