use super::super::Constraint;
use super::greater_than_or_equals;
use super::less_than_or_equals;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i = rhs`. It is decomposed into `\sum terms_i <= rhs`
/// and `\sum terms_i >= rhs`.
pub fn equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    EqualConstraint {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `lhs = rhs`.
pub fn binary_equals<Var: IntegerVariable + 'static>(lhs: Var, rhs: Var) -> impl Constraint {
    equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

struct EqualConstraint<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable + 'static> Constraint for EqualConstraint<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        less_than_or_equals(self.terms.clone(), self.rhs).post(solver)?;
        greater_than_or_equals(self.terms, self.rhs).post(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_propagates_in_both_directions() {
        let mut solver = Solver::default();
        let start = solver.new_bounded_integer(2, 10);
        let end = solver.new_bounded_integer(0, 12);

        // end - start = 3
        solver
            .add_constraint(equals(vec![end.scaled(1), start.scaled(-1)], 3))
            .post()
            .expect("end - start = 3 is satisfiable");

        assert_eq!(solver.lower_bound(&end), 5);
        assert_eq!(solver.upper_bound(&start), 9);
    }

    #[test]
    fn binary_equals_intersects_the_domains() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 7);
        let y = solver.new_bounded_integer(3, 12);

        solver
            .add_constraint(binary_equals(x, y))
            .post()
            .expect("the domains overlap");

        assert_eq!((solver.lower_bound(&x), solver.upper_bound(&x)), (3, 7));
        assert_eq!((solver.lower_bound(&y), solver.upper_bound(&y)), (3, 7));
    }

    #[test]
    fn disjoint_equality_is_a_root_conflict() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2);
        let y = solver.new_bounded_integer(5, 8);

        let result = solver.add_constraint(binary_equals(x, y)).post();
        assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));
    }
}
