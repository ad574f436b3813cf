use super::super::Constraint;
use crate::propagators::arithmetic::linear_less_or_equal::LinearLessOrEqualPropagatorArgs;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i <= rhs`.
pub fn less_than_or_equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    Inequality {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `\sum terms_i >= rhs`.
pub fn greater_than_or_equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    let terms: Box<[Var::AffineView]> = terms
        .into()
        .iter()
        .map(|term| term.scaled(-1))
        .collect();
    less_than_or_equals(terms, -rhs)
}

/// Creates the [`Constraint`] `lhs <= rhs`.
pub fn binary_less_than_or_equals<Var: IntegerVariable + 'static>(
    lhs: Var,
    rhs: Var,
) -> impl Constraint {
    less_than_or_equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

struct Inequality<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable + 'static> Constraint for Inequality<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        LinearLessOrEqualPropagatorArgs {
            x: self.terms,
            c: self.rhs,
        }
        .post(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greater_than_or_equals_raises_the_lower_bound() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 3);

        solver
            .add_constraint(greater_than_or_equals(vec![x, y], 12))
            .post()
            .expect("x + y >= 12 is satisfiable");

        assert_eq!(solver.lower_bound(&x), 9);
        assert_eq!(solver.lower_bound(&y), 2);
    }

    #[test]
    fn binary_less_than_or_equals_orders_two_variables() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(4, 10);
        let y = solver.new_bounded_integer(0, 6);

        solver
            .add_constraint(binary_less_than_or_equals(x, y))
            .post()
            .expect("x <= y is satisfiable");

        assert_eq!(solver.upper_bound(&x), 6);
        assert_eq!(solver.lower_bound(&y), 4);
    }
}
