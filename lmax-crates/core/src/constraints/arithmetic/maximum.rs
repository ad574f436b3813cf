use super::super::Constraint;
use crate::propagators::arithmetic::maximum::MaximumArgs;
use crate::variables::IntegerVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `max(array) = rhs`.
///
/// The maximum of an empty array is undefined; posting it fails with
/// [`ConstraintOperationError::EmptyArray`] and leaves the solver untouched.
pub fn maximum<Var: IntegerVariable + 'static>(
    array: impl IntoIterator<Item = Var>,
    rhs: impl IntegerVariable + 'static,
) -> impl Constraint {
    MaximumConstraint {
        array: array.into_iter().collect(),
        rhs,
    }
}

struct MaximumConstraint<Var, Rhs> {
    array: Box<[Var]>,
    rhs: Rhs,
}

impl<Var, Rhs> Constraint for MaximumConstraint<Var, Rhs>
where
    Var: IntegerVariable + 'static,
    Rhs: IntegerVariable + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.array.is_empty() {
            return Err(ConstraintOperationError::EmptyArray);
        }

        MaximumArgs {
            array: self.array,
            rhs: self.rhs,
        }
        .post(solver)
    }
}
