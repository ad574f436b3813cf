use log::warn;

use super::Constraint;
use crate::ConstraintOperationError;
use crate::Solver;

/// Returned by [`Solver::add_constraint`]; the constraint only reaches the solver once
/// [`ConstraintPoster::post`] is called. Dropping an unposted poster logs a warning.
#[derive(Debug)]
pub struct ConstraintPoster<'solver, ConstraintImpl> {
    solver: &'solver mut Solver,
    constraint: Option<ConstraintImpl>,
}

impl<'a, ConstraintImpl> ConstraintPoster<'a, ConstraintImpl> {
    pub(crate) fn new(solver: &'a mut Solver, constraint: ConstraintImpl) -> Self {
        ConstraintPoster {
            solver,
            constraint: Some(constraint),
        }
    }
}

impl<ConstraintImpl: Constraint> ConstraintPoster<'_, ConstraintImpl> {
    /// Posts the constraint at the root. Fails when the root becomes inconsistent or the solver
    /// already was.
    pub fn post(mut self) -> Result<(), ConstraintOperationError> {
        self.constraint
            .take()
            .expect("the constraint is only taken when posting")
            .post(self.solver)
    }
}

impl<ConstraintImpl> Drop for ConstraintPoster<'_, ConstraintImpl> {
    fn drop(&mut self) {
        if self.constraint.is_some() {
            warn!("A constraint was created but never posted.");
        }
    }
}
