//! Defines the constraints that the engine supports out of the box.
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and a single constraint may be decomposed into several propagators. Constraints
//! are added to the [`Solver`] through [`Solver::add_constraint`], which returns a
//! [`ConstraintPoster`] that actually posts it:
//!
//! ```rust
//! # use lmax_core::constraints;
//! # use lmax_core::variables::TransformableVariable;
//! # use lmax_core::Solver;
//! let mut solver = Solver::default();
//!
//! let start = solver.new_bounded_integer(0, 10);
//! let end = solver.new_bounded_integer(0, 15);
//!
//! // end - start = 5
//! let result = solver
//!     .add_constraint(constraints::equals(vec![end.scaled(1), start.scaled(-1)], 5))
//!     .post();
//! assert!(result.is_ok());
//! assert_eq!(solver.lower_bound(&end), 5);
//! ```
//!
//! A constraint which makes the root inconsistent is reported as
//! [`ConstraintOperationError::InfeasiblePropagator`].
mod arithmetic;
mod constraint_poster;
mod disjunction;

pub use arithmetic::*;
pub use constraint_poster::ConstraintPoster;
pub use disjunction::*;

use crate::propagation::PropagatorConstructor;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
///
/// For example, the constraint `a = b` over two variables `a` and `b` only allows assignments to
/// `a` and `b` of the same value, and rejects any assignment where `a` and `b` differ.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`]
    /// led to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: PropagatorConstructor + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let _ = solver.add_propagator(self)?;
        Ok(())
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
