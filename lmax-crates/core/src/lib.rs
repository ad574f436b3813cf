//! # lmax-core
//! A small finite-domain constraint engine. Integer variables have interval domains, constraints
//! are enforced by bounds-propagating propagators, and search is a depth-first chronological
//! backtracking procedure driven by a [`branching::Brancher`].
//!
//! The engine supports the constraints that are needed to model disjunctive scheduling problems:
//! * [Linear integer (in)equalities][crate::constraints::less_than_or_equals].
//! * [Binary disjunctions of linear inequalities][crate::constraints::disjunction].
//! * [Maximum][crate::constraints::maximum].
//!
//! # Using the engine
//! The first step to solving a problem is **adding variables**:
//! ```rust
//! # use lmax_core::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(5, 10);
//! let y = solver.new_bounded_integer(-3, 15);
//! let z = solver.new_named_bounded_integer(7, 25, "z");
//! ```
//!
//! Then we can **add constraints** and find a solution:
//! ```rust
//! # use lmax_core::Solver;
//! # use lmax_core::constraints;
//! # use lmax_core::results::ProblemSolution;
//! # use lmax_core::results::SatisfactionResult;
//! # use lmax_core::termination::Indefinite;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(5, 10);
//! let y = solver.new_bounded_integer(-3, 15);
//! let z = solver.new_bounded_integer(7, 25);
//!
//! // x + y + z = 17
//! solver
//!     .add_constraint(constraints::equals(vec![x, y, z], 17))
//!     .post()
//!     .expect("no root conflict");
//!
//! let mut brancher = solver.default_brancher();
//! match solver.satisfy(&mut brancher, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         let sum = solution.get_integer_value(x)
//!             + solution.get_integer_value(y)
//!             + solution.get_integer_value(z);
//!         assert_eq!(sum, 17);
//!     }
//!     _ => panic!("This problem should have a solution"),
//! }
//! ```
//!
//! **Optimising an objective** is done with an [`optimisation::OptimisationProcedure`]:
//! ```rust
//! # use lmax_core::Solver;
//! # use lmax_core::constraints;
//! # use lmax_core::optimisation::linear_sat_unsat::LinearSatUnsat;
//! # use lmax_core::optimisation::OptimisationDirection;
//! # use lmax_core::results::OptimisationResult;
//! # use lmax_core::results::ProblemSolution;
//! # use lmax_core::termination::Indefinite;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(5, 10);
//! let y = solver.new_bounded_integer(-3, 15);
//! let objective = solver.new_bounded_integer(-10, 30);
//!
//! solver
//!     .add_constraint(constraints::maximum(vec![x, y], objective))
//!     .post()
//!     .expect("no root conflict");
//!
//! let mut brancher = solver.default_brancher();
//! let result = solver.optimise(
//!     &mut brancher,
//!     &mut Indefinite,
//!     LinearSatUnsat::new(OptimisationDirection::Minimise, objective, ()),
//! );
//!
//! if let OptimisationResult::Optimal(solution) = result {
//!     assert_eq!(solution.get_integer_value(objective), 5);
//! } else {
//!     panic!("This problem has an optimal solution")
//! }
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub(crate) mod propagators;

#[doc(hidden)]
pub mod asserts;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod propagation;
pub mod statistics;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use convert_case;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
