//! Contains structures and traits to define the decision making procedure of the [`Solver`].
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how a branching procedure (which selects an unfixed variable
//!   and splits its domain) should operate; the main method of this trait is the
//!   [`Brancher::next_decision`] method. An example implementation of this trait is the
//!   [`IndependentVariableValueBrancher`]; scheduling problems on a single machine are better
//!   served by [`SetTimes`].
//! - The [`VariableSelector`] which selects the next variable to branch on; the main method of
//!   this trait is the [`VariableSelector::select_variable`] method.
//! - The [`ValueSelector`] which determines how the domain of the selected variable is split; the
//!   main method of this trait is the [`ValueSelector::select_value`] method.
//!
//! A [`Brancher`] is expected to be passed to [`Solver::satisfy`], and [`Solver::optimise`]:
//! ```rust
//! # use lmax_core::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
//! # use lmax_core::branching::value_selection::InDomainMin;
//! # use lmax_core::branching::variable_selection::InputOrder;
//! # use lmax_core::results::SatisfactionResult;
//! # use lmax_core::termination::Indefinite;
//! # use lmax_core::Solver;
//! let mut solver = Solver::default();
//!
//! let variables = vec![solver.new_bounded_integer(0, 10), solver.new_bounded_integer(3, 5)];
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin);
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! assert!(matches!(result, SatisfactionResult::Satisfiable(_)));
//! ```

mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
#[cfg(doc)]
use crate::branching::branchers::set_times::SetTimes;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
#[cfg(doc)]
use crate::Solver;
