//! The constraint model of 1|r_j|Lmax.
//!
//! Every job `i` gets a start and an end variable linked by `end_i - start_i = p_i`, and a
//! lateness variable `L_i = end_i - d_i`. Every unordered pair of jobs is ordered by the
//! disjunction `end_i <= start_j \/ end_j <= start_i`, and `Lmax = max(L_0, ..., L_{n-1})` is the
//! objective. The domains of all variables are derived from the instance data before anything is
//! handed to a [`SolverAdapter`](crate::adapter::SolverAdapter):
//! ```rust
//! # use lmax_solver::adapter::EngineAdapter;
//! # use lmax_solver::adapter::SolverAdapter;
//! # use lmax_solver::instance::InstanceData;
//! # use lmax_solver::model::ModelBuilder;
//! let instance = InstanceData::from_jobs(vec![0, 5], vec![3, 2], vec![10, 4])?;
//!
//! let mut adapter = EngineAdapter::new();
//! let model = ModelBuilder::new(&instance).build(&mut adapter)?;
//! assert_eq!(model.num_disjunctions, 1);
//!
//! let outcome = adapter.solve_minimize(model.lmax);
//! let schedule = model.schedule(&outcome).expect("the instance has a schedule");
//! assert_eq!(schedule.lmax, 3);
//! # Ok::<(), lmax_solver::model::ModelError>(())
//! ```
mod builder;
mod domains;
mod schedule;

pub use builder::BuiltModel;
pub use builder::JobVariable;
pub use builder::LatenessVariable;
pub use builder::ModelBuilder;
pub use domains::Bounds;
pub use domains::JobDomains;
pub use domains::ModelDomains;
pub use schedule::Schedule;
pub use schedule::ScheduledJob;
use thiserror::Error;

use crate::adapter::AdapterError;
use crate::instance::InstanceError;

/// Errors raised while building the model of an instance.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The derived domain of `variable` is empty.
    #[error("the domain [{lower}, {upper}] of {variable} is empty")]
    InfeasibleDomain {
        variable: String,
        lower: i64,
        upper: i64,
    },
    /// A derived bound of `variable` does not fit in an engine variable.
    #[error("the bound {value} of {variable} is out of range")]
    BoundOverflow { variable: String, value: i64 },
    #[error(transparent)]
    Instance(#[from] InstanceError),
    #[error("failed to post a constraint: {0}")]
    Posting(#[from] AdapterError),
}
