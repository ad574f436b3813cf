//! # lmax-solver
//! Models and solves the single-machine scheduling problem 1|r_j|Lmax: jobs with release dates,
//! processing times and due dates are sequenced on one machine without overlap so that the
//! maximum lateness is minimal.
//!
//! The crate is split into
//! * [`instance`]: the instance data, with random generation and the plain and structured text
//!   formats,
//! * [`model`]: the constraint model with variable domains derived from the instance data,
//! * [`adapter`]: the [`SolverAdapter`](adapter::SolverAdapter) seam between a model and the
//!   finite-domain engine of [`lmax_core`].
//!
//! ```rust
//! # use lmax_solver::adapter::EngineAdapter;
//! # use lmax_solver::adapter::SolverAdapter;
//! # use lmax_solver::instance::InstanceData;
//! # use lmax_solver::model::ModelBuilder;
//! let instance = InstanceData::generate_seeded(5, 1.0, 42)?;
//!
//! let mut adapter = EngineAdapter::new();
//! let model = ModelBuilder::new(&instance).build(&mut adapter)?;
//! let outcome = adapter.solve_minimize(model.lmax);
//!
//! let schedule = model.schedule(&outcome).expect("every instance has a schedule");
//! println!("{schedule}");
//! # Ok::<(), lmax_solver::model::ModelError>(())
//! ```
pub mod adapter;
pub mod instance;
pub mod model;

pub use lmax_core as core;
