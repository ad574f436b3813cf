//! Contains the main building blocks for propagators.
//!
//! A [`Propagator`] removes values from domains which can never be part of a solution of the
//! constraint it enforces. It is built by a [`PropagatorConstructor`], which subscribes it to
//! [`DomainEvents`] on its variables through the [`PropagatorConstructorContext`]. Whenever one of
//! those events happens, the solver enqueues the propagator according to its [`Priority`] and
//! calls [`Propagator::propagate`] with a [`PropagationContext`].
//!
//! Propagators here are stateless: they recompute their inferences from the current bounds every
//! time they run, so nothing has to be restored on backtracking.
mod constructor;
mod contexts;
mod domain_events;
mod propagator;
mod propagator_id;

pub use constructor::PropagatorConstructor;
pub use constructor::PropagatorConstructorContext;
pub use contexts::PropagationContext;
pub use contexts::ReadDomains;
pub use domain_events::DomainEvents;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;

pub use crate::basic_types::Inconsistency;
pub use crate::basic_types::PropagationStatusCP;
pub use crate::engine::DomainEvent;
pub use crate::engine::EmptyDomain;
pub use crate::engine::Assignments;
pub use crate::engine::Watchers;
