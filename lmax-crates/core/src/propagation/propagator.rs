use std::fmt::Debug;

use super::PropagationContext;
use crate::basic_types::PropagationStatusCP;

/// A propagator enforces a constraint by tightening the bounds of its variables.
///
/// [`Propagator::propagate`] is called whenever one of the events the propagator subscribed to
/// has happened. It either tightens domains through the [`PropagationContext`] or reports an
/// [`Inconsistency`](crate::propagation::Inconsistency), in which case the current partial
/// assignment cannot be extended to a solution.
///
/// Propagating must be idempotent with respect to the information it reads: running it twice in a
/// row without intermediate changes must not tighten anything the second time.
pub trait Propagator: Debug {
    /// Return the name of the propagator, used for logging.
    fn name(&self) -> &str;

    /// Determines the order in which enqueued propagators are run.
    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, context: PropagationContext<'_>) -> PropagationStatusCP;
}

/// Propagators with a higher priority are run before propagators with a lower priority. Cheap
/// propagators should use a high priority.
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    High = 0,
    #[default]
    Medium = 1,
    Low = 2,
}

impl Priority {
    pub(crate) const NUM_LEVELS: usize = 3;
}
