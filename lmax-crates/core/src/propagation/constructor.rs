use super::DomainEvents;
use super::Propagator;
use super::PropagatorId;
use super::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::WatchListCP;
use crate::engine::Watchers;

/// A propagator constructor creates a fully initialised instance of a [`Propagator`].
///
/// The constructor is responsible for indicating on which events the propagator should be
/// enqueued.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator + 'static;

    /// Create the propagator instance from `Self`.
    fn create(self, context: PropagatorConstructorContext<'_>) -> Self::PropagatorImpl;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// Propagators use it to register to domain changes of variables and to retrieve the current
/// bounds of variables.
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    watch_list: &'a mut WatchListCP,
    assignments: &'a Assignments,
    propagator_id: PropagatorId,
}

impl<'a> PropagatorConstructorContext<'a> {
    pub(crate) fn new(
        watch_list: &'a mut WatchListCP,
        assignments: &'a Assignments,
        propagator_id: PropagatorId,
    ) -> Self {
        PropagatorConstructorContext {
            watch_list,
            assignments,
            propagator_id,
        }
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of `var`.
    pub fn register<Var: IntegerVariable>(&mut self, var: Var, domain_events: DomainEvents) {
        let mut watchers = Watchers::new(self.propagator_id, self.watch_list);
        var.watch_all(&mut watchers, domain_events.get_int_events());
    }
}

impl ReadDomains for PropagatorConstructorContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
