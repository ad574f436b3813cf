use enumset::EnumSet;
use enumset::EnumSetType;

use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::propagation::PropagatorId;

/// A change to the bounds of a domain which propagators can subscribe to.
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// Event where an (integer) variable domain collapses to a single value.
    Assign,
    /// Event where an (integer) variable domain tightens the lower bound.
    LowerBound,
    /// Event where an (integer) variable domain tightens the upper bound.
    UpperBound,
}

/// Per domain, the propagators that subscribed to each [`DomainEvent`].
#[derive(Debug, Default)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, WatcherCP>,
}

#[derive(Debug, Default)]
struct WatcherCP {
    lower_bound_watchers: Vec<PropagatorId>,
    upper_bound_watchers: Vec<PropagatorId>,
    assign_watchers: Vec<PropagatorId>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(WatcherCP::default());
    }

    pub(crate) fn get_affected_propagators(
        &self,
        event: DomainEvent,
        domain: DomainId,
    ) -> &[PropagatorId] {
        let watcher = &self.watchers[domain];

        match event {
            DomainEvent::Assign => &watcher.assign_watchers,
            DomainEvent::LowerBound => &watcher.lower_bound_watchers,
            DomainEvent::UpperBound => &watcher.upper_bound_watchers,
        }
    }

    fn watch(&mut self, propagator_id: PropagatorId, domain: DomainId, events: EnumSet<DomainEvent>) {
        let watcher = &mut self.watchers[domain];

        for event in events {
            let event_watchers = match event {
                DomainEvent::LowerBound => &mut watcher.lower_bound_watchers,
                DomainEvent::UpperBound => &mut watcher.upper_bound_watchers,
                DomainEvent::Assign => &mut watcher.assign_watchers,
            };

            if !event_watchers.contains(&propagator_id) {
                event_watchers.push(propagator_id);
            }
        }
    }
}

/// Used to register a propagator for notifications about events to a particular variable.
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_id: PropagatorId,
    watch_list: &'a mut WatchListCP,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(propagator_id: PropagatorId, watch_list: &'a mut WatchListCP) -> Self {
        Watchers {
            propagator_id,
            watch_list,
        }
    }

    pub fn watch_all(&mut self, domain: DomainId, events: EnumSet<DomainEvent>) {
        self.watch_list.watch(self.propagator_id, domain, events);
    }
}
