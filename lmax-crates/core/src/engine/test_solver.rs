//! This module exposes helpers that aid testing of propagators. The [`TestSolver`] allows setting
//! up specific scenarios under which to test the various operations of a propagator.

use crate::basic_types::Inconsistency;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::engine::WatchListCP;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorId;

/// A container for variables, which can be used to test propagators.
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    watch_list: WatchListCP,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.watch_list.grow();
        self.assignments.grow(lb, ub)
    }

    /// Creates the propagator and runs it once.
    pub(crate) fn new_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, Inconsistency>
    where
        Constructor: PropagatorConstructor,
    {
        let id = PropagatorId::create_from_index(self.propagators.len());
        let propagator = constructor.create(PropagatorConstructorContext::new(
            &mut self.watch_list,
            &self.assignments,
            id,
        ));
        let _ = self.propagators.push(Box::new(propagator));

        self.propagate(id)?;

        Ok(id)
    }

    pub(crate) fn propagate(&mut self, propagator: PropagatorId) -> Result<(), Inconsistency> {
        self.assignments.clear_domain_events();
        self.propagators[propagator].propagate(PropagationContext::new(&mut self.assignments))
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_upper_bound(var)
    }

    pub(crate) fn set_lower_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.tighten_lower_bound(var, bound).map(|_| ())
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub),
            (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }
}
