use std::fmt::Debug;

use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::predicates::predicate_constructor::PredicateConstructor;
use crate::engine::Assignments;
use crate::engine::DomainEvent;
use crate::engine::EmptyDomain;
use crate::engine::Watchers;

/// A trait specifying the required behaviour of an integer variable such as retrieving a
/// lower-bound ([`IntegerVariable::lower_bound`]).
pub trait IntegerVariable:
    Clone + Debug + PredicateConstructor<Value = i32> + TransformableVariable<Self::AffineView>
{
    type AffineView: IntegerVariable + 'static;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignment: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignment: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignment: &Assignments, value: i32) -> bool {
        self.lower_bound(assignment) <= value && value <= self.upper_bound(assignment)
    }

    /// Tighten the lower bound of the variable. Returns whether the domain changed.
    fn set_lower_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain>;

    /// Tighten the upper bound of the variable. Returns whether the domain changed.
    fn set_upper_bound(
        &self,
        assignment: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>);
}
