use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::DomainEvent;
use crate::lmax_assert_moderate;
use crate::lmax_assert_simple;

/// The interval domains of all integer variables, together with a trail of the bound changes so
/// that they can be undone on backtracking.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    trail: Trail<TrailEntry>,
    bounds: KeyedVec<DomainId, Bounds>,
    events: Vec<(DomainEvent, DomainId)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bounds {
    lower_bound: i32,
    upper_bound: i32,
}

/// The bounds of a domain before they were modified.
#[derive(Clone, Copy, Debug)]
struct TrailEntry {
    domain_id: DomainId,
    old_bounds: Bounds,
}

/// A tightening would have left a domain without values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

impl Assignments {
    /// Creates a new domain `[lower_bound, upper_bound]`. Only allowed at the root.
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        lmax_assert_simple!(
            self.get_decision_level() == 0,
            "new domains can only be created at the root"
        );
        lmax_assert_simple!(lower_bound <= upper_bound, "the created domain is empty");

        self.bounds.push(Bounds {
            lower_bound,
            upper_bound,
        })
    }

    pub fn num_domains(&self) -> u32 {
        self.bounds.len() as u32
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.bounds.keys()
    }

    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.bounds[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.bounds[domain_id].upper_bound
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    /// Returns the value of the variable if its domain is a single value.
    pub fn get_assigned_value<Var: IntegerVariable>(&self, var: &Var) -> Option<i32> {
        let lower_bound = var.lower_bound(self);
        (lower_bound == var.upper_bound(self)).then_some(lower_bound)
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    /// Raises the lower bound of `domain_id`. Returns whether the domain changed; an update which
    /// would empty the domain leaves it untouched.
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        let old_bounds = self.bounds[domain_id];

        if new_lower_bound <= old_bounds.lower_bound {
            return Ok(false);
        }
        if new_lower_bound > old_bounds.upper_bound {
            return Err(EmptyDomain);
        }

        self.trail.push(TrailEntry {
            domain_id,
            old_bounds,
        });
        self.bounds[domain_id].lower_bound = new_lower_bound;
        self.events.push((DomainEvent::LowerBound, domain_id));
        if new_lower_bound == old_bounds.upper_bound {
            self.events.push((DomainEvent::Assign, domain_id));
        }

        Ok(true)
    }

    /// Lowers the upper bound of `domain_id`. Returns whether the domain changed; an update which
    /// would empty the domain leaves it untouched.
    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        let old_bounds = self.bounds[domain_id];

        if new_upper_bound >= old_bounds.upper_bound {
            return Ok(false);
        }
        if new_upper_bound < old_bounds.lower_bound {
            return Err(EmptyDomain);
        }

        self.trail.push(TrailEntry {
            domain_id,
            old_bounds,
        });
        self.bounds[domain_id].upper_bound = new_upper_bound;
        self.events.push((DomainEvent::UpperBound, domain_id));
        if new_upper_bound == old_bounds.lower_bound {
            self.events.push((DomainEvent::Assign, domain_id));
        }

        Ok(true)
    }

    /// Makes `predicate` true. Returns whether a domain changed.
    pub(crate) fn post_predicate(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.tighten_lower_bound(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.tighten_upper_bound(domain_id, upper_bound),
        }
    }

    /// Returns `Some(true)` if the predicate holds for every value left in the domain,
    /// `Some(false)` if it holds for none and `None` otherwise.
    pub fn evaluate_predicate(&self, predicate: Predicate) -> Option<bool> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => {
                if self.get_lower_bound(domain_id) >= lower_bound {
                    Some(true)
                } else if self.get_upper_bound(domain_id) < lower_bound {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => {
                if self.get_upper_bound(domain_id) <= upper_bound {
                    Some(true)
                } else if self.get_lower_bound(domain_id) > upper_bound {
                    Some(false)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_predicate_satisfied(&self, predicate: Predicate) -> bool {
        self.evaluate_predicate(predicate) == Some(true)
    }

    /// Restores the bounds as they were at `new_decision_level`. Pending events are discarded.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) {
        lmax_assert_simple!(new_decision_level < self.get_decision_level());

        let bounds = &mut self.bounds;
        self.trail.synchronise(new_decision_level).for_each(|entry| {
            bounds[entry.domain_id] = entry.old_bounds;
        });
        self.events.clear();

        lmax_assert_moderate!(self
            .bounds
            .iter()
            .all(|bounds| bounds.lower_bound <= bounds.upper_bound));
    }

    /// Hands out the events produced since the last drain, in the order in which they happened.
    pub(crate) fn drain_domain_events(
        &mut self,
    ) -> impl Iterator<Item = (DomainEvent, DomainId)> + '_ {
        self.events.drain(..)
    }

    pub(crate) fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate;

    #[test]
    fn tightening_records_events() {
        let mut assignment = Assignments::default();
        let d = assignment.grow(1, 5);

        assert_eq!(assignment.tighten_lower_bound(d, 3), Ok(true));
        assert_eq!(assignment.tighten_upper_bound(d, 3), Ok(true));

        let events = assignment.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(
            events,
            vec![
                (DomainEvent::LowerBound, d),
                (DomainEvent::UpperBound, d),
                (DomainEvent::Assign, d),
            ]
        );
        assert_eq!(assignment.get_assigned_value(&d), Some(3));
    }

    #[test]
    fn weaker_bounds_are_ignored() {
        let mut assignment = Assignments::default();
        let d = assignment.grow(1, 5);

        assert_eq!(assignment.tighten_lower_bound(d, 0), Ok(false));
        assert_eq!(assignment.tighten_upper_bound(d, 9), Ok(false));
        assert_eq!(assignment.drain_domain_events().count(), 0);
    }

    #[test]
    fn emptying_a_domain_leaves_it_untouched() {
        let mut assignment = Assignments::default();
        let d = assignment.grow(1, 5);

        assert_eq!(assignment.tighten_lower_bound(d, 6), Err(EmptyDomain));
        assert_eq!(assignment.tighten_upper_bound(d, 0), Err(EmptyDomain));
        assert_eq!(assignment.get_lower_bound(d), 1);
        assert_eq!(assignment.get_upper_bound(d), 5);
    }

    #[test]
    fn synchronise_restores_the_bounds_of_the_level() {
        let mut assignment = Assignments::default();
        let d = assignment.grow(0, 10);

        let _ = assignment.tighten_lower_bound(d, 2).expect("non-empty");
        assignment.increase_decision_level();
        let _ = assignment.tighten_lower_bound(d, 4).expect("non-empty");
        let _ = assignment.tighten_upper_bound(d, 8).expect("non-empty");
        assignment.increase_decision_level();
        let _ = assignment.tighten_upper_bound(d, 5).expect("non-empty");

        assignment.synchronise(1);
        assert_eq!(assignment.get_lower_bound(d), 4);
        assert_eq!(assignment.get_upper_bound(d), 8);

        assignment.synchronise(0);
        assert_eq!(assignment.get_lower_bound(d), 2);
        assert_eq!(assignment.get_upper_bound(d), 10);
        assert_eq!(assignment.drain_domain_events().count(), 0);
    }

    #[test]
    fn predicates_are_evaluated_against_the_bounds() {
        let mut assignment = Assignments::default();
        let d = assignment.grow(3, 6);

        assert_eq!(assignment.evaluate_predicate(predicate![d >= 3]), Some(true));
        assert_eq!(assignment.evaluate_predicate(predicate![d >= 7]), Some(false));
        assert_eq!(assignment.evaluate_predicate(predicate![d <= 4]), None);
        assert_eq!(assignment.evaluate_predicate(predicate![d <= 2]), Some(false));

        assert_eq!(assignment.post_predicate(predicate![d <= 4]), Ok(true));
        assert!(assignment.is_predicate_satisfied(predicate![d <= 4]));
    }
}
