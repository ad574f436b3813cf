use crate::engine::EmptyDomain;

/// The result of invoking a propagator. The propagation either succeeds or identifies that the
/// current partial assignment cannot be extended to a solution.
pub type PropagationStatusCP = Result<(), Inconsistency>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// A bound update would have emptied a domain.
    EmptyDomain,
    /// The propagator detected that its constraint cannot be satisfied, without touching a domain.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
