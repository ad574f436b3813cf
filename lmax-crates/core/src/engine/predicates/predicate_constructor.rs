use super::predicate::Predicate;

/// A trait which defines methods for creating a [`Predicate`].
pub trait PredicateConstructor {
    /// The value used to represent a bound.
    type Value;

    /// Creates a lower-bound predicate (e.g. `[x >= v]`).
    fn lower_bound_predicate(&self, bound: Self::Value) -> Predicate;

    /// Creates an upper-bound predicate (e.g. `[x <= v]`).
    fn upper_bound_predicate(&self, bound: Self::Value) -> Predicate;
}

/// A macro which allows for the creation of a [`Predicate`].
///
/// # Example
/// ```rust
/// # use lmax_core::Solver;
/// # use lmax_core::predicate;
/// let mut solver = Solver::default();
/// let x = solver.new_bounded_integer(0, 10);
///
/// let lower_bound_predicate = predicate!(x >= 5);
/// assert_eq!(lower_bound_predicate.get_domain(), x);
/// assert_eq!(lower_bound_predicate.get_right_hand_side(), 5);
///
/// let upper_bound_predicate = predicate!(x <= 5);
/// assert!(upper_bound_predicate.is_upper_bound_predicate());
/// ```
#[macro_export]
macro_rules! predicate {
    ($($var:ident).+ >= $bound:expr) => {{
        #[allow(unused_imports, reason = "could be imported at call-site")]
        use $crate::predicates::PredicateConstructor;
        $($var).+.lower_bound_predicate($bound)
    }};
    ($($var:ident).+ <= $bound:expr) => {{
        #[allow(unused_imports, reason = "could be imported at call-site")]
        use $crate::predicates::PredicateConstructor;
        $($var).+.upper_bound_predicate($bound)
    }};
}

#[cfg(test)]
mod tests {
    use crate::engine::variables::DomainId;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn macro_nested_identifiers_are_matched() {
        struct Wrapper {
            x: DomainId,
        }

        let wrapper = Wrapper {
            x: DomainId::new(0),
        };

        assert_eq!(wrapper.x, predicate![wrapper.x >= 2].get_domain());
        assert_eq!(3, predicate![wrapper.x <= 3].get_right_hand_side());
    }

    #[test]
    fn views_are_translated_to_their_domain() {
        let x = DomainId::new(1);
        let view = x.offset(4);

        assert_eq!(predicate![view >= 6], predicate![x >= 2]);
        assert_eq!(predicate![view <= 6], predicate![x <= 2]);
    }
}
