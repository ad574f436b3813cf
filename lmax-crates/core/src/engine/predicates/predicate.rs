use crate::engine::variables::DomainId;

/// Representation of a domain operation, also known as an atomic constraint. Domains are
/// intervals, so a predicate either tightens the lower or the upper bound of a [`DomainId`].
///
/// To create a [`Predicate`], use the concise [`predicate!`](crate::predicate) macro.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate {
    LowerBound { domain_id: DomainId, lower_bound: i32 },
    UpperBound { domain_id: DomainId, upper_bound: i32 },
}

impl Predicate {
    pub fn get_domain(&self) -> DomainId {
        match *self {
            Predicate::LowerBound { domain_id, .. } | Predicate::UpperBound { domain_id, .. } => {
                domain_id
            }
        }
    }

    pub fn get_right_hand_side(&self) -> i32 {
        match *self {
            Predicate::LowerBound { lower_bound, .. } => lower_bound,
            Predicate::UpperBound { upper_bound, .. } => upper_bound,
        }
    }

    pub fn is_lower_bound_predicate(&self) -> bool {
        matches!(self, Predicate::LowerBound { .. })
    }

    pub fn is_upper_bound_predicate(&self) -> bool {
        matches!(self, Predicate::UpperBound { .. })
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => Predicate::UpperBound {
                domain_id,
                upper_bound: lower_bound - 1,
            },
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => Predicate::LowerBound {
                domain_id,
                lower_bound: upper_bound + 1,
            },
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => write!(f, "[{domain_id} >= {lower_bound}]"),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => write!(f, "[{domain_id} <= {upper_bound}]"),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
