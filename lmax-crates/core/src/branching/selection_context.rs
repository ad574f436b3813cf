use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;

/// The context provided to the [`Brancher`](crate::branching::Brancher), it allows the retrieval
/// of domain values of variables.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Returns the difference between the upper-bound and the lower-bound of the provided
    /// [`IntegerVariable`].
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.assignments) - var.lower_bound(self.assignments)
    }

    /// Returns the lower bound of the provided [`IntegerVariable`]
    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(self.assignments)
    }

    /// Returns the upper bound of the provided [`IntegerVariable`]
    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.assignments)
    }

    /// Determines whether the provided [`IntegerVariable`] has a unit domain.
    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        self.lower_bound(var.clone()) == self.upper_bound(var)
    }

    /// Returns all currently defined [`DomainId`]s.
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }

    #[cfg(test)]
    /// Creates an [`Assignments`] with one domain per provided pair of bounds.
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> Assignments {
        let mut assignments = Assignments::default();
        for (lower_bound, upper_bound) in domains {
            let _ = assignments.grow(lower_bound, upper_bound);
        }
        assignments
    }
}
