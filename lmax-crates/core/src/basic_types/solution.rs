use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::lmax_assert_simple;

/// Common access to the values of a solution, whether it is owned ([`Solution`]) or borrowed from
/// the solver ([`SolutionReference`]).
pub trait ProblemSolution: HasAssignments {
    /// Returns the number of defined domains.
    fn num_domains(&self) -> usize {
        self.assignments().num_domains() as usize
    }

    /// Returns the value of the variable in the solution.
    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        self.assignments()
            .get_assigned_value(&var)
            .expect("all variables should be assigned in a solution")
    }
}

/// A solution which keeps a reference to the assignments of the solver.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    assignments: &'a Assignments,
}

impl<'a> SolutionReference<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> SolutionReference<'a> {
        lmax_assert_simple!(
            assignments
                .get_domains()
                .all(|domain| assignments.is_domain_assigned(domain)),
            "a solution assigns every domain"
        );
        SolutionReference { assignments }
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }
}

impl ProblemSolution for SolutionReference<'_> {}

/// A solution which owns its assignments.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    assignments: Assignments,
}

impl Solution {
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }

    pub fn as_reference(&self) -> SolutionReference<'_> {
        SolutionReference {
            assignments: &self.assignments,
        }
    }
}

impl ProblemSolution for Solution {}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference<'_>) -> Self {
        Self {
            assignments: value.assignments.clone(),
        }
    }
}

pub trait HasAssignments {
    fn assignments(&self) -> &Assignments;
}

impl HasAssignments for SolutionReference<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

impl HasAssignments for Solution {
    fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}
