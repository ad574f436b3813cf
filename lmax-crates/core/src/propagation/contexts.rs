use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// Read access to the current domains.
pub trait ReadDomains {
    fn assignments(&self) -> &Assignments;

    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.assignments())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.assignments())
    }
}

/// Provides information about the state of the solver to a propagator, and allows it to tighten
/// the domains.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContext { assignments }
    }

    /// Raise the lower bound of `var` to `bound`. A bound which is not stronger is ignored.
    pub fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_lower_bound(self.assignments, bound).map(|_| ())
    }

    /// Lower the upper bound of `var` to `bound`. A bound which is not stronger is ignored.
    pub fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        var.set_upper_bound(self.assignments, bound).map(|_| ())
    }
}

impl ReadDomains for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
