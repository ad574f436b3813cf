use crate::results::SolutionReference;

/// Called by an [`OptimisationProcedure`] with every improving solution it finds.
///
/// [`OptimisationProcedure`]: super::OptimisationProcedure
pub trait SolutionCallback {
    fn on_solution_callback(&mut self, solution: SolutionReference<'_>);
}

impl<T> SolutionCallback for T
where
    T: FnMut(SolutionReference<'_>),
{
    fn on_solution_callback(&mut self, solution: SolutionReference<'_>) {
        (self)(solution)
    }
}

/// The empty callback ignores every solution.
impl SolutionCallback for () {
    fn on_solution_callback(&mut self, _solution: SolutionReference<'_>) {}
}
