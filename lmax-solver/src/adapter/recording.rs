use super::AdapterError;
use super::Expression;
use super::SolveOutcome;
use super::SolverAdapter;

/// An adapter which only records what is registered and posted; handles are registration indices.
#[derive(Debug, Default)]
pub(crate) struct RecordingAdapter {
    pub(crate) variables: Vec<(String, i32, i32)>,
    pub(crate) expressions: Vec<Expression<usize>>,
    pub(crate) start_times: Vec<usize>,
}

impl SolverAdapter for RecordingAdapter {
    type Handle = usize;

    fn register_variable(&mut self, name: &str, lower: i32, upper: i32) -> usize {
        self.variables.push((name.to_owned(), lower, upper));
        self.variables.len() - 1
    }

    fn post_constraint(&mut self, expression: Expression<usize>) -> Result<(), AdapterError> {
        self.expressions.push(expression);
        Ok(())
    }

    fn declare_start_times(&mut self, starts: &[usize]) {
        self.start_times.extend_from_slice(starts);
    }

    fn solve_satisfy(&mut self) -> SolveOutcome<usize> {
        SolveOutcome::Unknown
    }

    fn solve_minimize(&mut self, _: usize) -> SolveOutcome<usize> {
        SolveOutcome::Unknown
    }
}
