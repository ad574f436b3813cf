mod assignments;
pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod predicates;
mod propagator_queue;
mod solver_statistics;
pub(crate) mod termination;
#[cfg(test)]
pub(crate) mod test_solver;
mod variable_names;
pub(crate) mod variables;
mod watch_lists;

pub use assignments::Assignments;
pub use assignments::EmptyDomain;
pub(crate) use constraint_satisfaction_solver::CSPSolverExecutionFlag;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use solver_statistics::SolverStatistics;
pub(crate) use variable_names::VariableNames;
pub use watch_lists::DomainEvent;
pub(crate) use watch_lists::WatchListCP;
pub use watch_lists::Watchers;
