use std::time::Duration;

use crate::statistics::log_statistic;

/// Core statistics of the search (e.g. the number of decisions).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SolverStatistics {
    /// The number of decisions taken by the solver
    pub(crate) num_decisions: u64,
    /// The number of conflicts encountered, both during propagation and when applying decisions
    pub(crate) num_conflicts: u64,
    /// The number of times a propagator was invoked
    pub(crate) num_propagations: u64,
    /// The peak depth of the search tree
    pub(crate) peak_depth: u64,
    /// The amount of time which is spent in the solver
    pub(crate) time_spent_in_solver: Duration,
}

impl SolverStatistics {
    pub(crate) fn log(&self) {
        log_statistic("nodes", self.num_decisions);
        log_statistic("failures", self.num_conflicts);
        log_statistic("propagations", self.num_propagations);
        log_statistic("peak_depth", self.peak_depth);
        log_statistic("solve_time", self.time_spent_in_solver.as_secs_f64());
    }
}
