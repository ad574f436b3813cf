use std::fmt::Display;
use std::hash::Hash;

use super::BuiltModel;
use crate::adapter::Assignment;
use crate::adapter::SolveOutcome;

/// One job of a [`Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledJob {
    pub job: usize,
    pub start: i32,
    pub end: i32,
    pub lateness: i32,
}

/// The values of a solution of the model, with the jobs in the order they are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub jobs: Vec<ScheduledJob>,
    pub lmax: i32,
}

impl<Handle: Copy + Eq + Hash> BuiltModel<Handle> {
    /// The schedule of the solution in `outcome`, if it contains one.
    pub fn schedule(&self, outcome: &SolveOutcome<Handle>) -> Option<Schedule> {
        self.schedule_of(outcome.assignment()?)
    }

    /// Reads the schedule from `assignment`; `None` if a model variable is not assigned.
    pub fn schedule_of(&self, assignment: &Assignment<Handle>) -> Option<Schedule> {
        let mut jobs = self
            .jobs
            .iter()
            .zip(&self.lateness)
            .enumerate()
            .map(|(job, (variables, lateness))| {
                Some(ScheduledJob {
                    job,
                    start: assignment.value(variables.start)?,
                    end: assignment.value(variables.end)?,
                    lateness: assignment.value(lateness.lateness)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        jobs.sort_by_key(|scheduled| (scheduled.start, scheduled.job));

        Some(Schedule {
            jobs,
            lmax: assignment.value(self.lmax)?,
        })
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for scheduled in &self.jobs {
            writeln!(
                f,
                "job {}: start = {}, end = {}, lateness = {}",
                scheduled.job, scheduled.start, scheduled.end, scheduled.lateness
            )?;
        }
        write!(f, "Lmax = {}", self.lmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobVariable;
    use crate::model::LatenessVariable;

    fn model() -> BuiltModel<usize> {
        BuiltModel {
            jobs: vec![
                JobVariable {
                    start: 0,
                    end: 1,
                    processing_time: 3,
                },
                JobVariable {
                    start: 2,
                    end: 3,
                    processing_time: 2,
                },
            ],
            lateness: vec![
                LatenessVariable {
                    lateness: 4,
                    due_date: 10,
                },
                LatenessVariable {
                    lateness: 5,
                    due_date: 4,
                },
            ],
            lmax: 6,
            num_disjunctions: 1,
        }
    }

    #[test]
    fn jobs_are_listed_in_start_order() {
        let assignment = [7, 10, 5, 7, 0, 3, 3]
            .into_iter()
            .enumerate()
            .collect::<Assignment<usize>>();

        let schedule = model()
            .schedule(&SolveOutcome::Optimal(assignment))
            .expect("all variables are assigned");

        assert_eq!(
            schedule.to_string(),
            "job 1: start = 5, end = 7, lateness = 3\n\
             job 0: start = 7, end = 10, lateness = 0\n\
             Lmax = 3"
        );
    }

    #[test]
    fn outcomes_without_a_solution_have_no_schedule() {
        assert_eq!(model().schedule(&SolveOutcome::Infeasible), None);
        assert_eq!(model().schedule(&SolveOutcome::Unknown), None);
    }

    #[test]
    fn partial_assignments_have_no_schedule() {
        let assignment = [(0, 0), (1, 3)].into_iter().collect::<Assignment<usize>>();

        assert_eq!(model().schedule_of(&assignment), None);
    }
}
