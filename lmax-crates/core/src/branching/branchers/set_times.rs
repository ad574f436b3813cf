//! A [`Brancher`] for tasks which share a single machine. It fixes start times in chronological
//! order and postpones a task once starting it at its earliest start time has been refuted.
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Branches on the start times of tasks which cannot overlap.
///
/// Among the tasks which are not postponed, the one with the earliest start time is started as
/// early as possible; ties go to the task with the earliest latest start time. When this decision
/// is refuted, the task is postponed until its earliest start time changes. Schedules in which a
/// postponed task starts later than necessary are dominated by schedules which start it earlier,
/// so a node is pruned when:
/// - only postponed tasks are left to schedule, or
/// - a postponed task has to start before every task which is still available.
///
/// This only preserves the optimum for objectives which do not decrease when a task starts
/// earlier, such as the maximum lateness.
#[derive(Debug, Clone)]
pub struct SetTimes {
    starts: Vec<DomainId>,
    postponed: Vec<Postponement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Postponement {
    task: usize,
    /// The earliest start time right after the refutation.
    earliest_start: i32,
    decision_level: usize,
}

impl SetTimes {
    pub fn new(starts: &[DomainId]) -> Self {
        SetTimes {
            starts: starts.to_vec(),
            postponed: vec![],
        }
    }

    fn is_postponed(&self, task: usize, earliest_start: i32) -> bool {
        self.postponed.iter().any(|postponement| {
            postponement.task == task && postponement.earliest_start == earliest_start
        })
    }
}

impl Brancher for SetTimes {
    fn next_decision(&mut self, context: &mut SelectionContext<'_>) -> Option<Predicate> {
        // (task, earliest start, latest start)
        let mut available: Option<(usize, i32, i32)> = None;
        let mut postponed: Option<(usize, i32)> = None;

        for (task, &start) in self.starts.iter().enumerate() {
            if context.is_integer_fixed(start) {
                continue;
            }

            let earliest_start = context.lower_bound(start);
            let latest_start = context.upper_bound(start);

            if self.is_postponed(task, earliest_start) {
                if postponed.map_or(true, |(_, latest)| latest_start < latest) {
                    postponed = Some((task, latest_start));
                }
            } else if available
                .map_or(true, |(_, earliest, latest)| {
                    (earliest_start, latest_start) < (earliest, latest)
                })
            {
                available = Some((task, earliest_start, latest_start));
            }
        }

        let is_dominated = match (available, postponed) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some((_, earliest_start, _)), Some((_, latest_start))) => latest_start < earliest_start,
        };

        if is_dominated {
            let (task, _) = postponed.expect("only nodes with postponed tasks are dominated");
            let start = self.starts[task];
            return Some(predicate!(start <= context.lower_bound(start) - 1));
        }

        available.map(|(task, earliest_start, _)| {
            let start = self.starts[task];
            predicate!(start <= earliest_start)
        })
    }

    fn on_backtrack(&mut self, backtrack_level: usize) {
        self.postponed
            .retain(|postponement| postponement.decision_level <= backtrack_level);
    }

    fn on_decision_refuted(&mut self, decision: Predicate, decision_level: usize) {
        let Predicate::UpperBound {
            domain_id,
            upper_bound,
        } = decision
        else {
            return;
        };

        if let Some(task) = self.starts.iter().position(|&start| start == domain_id) {
            self.postponed.push(Postponement {
                task,
                earliest_start: upper_bound + 1,
                decision_level,
            });
        }
    }
}
