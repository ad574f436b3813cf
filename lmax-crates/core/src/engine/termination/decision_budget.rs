use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the solver has branched `budget` times.
#[derive(Debug, Copy, Clone)]
pub struct DecisionBudget {
    budget: u64,
    num_decisions: u64,
}

impl DecisionBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_decisions: 0,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.budget.saturating_sub(self.num_decisions)
    }
}

impl TerminationCondition for DecisionBudget {
    fn should_stop(&mut self) -> bool {
        self.remaining() == 0
    }

    fn decision_has_been_made(&mut self) {
        self.num_decisions += 1;
    }
}
