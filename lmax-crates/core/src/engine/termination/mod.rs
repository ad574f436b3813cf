//! A [`TerminationCondition`] is polled by the solver before every decision. It tells the solver
//! to give up, even if no conclusion has been reached yet. Search that is cut short this way is
//! reported as unknown, never as unsatisfiable.

pub(crate) mod combinator;
pub(crate) mod decision_budget;
pub(crate) mod indefinite;
pub(crate) mod time_budget;

/// Determines when the solver should stop searching.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the solver every time it branches.
    fn decision_has_been_made(&mut self) {}
}

/// An absent condition never triggers, which makes optional limits easy to combine.
impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|condition| condition.should_stop())
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::combinator::Combinator;
    use super::decision_budget::DecisionBudget;
    use super::indefinite::Indefinite;
    use super::TerminationCondition;

    #[test]
    fn decision_budget_triggers_after_the_budget_is_spent() {
        let mut budget = DecisionBudget::new(2);
        assert!(!budget.should_stop());

        budget.decision_has_been_made();
        assert!(!budget.should_stop());

        budget.decision_has_been_made();
        assert!(budget.should_stop());
    }

    #[test]
    fn missing_condition_never_triggers() {
        let mut condition: Option<DecisionBudget> = None;
        condition.decision_has_been_made();

        assert!(!condition.should_stop());
    }

    #[test]
    fn combinator_triggers_when_either_side_triggers() {
        let mut combined = Combinator::new(Indefinite, Some(DecisionBudget::new(1)));
        assert!(!combined.should_stop());

        combined.decision_has_been_made();
        assert!(combined.should_stop());
    }
}
