//! A [`Brancher`] which sequentially applies a list of [`Brancher`]s until none of them can find
//! another decision.
use std::fmt::Debug;

use crate::basic_types::SolutionReference;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::predicate::Predicate;

/// An implementation of a [`Brancher`] which takes a [`Vec`] of `Box<dyn Brancher>` and asks them
/// for a decision in the order in which they were provided. Every other event is passed along to
/// all of them.
pub struct DynamicBrancher {
    branchers: Vec<Box<dyn Brancher>>,
    brancher_index: usize,
}

impl Debug for DynamicBrancher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBrancher")
            .field("num_branchers", &self.branchers.len())
            .finish()
    }
}

impl DynamicBrancher {
    pub fn new(branchers: Vec<Box<dyn Brancher>>) -> Self {
        DynamicBrancher {
            branchers,
            brancher_index: 0,
        }
    }
}

impl Brancher for DynamicBrancher {
    fn next_decision(&mut self, context: &mut SelectionContext<'_>) -> Option<Predicate> {
        while self.brancher_index < self.branchers.len() {
            if let Some(decision) = self.branchers[self.brancher_index].next_decision(context) {
                return Some(decision);
            }
            self.brancher_index += 1;
        }
        None
    }

    fn on_conflict(&mut self) {
        // An earlier brancher may have unfixed variables again.
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_conflict());
    }

    fn on_backtrack(&mut self, backtrack_level: usize) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_backtrack(backtrack_level));
    }

    fn on_decision_refuted(&mut self, decision: Predicate, decision_level: usize) {
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_decision_refuted(decision, decision_level));
    }

    fn on_solution(&mut self, solution: SolutionReference<'_>) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_solution(solution));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
    use crate::branching::branchers::set_times::SetTimes;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::engine::variables::DomainId;
    use crate::predicate;

    #[test]
    fn later_branchers_decide_once_earlier_ones_are_done() {
        let mut assignments = SelectionContext::create_for_testing(vec![(0, 0), (3, 8)]);
        let domains = assignments.get_domains().collect::<Vec<_>>();
        let (fixed, free) = (domains[0], domains[1]);

        let branchers: Vec<Box<dyn Brancher>> = vec![
            Box::new(SetTimes::new(&[fixed])),
            Box::new(IndependentVariableValueBrancher::<DomainId, _, _>::new(
                InputOrder::new(&domains),
                InDomainMin,
            )),
        ];
        let mut brancher = DynamicBrancher::new(branchers);

        {
            let mut context = SelectionContext::new(&assignments);
            assert_eq!(
                brancher.next_decision(&mut context),
                Some(predicate!(free <= 3))
            );
        }

        let _ = assignments
            .post_predicate(predicate!(free <= 3))
            .expect("non-empty domain");
        let mut context = SelectionContext::new(&assignments);
        assert_eq!(brancher.next_decision(&mut context), None);
    }
}
