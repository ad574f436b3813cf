//! Houses the solver which attempts to find a solution to a Constraint Satisfaction Problem (CSP)
//! using bounds propagation and depth-first chronological backtracking.

use std::cmp::max;
use std::time::Instant;

use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::PropagationStatusCP;
use crate::basic_types::SolutionReference;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::PropagatorQueue;
use crate::engine::SolverStatistics;
use crate::engine::VariableNames;
use crate::engine::WatchListCP;
use crate::lmax_assert_eq_simple;
use crate::lmax_assert_moderate;
use crate::lmax_assert_simple;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorId;

/// A solver which attempts to find a solution to a Constraint Satisfaction Problem (CSP).
///
/// Every decision opens a new decision level on the trail. When propagation fails, the solver
/// undoes the most recent decision and posts its negation on the level above, so every subtree
/// is visited at most once. Assumptions are posted first, one per decision level; a conflict that
/// reaches one of these levels means that the problem is infeasible under the assumptions.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    /// Whether the problem is known to be infeasible at the root.
    state: CSPSolverState,
    assignments: Assignments,
    watch_list: WatchListCP,
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    propagator_queue: PropagatorQueue,
    /// The decision taken on every decision level above the root.
    decisions: Vec<Predicate>,
    variable_names: VariableNames,
    statistics: SolverStatistics,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum CSPSolverState {
    #[default]
    Ready,
    Infeasible,
}

/// The outcome of a call to [`ConstraintSatisfactionSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    /// Every variable is assigned. The solution can be read from the solver until it is
    /// restored to the root.
    Feasible,
    Infeasible,
    /// A conflict was derived which only depends on the assumptions.
    InfeasibleUnderAssumptions,
    Timeout,
}

// methods that offer basic functionality
impl ConstraintSatisfactionSolver {
    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn get_solution_reference(&self) -> SolutionReference<'_> {
        SolutionReference::new(&self.assignments)
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state == CSPSolverState::Infeasible
    }

    pub(crate) fn log_statistics(&self) {
        self.statistics.log();
    }

    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        lmax_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "Can only create variables at the root level."
        );

        let domain_id = self.assignments.grow(lower_bound, upper_bound);
        self.watch_list.grow();

        if let Some(name) = name {
            self.variable_names.add_integer(domain_id, name);
        }

        domain_id
    }

    pub(crate) fn get_variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(domain_id)
    }

    pub(crate) fn get_lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.lower_bound(&self.assignments)
    }

    pub(crate) fn get_upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.upper_bound(&self.assignments)
    }

    pub(crate) fn get_assigned_integer_value(&self, variable: &impl IntegerVariable) -> Option<i32> {
        self.assignments.get_assigned_value(variable)
    }

    /// Undoes every decision, so that constraints and variables can be added again.
    pub(crate) fn restore_state_at_root(&mut self, brancher: &mut impl Brancher) {
        if self.assignments.get_decision_level() != 0 {
            self.backtrack(0, brancher);
        }
    }

    /// Adds a propagator and runs it at the root. When the root becomes inconsistent, the solver
    /// is marked as infeasible.
    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
    {
        if self.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        lmax_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "Propagators can only be added at the root level."
        );

        let propagator_id = PropagatorId::create_from_index(self.propagators.len());
        let propagator = constructor.create(PropagatorConstructorContext::new(
            &mut self.watch_list,
            &self.assignments,
            propagator_id,
        ));
        let priority = propagator.priority();
        let new_propagator_id = self.propagators.push(Box::new(propagator));
        lmax_assert_eq_simple!(new_propagator_id, propagator_id);

        self.propagator_queue
            .enqueue_propagator(propagator_id, priority);

        if self.propagate().is_err() {
            debug!(
                "Adding {} made the root inconsistent",
                self.propagators[propagator_id].name()
            );
            self.state = CSPSolverState::Infeasible;
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(propagator_id)
    }
}

// methods that serve as the main building blocks
impl ConstraintSatisfactionSolver {
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        self.solve_under_assumptions(&[], termination, brancher)
    }

    pub(crate) fn solve_under_assumptions(
        &mut self,
        assumptions: &[Predicate],
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.is_infeasible() {
            return CSPSolverExecutionFlag::Infeasible;
        }
        lmax_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "Search has to start from the root; did you forget to restore the state?"
        );

        let start_time = Instant::now();
        let flag = self.solve_internal(assumptions, termination, brancher);
        self.statistics.time_spent_in_solver += start_time.elapsed();

        if flag == CSPSolverExecutionFlag::Feasible {
            brancher.on_solution(self.get_solution_reference());
        }

        flag
    }

    fn solve_internal(
        &mut self,
        assumptions: &[Predicate],
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        loop {
            if termination.should_stop() {
                return CSPSolverExecutionFlag::Timeout;
            }

            let is_conflicting = match self.propagate() {
                Ok(()) => match self.make_next_decision(assumptions, termination, brancher) {
                    Ok(is_decided) => !is_decided,
                    Err(flag) => return flag,
                },
                Err(_) => true,
            };

            if is_conflicting {
                self.statistics.num_conflicts += 1;
                brancher.on_conflict();

                if let Err(flag) = self.resolve_conflict(assumptions.len(), brancher) {
                    return flag;
                }
            }
        }
    }

    /// Posts the next assumption or, once all are posted, the decision of the brancher. Returns
    /// `false` when the brancher prunes the current node and [`CSPSolverExecutionFlag::Feasible`]
    /// as an error when nothing is left to decide.
    fn make_next_decision(
        &mut self,
        assumptions: &[Predicate],
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> Result<bool, CSPSolverExecutionFlag> {
        let decision_level = self.assignments.get_decision_level();

        let decision = if let Some(&assumption) = assumptions.get(decision_level) {
            if self.assignments.evaluate_predicate(assumption) == Some(false) {
                return Err(CSPSolverExecutionFlag::InfeasibleUnderAssumptions);
            }
            assumption
        } else {
            let mut context = SelectionContext::new(&self.assignments);
            let Some(decision) = brancher.next_decision(&mut context) else {
                return Err(CSPSolverExecutionFlag::Feasible);
            };

            let evaluation = self.assignments.evaluate_predicate(decision);
            if evaluation == Some(false) {
                return Ok(false);
            }
            lmax_assert_moderate!(
                evaluation.is_none(),
                "Decision should not be true already; double check the brancher"
            );

            self.statistics.num_decisions += 1;
            termination.decision_has_been_made();
            decision
        };

        self.assignments.increase_decision_level();
        self.decisions.push(decision);
        self.statistics.peak_depth = max(
            self.statistics.peak_depth,
            self.assignments.get_decision_level() as u64,
        );

        let _ = self
            .assignments
            .post_predicate(decision)
            .expect("Decisions are expected not to fail.");

        Ok(true)
    }

    /// Undoes the most recent decision and posts its negation, since the subtree below the
    /// decision has no solution.
    fn resolve_conflict(
        &mut self,
        num_assumptions: usize,
        brancher: &mut impl Brancher,
    ) -> Result<(), CSPSolverExecutionFlag> {
        loop {
            let decision_level = self.assignments.get_decision_level();

            if decision_level == 0 {
                self.state = CSPSolverState::Infeasible;
                return Err(CSPSolverExecutionFlag::Infeasible);
            }
            if decision_level <= num_assumptions {
                return Err(CSPSolverExecutionFlag::InfeasibleUnderAssumptions);
            }

            let decision = self
                .decisions
                .pop()
                .expect("every decision level above the root has a decision");
            self.backtrack(decision_level - 1, brancher);

            if self.assignments.post_predicate(!decision).is_ok() {
                brancher.on_decision_refuted(decision, decision_level - 1);
                return Ok(());
            }
        }
    }

    fn backtrack(&mut self, backtrack_level: usize, brancher: &mut impl Brancher) {
        lmax_assert_simple!(backtrack_level < self.assignments.get_decision_level());

        self.assignments.synchronise(backtrack_level);
        self.decisions.truncate(backtrack_level);
        self.propagator_queue.clear();

        brancher.on_backtrack(backtrack_level);
    }

    /// Runs the enqueued propagators until none of them changes a domain any more.
    fn propagate(&mut self) -> PropagationStatusCP {
        // Decisions and their negations are posted outside of the propagators.
        self.enqueue_watchers_of_domain_events();

        while let Some(propagator_id) = self.propagator_queue.pop() {
            self.statistics.num_propagations += 1;

            let context = PropagationContext::new(&mut self.assignments);
            if let Err(inconsistency) = self.propagators[propagator_id].propagate(context) {
                self.assignments.clear_domain_events();
                self.propagator_queue.clear();
                return Err(inconsistency);
            }

            self.enqueue_watchers_of_domain_events();
        }

        lmax_assert_moderate!(self.propagator_queue.is_empty());
        Ok(())
    }

    fn enqueue_watchers_of_domain_events(&mut self) {
        for (event, domain_id) in self.assignments.drain_domain_events() {
            for &propagator_id in self.watch_list.get_affected_propagators(event, domain_id) {
                let priority = self.propagators[propagator_id].priority();
                self.propagator_queue
                    .enqueue_propagator(propagator_id, priority);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::engine::termination::decision_budget::DecisionBudget;
    use crate::engine::termination::indefinite::Indefinite;
    use crate::engine::variables::TransformableVariable;
    use crate::predicate;
    use crate::propagators::arithmetic::linear_less_or_equal::LinearLessOrEqualPropagatorArgs;
    use crate::propagators::disjunction::DisjunctionArgs;
    use crate::propagators::disjunction::LinearInequality;

    /// Forwards to an input-order brancher and records the search events it is told about.
    struct EventRecorder {
        inner: IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMin>,
        backtracks: Vec<usize>,
        refuted: Vec<(Predicate, usize)>,
    }

    impl Brancher for EventRecorder {
        fn next_decision(&mut self, context: &mut SelectionContext<'_>) -> Option<Predicate> {
            self.inner.next_decision(context)
        }

        fn on_backtrack(&mut self, backtrack_level: usize) {
            self.backtracks.push(backtrack_level);
        }

        fn on_decision_refuted(&mut self, decision: Predicate, decision_level: usize) {
            self.refuted.push((decision, decision_level));
        }
    }

    /// Prunes every node by proposing a decision which is already false.
    struct PruneEverything(DomainId);

    impl Brancher for PruneEverything {
        fn next_decision(&mut self, context: &mut SelectionContext<'_>) -> Option<Predicate> {
            let x = self.0;
            Some(predicate!(x <= context.lower_bound(x) - 1))
        }
    }

    fn brancher_over(
        solver: &ConstraintSatisfactionSolver,
    ) -> IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMin> {
        let variables = solver.assignments().get_domains().collect::<Vec<_>>();
        IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin)
    }

    /// Posts `x + y <= c` and `-x - y <= -c`.
    fn post_sum_equals(solver: &mut ConstraintSatisfactionSolver, x: DomainId, y: DomainId, c: i32) {
        let _ = solver
            .add_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x.scaled(1), y.scaled(1)].into(),
                c,
            })
            .expect("no root conflict");
        let _ = solver
            .add_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x.scaled(-1), y.scaled(-1)].into(),
                c: -c,
            })
            .expect("no root conflict");
    }

    #[test]
    fn search_finds_a_solution_after_backtracking() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 5, None);
        let y = solver.create_new_integer_variable(0, 3, None);
        post_sum_equals(&mut solver, x, y, 7);

        let mut brancher = brancher_over(&solver);
        let flag = solver.solve(&mut Indefinite, &mut brancher);

        assert_eq!(flag, CSPSolverExecutionFlag::Feasible);
        assert_eq!(solver.get_assigned_integer_value(&x), Some(4));
        assert_eq!(solver.get_assigned_integer_value(&y), Some(3));

        solver.restore_state_at_root(&mut brancher);
        assert_eq!(solver.get_lower_bound(&x), 4);
        assert_eq!(solver.get_upper_bound(&x), 5);
    }

    #[test]
    fn exhausting_the_search_proves_infeasibility() {
        let mut solver = ConstraintSatisfactionSolver::default();

        // Three tasks of length 2 which all have to start in [0, 2] cannot be sequenced. Bound
        // propagation does not detect this at the root, the search has to.
        let starts = (0..3)
            .map(|_| solver.create_new_integer_variable(0, 2, None))
            .collect::<Vec<_>>();
        for (i, &a) in starts.iter().enumerate() {
            for &b in starts.iter().skip(i + 1) {
                let _ = solver
                    .add_propagator(DisjunctionArgs {
                        left: LinearInequality::less_than_or_equals(
                            vec![a.scaled(1), b.scaled(-1)],
                            -2,
                        ),
                        right: LinearInequality::less_than_or_equals(
                            vec![b.scaled(1), a.scaled(-1)],
                            -2,
                        ),
                    })
                    .expect("no root conflict");
            }
        }

        let mut brancher = brancher_over(&solver);
        let flag = solver.solve(&mut Indefinite, &mut brancher);

        assert_eq!(flag, CSPSolverExecutionFlag::Infeasible);
        assert!(solver.is_infeasible());
    }

    #[test]
    fn refuted_decisions_are_reported_on_the_level_of_their_negation() {
        let mut solver = ConstraintSatisfactionSolver::default();

        let starts = (0..3)
            .map(|_| solver.create_new_integer_variable(0, 2, None))
            .collect::<Vec<_>>();
        for (i, &a) in starts.iter().enumerate() {
            for &b in starts.iter().skip(i + 1) {
                let _ = solver
                    .add_propagator(DisjunctionArgs {
                        left: LinearInequality::less_than_or_equals(
                            vec![a.scaled(1), b.scaled(-1)],
                            -2,
                        ),
                        right: LinearInequality::less_than_or_equals(
                            vec![b.scaled(1), a.scaled(-1)],
                            -2,
                        ),
                    })
                    .expect("no root conflict");
            }
        }

        let mut brancher = EventRecorder {
            inner: brancher_over(&solver),
            backtracks: vec![],
            refuted: vec![],
        };
        let flag = solver.solve(&mut Indefinite, &mut brancher);

        let first = starts[0];
        assert_eq!(flag, CSPSolverExecutionFlag::Infeasible);
        // Refuting `first <= 0` leaves `first` in [1, 2], which already conflicts at the root.
        assert_eq!(brancher.refuted, vec![(predicate!(first <= 0), 0)]);
        assert_eq!(brancher.backtracks, vec![0]);
    }

    #[test]
    fn decisions_which_are_already_false_prune_the_node() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 5, None);

        let mut brancher = PruneEverything(x);
        let flag = solver.solve_under_assumptions(
            &[predicate!(x <= 3)],
            &mut Indefinite,
            &mut brancher,
        );
        assert_eq!(flag, CSPSolverExecutionFlag::InfeasibleUnderAssumptions);
        assert!(!solver.is_infeasible());

        solver.restore_state_at_root(&mut brancher);
        assert_eq!(
            solver.solve(&mut Indefinite, &mut brancher),
            CSPSolverExecutionFlag::Infeasible
        );
        assert!(solver.is_infeasible());
    }

    #[test]
    fn root_conflict_marks_the_solver_infeasible() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(3, 5, None);

        let result = solver.add_propagator(LinearLessOrEqualPropagatorArgs {
            x: [x].into(),
            c: 2,
        });

        assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));
        assert_eq!(
            solver.add_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x].into(),
                c: 10,
            }),
            Err(ConstraintOperationError::InfeasibleState)
        );

        let mut brancher = brancher_over(&solver);
        assert_eq!(
            solver.solve(&mut Indefinite, &mut brancher),
            CSPSolverExecutionFlag::Infeasible
        );
    }

    #[test]
    fn assumptions_which_cannot_hold_are_reported() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 5, None);
        let y = solver.create_new_integer_variable(0, 3, None);
        post_sum_equals(&mut solver, x, y, 7);

        let mut brancher = brancher_over(&solver);
        let flag = solver.solve_under_assumptions(
            &[predicate!(x <= 3)],
            &mut Indefinite,
            &mut brancher,
        );

        assert_eq!(flag, CSPSolverExecutionFlag::InfeasibleUnderAssumptions);
        assert!(!solver.is_infeasible());

        solver.restore_state_at_root(&mut brancher);
        let flag = solver.solve_under_assumptions(
            &[predicate!(x <= 4)],
            &mut Indefinite,
            &mut brancher,
        );
        assert_eq!(flag, CSPSolverExecutionFlag::Feasible);
        assert_eq!(solver.get_assigned_integer_value(&x), Some(4));
    }

    #[test]
    fn exhausted_decision_budget_is_a_timeout() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let _ = solver.create_new_integer_variable(0, 5, None);
        let _ = solver.create_new_integer_variable(0, 5, None);

        let mut brancher = brancher_over(&solver);
        let flag = solver.solve(&mut DecisionBudget::new(1), &mut brancher);

        assert_eq!(flag, CSPSolverExecutionFlag::Timeout);
        assert!(!solver.is_infeasible());
    }
}
