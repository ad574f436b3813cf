use std::time::Duration;

use lmax_core::branching::branchers::dynamic_brancher::DynamicBrancher;
use lmax_core::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use lmax_core::branching::branchers::set_times::SetTimes;
use lmax_core::branching::value_selection::InDomainMin;
use lmax_core::branching::variable_selection::Smallest;
use lmax_core::branching::Brancher;
use lmax_core::constraints;
use lmax_core::constraints::Constraint;
use lmax_core::constraints::LinearInequality;
use lmax_core::lmax_assert_moderate;
use lmax_core::optimisation::linear_sat_unsat::LinearSatUnsat;
use lmax_core::optimisation::OptimisationDirection;
use lmax_core::results::OptimisationResult;
use lmax_core::results::ProblemSolution;
use lmax_core::results::SatisfactionResult;
use lmax_core::results::Solution;
use lmax_core::termination::Combinator;
use lmax_core::termination::DecisionBudget;
use lmax_core::termination::TimeBudget;
use lmax_core::variables::AffineView;
use lmax_core::variables::DomainId;
use lmax_core::variables::TransformableVariable;
use lmax_core::Solver;
use log::debug;
use log::info;
use log::warn;

use super::AdapterError;
use super::Assignment;
use super::Comparator;
use super::Expression;
use super::LinearComparison;
use super::SolveOutcome;
use super::SolverAdapter;

/// The termination condition of a single solve.
type EngineTermination = Combinator<Option<TimeBudget>, Option<DecisionBudget>>;

/// A [`SolverAdapter`] backed by the `lmax-core` [`Solver`].
///
/// Linear comparisons are posted as linear inequalities, disjunctions of two inequalities as a
/// disjunction constraint and maximum expressions as a maximum constraint. Every solve starts from
/// the posted model; optional time and decision limits apply to each solve separately.
///
/// The search first fixes the declared start times with [`SetTimes`]; whatever is left unfixed
/// afterwards is set to its lower bound, smallest lower bound first.
#[derive(Debug, Default)]
pub struct EngineAdapter {
    solver: Solver,
    variables: Vec<DomainId>,
    start_times: Vec<DomainId>,
    posted: Vec<Expression<DomainId>>,
    time_limit: Option<Duration>,
    decision_limit: Option<u64>,
}

impl EngineAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops every solve after `time_limit` and reports what was found so far.
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Stops every solve after `decision_limit` decisions and reports what was found so far.
    pub fn with_decision_limit(mut self, decision_limit: Option<u64>) -> Self {
        self.decision_limit = decision_limit;
        self
    }

    /// The underlying engine, for example to inspect root bounds after posting.
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    fn brancher(&self) -> DynamicBrancher {
        let branchers: Vec<Box<dyn Brancher>> = vec![
            Box::new(SetTimes::new(&self.start_times)),
            Box::new(IndependentVariableValueBrancher::<DomainId, _, _>::new(
                Smallest::new(&self.variables),
                InDomainMin,
            )),
        ];
        DynamicBrancher::new(branchers)
    }

    fn termination(&self) -> EngineTermination {
        Combinator::new(
            self.time_limit.map(TimeBudget::starting_now),
            self.decision_limit.map(DecisionBudget::new),
        )
    }

    fn assignment(&self, solution: &Solution) -> Assignment<DomainId> {
        lmax_assert_moderate!(
            self.posted.iter().all(|expression| {
                expression.is_satisfied_by(|variable| solution.get_integer_value(variable))
            }),
            "every posted constraint holds in a solution"
        );

        self.variables
            .iter()
            .map(|&variable| (variable, solution.get_integer_value(variable)))
            .collect()
    }

    /// Posts `constraint`. A root conflict is not an error of the model, it makes the next solve
    /// report that there is no solution.
    fn post(&mut self, constraint: impl Constraint, expression: &Expression<DomainId>) {
        if let Err(error) = self.solver.add_constraint(constraint).post() {
            debug!("Posting {expression} made the model infeasible: {error}");
        }
    }
}

impl SolverAdapter for EngineAdapter {
    type Handle = DomainId;

    fn register_variable(&mut self, name: &str, lower: i32, upper: i32) -> DomainId {
        let variable = if lower <= upper {
            self.solver.new_named_bounded_integer(lower, upper, name)
        } else {
            warn!("The domain [{lower}, {upper}] of {name} is empty");
            let variable = self.solver.new_named_bounded_integer(lower, lower, name);
            self.post(
                constraints::less_than_or_equals(vec![variable], upper),
                &Expression::linear(vec![(1, variable)], Comparator::LessOrEqual, upper),
            );
            variable
        };

        self.variables.push(variable);
        variable
    }

    fn post_constraint(&mut self, expression: Expression<DomainId>) -> Result<(), AdapterError> {
        match &expression {
            Expression::Linear(comparison) => match comparison.comparator {
                Comparator::LessOrEqual => {
                    let (terms, rhs) = upper_bounded(comparison, false, &expression)?;
                    self.post(constraints::less_than_or_equals(terms, rhs), &expression);
                }
                Comparator::GreaterOrEqual => {
                    let (terms, rhs) = upper_bounded(comparison, true, &expression)?;
                    self.post(constraints::less_than_or_equals(terms, rhs), &expression);
                }
                Comparator::Equal => {
                    let below = upper_bounded(comparison, false, &expression)?;
                    let above = upper_bounded(comparison, true, &expression)?;
                    self.post(
                        vec![
                            constraints::less_than_or_equals(below.0, below.1),
                            constraints::less_than_or_equals(above.0, above.1),
                        ],
                        &expression,
                    );
                }
            },
            Expression::Or(left, right) => {
                let left = as_inequality(left, &expression)?;
                let right = as_inequality(right, &expression)?;
                self.post(constraints::disjunction(left, right), &expression);
            }
            Expression::Maximum { result, operands } => {
                if operands.is_empty() {
                    return Err(unsupported(&expression, "the maximum of no operands"));
                }
                self.post(
                    constraints::maximum(operands.clone(), *result),
                    &expression,
                );
            }
        }

        self.posted.push(expression);
        Ok(())
    }

    fn declare_start_times(&mut self, starts: &[DomainId]) {
        self.start_times.extend_from_slice(starts);
    }

    fn solve_satisfy(&mut self) -> SolveOutcome<DomainId> {
        let mut brancher = self.brancher();
        let mut termination = self.termination();

        let outcome = match self.solver.satisfy(&mut brancher, &mut termination) {
            SatisfactionResult::Satisfiable(solution) => {
                SolveOutcome::Satisfiable(self.assignment(&solution))
            }
            SatisfactionResult::Unsatisfiable => SolveOutcome::Infeasible,
            SatisfactionResult::Unknown => SolveOutcome::Unknown,
        };

        info!("Satisfaction search finished: {}", describe(&outcome));
        self.solver.log_statistics();
        outcome
    }

    fn solve_minimize(&mut self, objective: DomainId) -> SolveOutcome<DomainId> {
        let mut brancher = self.brancher();
        let mut termination = self.termination();

        let result = self.solver.optimise(
            &mut brancher,
            &mut termination,
            LinearSatUnsat::new(OptimisationDirection::Minimise, objective, ()),
        );

        let outcome = match &result {
            OptimisationResult::Optimal(solution) => SolveOutcome::Optimal(self.assignment(solution)),
            OptimisationResult::Satisfiable(solution) => {
                SolveOutcome::Satisfiable(self.assignment(solution))
            }
            OptimisationResult::Unsatisfiable => SolveOutcome::Infeasible,
            OptimisationResult::Unknown => SolveOutcome::Unknown,
        };

        info!("Minimisation finished: {}", describe(&outcome));
        match outcome.assignment().and_then(|assignment| assignment.value(objective)) {
            Some(objective_value) => self
                .solver
                .log_statistics_with_objective(objective_value as i64),
            None => self.solver.log_statistics(),
        }
        outcome
    }
}

/// Rewrites `comparison`, or its negation when `negate` holds, as `\sum a_i x_i <= b`. Terms with
/// a zero coefficient are left out.
fn upper_bounded(
    comparison: &LinearComparison<DomainId>,
    negate: bool,
    expression: &Expression<DomainId>,
) -> Result<(Vec<AffineView<DomainId>>, i32), AdapterError> {
    let overflow = || unsupported(expression, "a coefficient or bound does not fit in an i32");
    let sign = if negate { -1 } else { 1 };

    let terms = comparison
        .terms
        .iter()
        .filter(|(coefficient, _)| *coefficient != 0)
        .map(|&(coefficient, variable)| {
            coefficient
                .checked_mul(sign)
                .map(|coefficient| variable.scaled(coefficient))
                .ok_or_else(overflow)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let rhs = comparison
        .rhs
        .checked_sub(comparison.constant)
        .and_then(|rhs| rhs.checked_mul(sign))
        .ok_or_else(overflow)?;

    Ok((terms, rhs))
}

/// Converts one side of a disjunction into a `<=` inequality.
fn as_inequality(
    side: &Expression<DomainId>,
    disjunction: &Expression<DomainId>,
) -> Result<LinearInequality<AffineView<DomainId>>, AdapterError> {
    let Expression::Linear(comparison) = side else {
        return Err(unsupported(
            disjunction,
            "both sides of a disjunction have to be linear comparisons",
        ));
    };

    let (terms, rhs) = match comparison.comparator {
        Comparator::LessOrEqual => upper_bounded(comparison, false, disjunction)?,
        Comparator::GreaterOrEqual => upper_bounded(comparison, true, disjunction)?,
        Comparator::Equal => {
            return Err(unsupported(
                disjunction,
                "equalities cannot be part of a disjunction",
            ))
        }
    };
    Ok(LinearInequality::less_than_or_equals(terms, rhs))
}

fn unsupported(expression: &Expression<DomainId>, reason: &str) -> AdapterError {
    AdapterError::Unsupported {
        expression: expression.to_string(),
        reason: reason.to_owned(),
    }
}

fn describe(outcome: &SolveOutcome<DomainId>) -> &'static str {
    match outcome {
        SolveOutcome::Satisfiable(_) => "a solution was found",
        SolveOutcome::Optimal(_) => "an optimal solution was found",
        SolveOutcome::Infeasible => "there is no solution",
        SolveOutcome::Unknown => "search stopped without a conclusion",
    }
}
