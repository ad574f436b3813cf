use log::debug;

use super::OptimisationProcedure;
use super::SolutionCallback;
use crate::branching::Brancher;
use crate::optimisation::OptimisationDirection;
use crate::predicate;
use crate::results::OptimisationResult;
use crate::results::ProblemSolution;
use crate::results::SatisfactionResult;
use crate::results::SatisfactionResultUnderAssumptions;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::Solver;

/// Implements the linear SAT-UNSAT (LSU) optimisation procedure.
///
/// The procedure first finds any solution, and then keeps asking for a solution which is strictly
/// better than the best one so far. Once no such solution exists, the best solution is optimal.
/// When the [`TerminationCondition`] triggers after a solution has been found, that solution is
/// reported as [`OptimisationResult::Satisfiable`].
#[derive(Debug, Clone, Copy)]
pub struct LinearSatUnsat<Var, Callback> {
    direction: OptimisationDirection,
    objective: Var,
    solution_callback: Callback,
}

impl<Var, Callback> LinearSatUnsat<Var, Callback> {
    /// Create a new instance of [`LinearSatUnsat`].
    pub fn new(
        direction: OptimisationDirection,
        objective: Var,
        solution_callback: Callback,
    ) -> Self {
        Self {
            direction,
            objective,
            solution_callback,
        }
    }
}

impl<Var, Callback> LinearSatUnsat<Var, Callback>
where
    Var: IntegerVariable,
    Callback: SolutionCallback,
{
    fn run_optimisation(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
        objective: Var::AffineView,
        mut best_solution: Solution,
    ) -> OptimisationResult {
        loop {
            self.solution_callback
                .on_solution_callback(best_solution.as_reference());

            let best_objective_value = best_solution.get_integer_value(objective.clone());
            debug!("Found a solution with objective value {best_objective_value}");

            let solve_result = solver.satisfy_under_assumptions(
                brancher,
                termination,
                &[predicate![objective <= best_objective_value - 1]],
            );

            match solve_result {
                SatisfactionResultUnderAssumptions::Satisfiable(solution) => {
                    best_solution = solution;
                }
                SatisfactionResultUnderAssumptions::UnsatisfiableUnderAssumptions
                | SatisfactionResultUnderAssumptions::Unsatisfiable => {
                    return OptimisationResult::Optimal(best_solution);
                }
                SatisfactionResultUnderAssumptions::Unknown => {
                    return OptimisationResult::Satisfiable(best_solution);
                }
            }
        }
    }
}

impl<Var, Callback> OptimisationProcedure for LinearSatUnsat<Var, Callback>
where
    Var: IntegerVariable,
    Callback: SolutionCallback,
{
    fn optimise(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult {
        // Maximisation is minimisation of the negated objective.
        let objective = match self.direction {
            OptimisationDirection::Maximise => self.objective.scaled(-1),
            OptimisationDirection::Minimise => self.objective.scaled(1),
        };

        // First we solve the satisfaction problem without constraining the objective.
        let initial_solution = match solver.satisfy(brancher, termination) {
            SatisfactionResult::Satisfiable(solution) => solution,
            SatisfactionResult::Unsatisfiable => return OptimisationResult::Unsatisfiable,
            SatisfactionResult::Unknown => return OptimisationResult::Unknown,
        };

        self.run_optimisation(brancher, termination, solver, objective, initial_solution)
    }
}
