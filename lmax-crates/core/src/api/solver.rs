use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use super::results::SatisfactionResultUnderAssumptions;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMin;
use crate::branching::variable_selection::InputOrder;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::CSPSolverExecutionFlag;
use crate::engine::ConstraintSatisfactionSolver;
use crate::optimisation::OptimisationProcedure;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// Variables are integers with an interval domain:
///
/// ```rust
/// # use lmax_core::Solver;
/// # use lmax_core::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
///
/// // Additionally, we can also create an affine view over a variable with both a scale and an
/// // offset (or either)
/// let view_over_integer = integer_between_bounds.scaled(-1).offset(15);
/// ```
///
/// # Using the Solver
/// For examples on how to use the solver, see the [root-level crate documentation](crate).
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Logs the statistics currently present in the solver with the provided objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_lower_bound(variable)
    }

    /// Get the upper-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_upper_bound(variable)
    }

    /// Get the value of the given [`IntegerVariable`] if it is fixed at the root level.
    pub fn get_assigned_integer_value(&self, variable: &impl IntegerVariable) -> Option<i32> {
        self.satisfaction_solver.get_assigned_integer_value(variable)
    }

    /// Get the name the variable was created with, if any.
    pub fn get_variable_name(&self, variable: DomainId) -> Option<&str> {
        self.satisfaction_solver.get_variable_name(variable)
    }

    /// The number of integer variables which have been created so far.
    pub fn num_variables(&self) -> usize {
        self.satisfaction_solver.assignments().num_domains() as usize
    }
}

/// Functions to create integer variables.
impl Solver {
    /// ```rust
    /// # use lmax_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can create an integer variable with a domain in the range [0, 10]
    /// let integer_between_bounds = solver.new_bounded_integer(0, 10);
    /// ```
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use lmax_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can also create such a variable with a name
    /// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
    /// assert_eq!(solver.get_variable_name(named_integer_between_bounds), Some("x"));
    /// ```
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`]
    /// which can be used to obtain the found solution.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let flag = self.satisfaction_solver.solve(termination, brancher);
        let result = match flag {
            CSPSolverExecutionFlag::Feasible => {
                SatisfactionResult::Satisfiable(self.current_solution())
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::InfeasibleUnderAssumptions => {
                unreachable!("no assumptions were provided")
            }
            CSPSolverExecutionFlag::Timeout => SatisfactionResult::Unknown,
        };

        // Reset the state whenever we return a result
        self.satisfaction_solver.restore_state_at_root(brancher);
        result
    }

    /// Solves the current model in the [`Solver`] under the given assumptions. The assumptions are
    /// [`Predicate`]s which are posted before any other decision is taken; when they cannot all
    /// hold, [`SatisfactionResultUnderAssumptions::UnsatisfiableUnderAssumptions`] is returned and
    /// the solver can be used again.
    ///
    /// # Example
    /// ```rust
    /// # use lmax_core::predicate;
    /// # use lmax_core::results::SatisfactionResultUnderAssumptions;
    /// # use lmax_core::termination::Indefinite;
    /// # use lmax_core::Solver;
    /// let mut solver = Solver::default();
    /// let x = solver.new_bounded_integer(0, 10);
    ///
    /// let mut brancher = solver.default_brancher();
    /// let result = solver.satisfy_under_assumptions(
    ///     &mut brancher,
    ///     &mut Indefinite,
    ///     &[predicate![x >= 4], predicate![x <= 3]],
    /// );
    /// assert!(matches!(
    ///     result,
    ///     SatisfactionResultUnderAssumptions::UnsatisfiableUnderAssumptions
    /// ));
    /// ```
    pub fn satisfy_under_assumptions<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        assumptions: &[Predicate],
    ) -> SatisfactionResultUnderAssumptions {
        let flag = self
            .satisfaction_solver
            .solve_under_assumptions(assumptions, termination, brancher);
        let result = match flag {
            CSPSolverExecutionFlag::Feasible => {
                SatisfactionResultUnderAssumptions::Satisfiable(self.current_solution())
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResultUnderAssumptions::Unsatisfiable,
            CSPSolverExecutionFlag::InfeasibleUnderAssumptions => {
                SatisfactionResultUnderAssumptions::UnsatisfiableUnderAssumptions
            }
            CSPSolverExecutionFlag::Timeout => SatisfactionResultUnderAssumptions::Unknown,
        };

        // Reset the state whenever we return a result
        self.satisfaction_solver.restore_state_at_root(brancher);
        result
    }

    /// Solves the model currently in the [`Solver`] to optimality with the provided
    /// [`OptimisationProcedure`], such as
    /// [`LinearSatUnsat`](crate::optimisation::linear_sat_unsat::LinearSatUnsat).
    ///
    /// It returns an [`OptimisationResult`] which can be used to retrieve the optimal solution if
    /// it exists.
    pub fn optimise(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        mut optimisation_procedure: impl OptimisationProcedure,
    ) -> OptimisationResult {
        optimisation_procedure.optimise(brancher, termination, self)
    }

    fn current_solution(&self) -> Solution {
        self.satisfaction_solver.get_solution_reference().into()
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which posts the
    /// constraint through [`ConstraintPoster::post`].
    ///
    /// If [`ConstraintPoster::post`] is not called, the constraint _is not_ actually added to the
    /// solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use lmax_core::constraints;
    /// # use lmax_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver.add_constraint(constraints::equals([a, b], 0)).post();
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Post a new propagator to the solver. If unsatisfiability can be immediately determined
    /// through propagation, this will return a [`ConstraintOperationError`].
    ///
    /// If the solver is already in a conflicting state, i.e. a previous call to this method
    /// already returned an error, calling this again will not alter the solver in any way, and
    /// [`ConstraintOperationError::InfeasibleState`] will be returned.
    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
    {
        self.satisfaction_solver.add_propagator(constructor)
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates a default [`IndependentVariableValueBrancher`] which branches on every variable
    /// in the order of creation ([`InputOrder`]) and tries the smallest value first
    /// ([`InDomainMin`]).
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self
            .satisfaction_solver
            .assignments()
            .get_domains()
            .collect::<Vec<_>>();

        IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMin)
    }
}

/// The type of [`Brancher`] which is created by [`Solver::default_brancher`].
pub type DefaultBrancher =
    IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMin>;
