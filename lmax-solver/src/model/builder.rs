use itertools::Itertools;
use lmax_core::lmax_assert_eq_simple;
use log::debug;

use super::ModelDomains;
use super::ModelError;
use crate::adapter::Comparator;
use crate::adapter::Expression;
use crate::adapter::SolverAdapter;
use crate::instance::InstanceData;

/// The variables of one job. The processing time is a constant of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobVariable<Handle> {
    pub start: Handle,
    pub end: Handle,
    pub processing_time: i32,
}

/// The lateness `L_i = end_i - d_i` of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessVariable<Handle> {
    pub lateness: Handle,
    pub due_date: i32,
}

/// A model which has been posted to a [`SolverAdapter`].
#[derive(Debug, Clone)]
pub struct BuiltModel<Handle> {
    pub jobs: Vec<JobVariable<Handle>>,
    pub lateness: Vec<LatenessVariable<Handle>>,
    /// The objective.
    pub lmax: Handle,
    /// The number of posted ordering disjunctions, `n(n-1)/2`.
    pub num_disjunctions: usize,
}

/// Posts the model of an instance to a [`SolverAdapter`].
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder<'instance> {
    instance: &'instance InstanceData,
}

impl<'instance> ModelBuilder<'instance> {
    pub fn new(instance: &'instance InstanceData) -> Self {
        ModelBuilder { instance }
    }

    /// Registers all variables and posts all constraints.
    ///
    /// Every domain is derived before the adapter is touched, so an
    /// [`ModelError::InfeasibleDomain`] leaves the adapter unchanged.
    pub fn build<Adapter: SolverAdapter>(
        &self,
        adapter: &mut Adapter,
    ) -> Result<BuiltModel<Adapter::Handle>, ModelError> {
        let domains = ModelDomains::derive(self.instance)?;

        let jobs = self.post_jobs(adapter, &domains)?;
        adapter.declare_start_times(&jobs.iter().map(|job| job.start).collect::<Vec<_>>());
        let num_disjunctions = post_disjunctions(adapter, &jobs)?;
        let lateness = self.post_lateness(adapter, &domains, &jobs)?;

        let lmax = adapter.register_variable("Lmax", domains.lmax.lower, domains.lmax.upper);
        adapter.post_constraint(Expression::maximum(
            lmax,
            lateness.iter().map(|variable| variable.lateness).collect(),
        ))?;

        debug!(
            "Built a model with {} jobs and {num_disjunctions} disjunctions",
            jobs.len()
        );

        Ok(BuiltModel {
            jobs,
            lateness,
            lmax,
            num_disjunctions,
        })
    }

    fn post_jobs<Adapter: SolverAdapter>(
        &self,
        adapter: &mut Adapter,
        domains: &ModelDomains,
    ) -> Result<Vec<JobVariable<Adapter::Handle>>, ModelError> {
        domains
            .jobs
            .iter()
            .zip(&self.instance.p)
            .enumerate()
            .map(|(job, (job_domains, &processing_time))| {
                let start = adapter.register_variable(
                    &format!("start_{job}"),
                    job_domains.start.lower,
                    job_domains.start.upper,
                );
                let end = adapter.register_variable(
                    &format!("end_{job}"),
                    job_domains.end.lower,
                    job_domains.end.upper,
                );

                adapter.post_constraint(Expression::linear(
                    vec![(1, end), (-1, start)],
                    Comparator::Equal,
                    processing_time,
                ))?;

                Ok(JobVariable {
                    start,
                    end,
                    processing_time,
                })
            })
            .collect()
    }

    fn post_lateness<Adapter: SolverAdapter>(
        &self,
        adapter: &mut Adapter,
        domains: &ModelDomains,
        jobs: &[JobVariable<Adapter::Handle>],
    ) -> Result<Vec<LatenessVariable<Adapter::Handle>>, ModelError> {
        jobs.iter()
            .zip(&domains.lateness)
            .zip(&self.instance.d)
            .enumerate()
            .map(|(job, ((variables, bounds), &due_date))| {
                let lateness =
                    adapter.register_variable(&format!("L_{job}"), bounds.lower, bounds.upper);

                adapter.post_constraint(Expression::linear(
                    vec![(1, lateness), (-1, variables.end)],
                    Comparator::Equal,
                    -due_date,
                ))?;

                Ok(LatenessVariable { lateness, due_date })
            })
            .collect()
    }
}

/// Orders every unordered pair of jobs: `end_i <= start_j \/ end_j <= start_i`.
fn post_disjunctions<Adapter: SolverAdapter>(
    adapter: &mut Adapter,
    jobs: &[JobVariable<Adapter::Handle>],
) -> Result<usize, ModelError> {
    let mut num_disjunctions = 0;

    for (first, second) in jobs.iter().tuple_combinations() {
        adapter.post_constraint(Expression::or(
            precedes(first, second),
            precedes(second, first),
        ))?;
        num_disjunctions += 1;
    }

    lmax_assert_eq_simple!(
        num_disjunctions,
        jobs.len() * jobs.len().saturating_sub(1) / 2,
        "every pair of jobs is ordered exactly once"
    );
    Ok(num_disjunctions)
}

/// `end_first - start_second <= 0`
fn precedes<Handle: Copy>(
    first: &JobVariable<Handle>,
    second: &JobVariable<Handle>,
) -> Expression<Handle> {
    Expression::linear(
        vec![(1, first.end), (-1, second.start)],
        Comparator::LessOrEqual,
        0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::recording::RecordingAdapter;
    use crate::adapter::EngineAdapter;
    use crate::adapter::SolveOutcome;

    fn instance(r: Vec<i32>, p: Vec<i32>, d: Vec<i32>) -> InstanceData {
        InstanceData::from_jobs(r, p, d).expect("valid instance")
    }

    #[test]
    fn every_pair_is_ordered_exactly_once() {
        for n in 1..=7 {
            let instance = instance(vec![0; n], vec![1; n], vec![0; n]);
            let mut adapter = RecordingAdapter::default();

            let model = ModelBuilder::new(&instance)
                .build(&mut adapter)
                .expect("consistent instance");

            assert_eq!(model.num_disjunctions, n * (n - 1) / 2);
            let num_posted = adapter
                .expressions
                .iter()
                .filter(|expression| matches!(expression, Expression::Or(..)))
                .count();
            assert_eq!(num_posted, model.num_disjunctions);
        }
    }

    #[test]
    fn disjunctions_cover_distinct_pairs() {
        let instance = instance(vec![0; 4], vec![1; 4], vec![0; 4]);
        let mut adapter = RecordingAdapter::default();
        let model = ModelBuilder::new(&instance)
            .build(&mut adapter)
            .expect("consistent instance");

        let mut pairs = adapter
            .expressions
            .iter()
            .filter_map(|expression| match expression {
                Expression::Or(left, _) => match left.as_ref() {
                    Expression::Linear(comparison) => {
                        let job_of = |handle: usize| {
                            model
                                .jobs
                                .iter()
                                .position(|job| job.end == handle || job.start == handle)
                        };
                        job_of(comparison.terms[0].1).zip(job_of(comparison.terms[1].1))
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect::<Vec<_>>();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn variables_are_registered_with_the_derived_domains() {
        let instance = instance(vec![0, 5], vec![3, 2], vec![10, 4]);
        let mut adapter = RecordingAdapter::default();
        let model = ModelBuilder::new(&instance)
            .build(&mut adapter)
            .expect("consistent instance");

        assert_eq!(
            adapter.variables,
            vec![
                ("start_0".to_owned(), 0, 7),
                ("end_0".to_owned(), 3, 10),
                ("start_1".to_owned(), 5, 8),
                ("end_1".to_owned(), 7, 10),
                ("L_0".to_owned(), -7, 0),
                ("L_1".to_owned(), 3, 6),
                ("Lmax".to_owned(), 3, 6),
            ]
        );
        assert_eq!(model.jobs[1].processing_time, 2);
        assert_eq!(model.lateness[1].due_date, 4);
    }

    #[test]
    fn linking_constraints_are_posted() {
        let instance = instance(vec![0], vec![5], vec![3]);
        let mut adapter = RecordingAdapter::default();
        let model = ModelBuilder::new(&instance)
            .build(&mut adapter)
            .expect("consistent instance");

        let job = model.jobs[0];
        let lateness = model.lateness[0].lateness;
        assert_eq!(
            adapter.expressions,
            vec![
                Expression::linear(vec![(1, job.end), (-1, job.start)], Comparator::Equal, 5),
                Expression::linear(vec![(1, lateness), (-1, job.end)], Comparator::Equal, -3),
                Expression::maximum(model.lmax, vec![lateness]),
            ]
        );
    }

    #[test]
    fn start_times_are_declared_in_job_order() {
        let instance = instance(vec![0, 1, 2], vec![1, 1, 1], vec![3, 3, 3]);
        let mut adapter = RecordingAdapter::default();
        let model = ModelBuilder::new(&instance)
            .build(&mut adapter)
            .expect("consistent instance");

        assert_eq!(adapter.start_times, vec![0, 2, 4]);
        assert_eq!(
            adapter.start_times,
            model.jobs.iter().map(|job| job.start).collect::<Vec<_>>()
        );
    }

    #[test]
    fn inconsistent_instances_do_not_reach_the_adapter() {
        let instance = InstanceData {
            r: vec![0, 2],
            p: vec![3, 4],
            d: vec![5, 5],
            sum_p: 1,
            max_r: 2,
        };
        let mut adapter = RecordingAdapter::default();

        let result = ModelBuilder::new(&instance).build(&mut adapter);

        assert!(matches!(result, Err(ModelError::InfeasibleDomain { .. })));
        assert!(adapter.variables.is_empty());
        assert!(adapter.expressions.is_empty());
    }

    #[test]
    fn the_engine_finds_the_optimal_lmax() {
        let instance = instance(vec![0, 5], vec![3, 2], vec![10, 4]);
        let mut adapter = EngineAdapter::new();
        let model = ModelBuilder::new(&instance)
            .build(&mut adapter)
            .expect("consistent instance");

        let outcome = adapter.solve_minimize(model.lmax);
        assert!(matches!(outcome, SolveOutcome::Optimal(_)));
        assert_eq!(
            outcome
                .assignment()
                .and_then(|assignment| assignment.value(model.lmax)),
            Some(3)
        );
    }
}
