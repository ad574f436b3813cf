//! The data of a 1|r_j|Lmax instance: for every job a release date `r`, a processing time `p`
//! and a due date `d`.
//!
//! An [`InstanceData`] is immutable once created. It is obtained by generating a random instance
//! ([`InstanceData::generate_random`]), by reading the plain text format
//! ([`InstanceData::read`]) or from the job arrays directly ([`InstanceData::from_jobs`]):
//! ```rust
//! # use lmax_solver::instance::InstanceData;
//! let instance = InstanceData::from_jobs(vec![0, 5], vec![3, 2], vec![10, 4])?;
//!
//! assert_eq!(instance.n(), 2);
//! assert_eq!(instance.sum_p(), 5);
//! assert_eq!(instance.max_r(), 5);
//! assert_eq!(instance.d(1)?, 4);
//! # Ok::<(), lmax_solver::instance::InstanceError>(())
//! ```
mod error;
mod generate;
mod io;

use std::fmt::Display;

pub use error::InstanceError;
pub use error::Location;
pub use io::InstanceFormat;

/// The largest value the horizon `P + R` may take. Every derived variable bound has to fit in the
/// domain of an engine variable.
const MAX_HORIZON: i64 = i32::MAX as i64 / 2;

/// An immutable 1|r_j|Lmax instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceData {
    pub(crate) r: Vec<i32>,
    pub(crate) p: Vec<i32>,
    pub(crate) d: Vec<i32>,
    /// The sum of the processing times.
    pub(crate) sum_p: i32,
    /// The largest release date.
    pub(crate) max_r: i32,
}

impl InstanceData {
    /// Creates an instance from the release dates `r`, processing times `p` and due dates `d`.
    ///
    /// The arrays have to be equally long and non-empty, and every processing time has to be at
    /// least 1.
    pub fn from_jobs(r: Vec<i32>, p: Vec<i32>, d: Vec<i32>) -> Result<InstanceData, InstanceError> {
        if r.len() != p.len() || r.len() != d.len() {
            return Err(InstanceError::malformed(
                Location::Instance,
                format!(
                    "the job arrays differ in length (r: {}, p: {}, d: {})",
                    r.len(),
                    p.len(),
                    d.len()
                ),
            ));
        }
        if let Some(job) = p.iter().position(|&p_i| p_i < 1) {
            return Err(InstanceError::malformed(
                Location::Job(job),
                format!("processing time must be at least 1, found {}", p[job]),
            ));
        }

        InstanceData::from_validated_jobs(r, p, d)
    }

    /// Computes `P` and `R` for job arrays of equal length with positive processing times.
    fn from_validated_jobs(
        r: Vec<i32>,
        p: Vec<i32>,
        d: Vec<i32>,
    ) -> Result<InstanceData, InstanceError> {
        if r.is_empty() {
            return Err(InstanceError::malformed(
                Location::Instance,
                "an instance needs at least one job",
            ));
        }

        let sum_p = p.iter().map(|&p_i| p_i as i64).sum::<i64>();
        let max_r = r.iter().copied().max().unwrap_or_default();

        if sum_p + max_r as i64 > MAX_HORIZON {
            return Err(InstanceError::malformed(
                Location::Instance,
                format!("the horizon P + R = {} exceeds {MAX_HORIZON}", sum_p + max_r as i64),
            ));
        }

        Ok(InstanceData {
            r,
            p,
            d,
            sum_p: i32::try_from(sum_p).map_err(|_| {
                InstanceError::malformed(Location::Instance, "the sum of processing times overflows")
            })?,
            max_r,
        })
    }

    /// The number of jobs.
    pub fn n(&self) -> usize {
        self.r.len()
    }

    /// The release date of job `i`.
    pub fn r(&self, i: usize) -> Result<i32, InstanceError> {
        self.field(&self.r, i)
    }

    /// The processing time of job `i`.
    pub fn p(&self, i: usize) -> Result<i32, InstanceError> {
        self.field(&self.p, i)
    }

    /// The due date of job `i`.
    pub fn d(&self, i: usize) -> Result<i32, InstanceError> {
        self.field(&self.d, i)
    }

    /// `P`, the sum of the processing times.
    pub fn sum_p(&self) -> i32 {
        self.sum_p
    }

    /// `R`, the largest release date.
    pub fn max_r(&self) -> i32 {
        self.max_r
    }

    fn field(&self, values: &[i32], i: usize) -> Result<i32, InstanceError> {
        values
            .get(i)
            .copied()
            .ok_or(InstanceError::IndexOutOfRange {
                index: i,
                num_jobs: self.n(),
            })
    }
}

/// Prints the instance as a table with one row per job.
impl Display for InstanceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance {}", "-".repeat(41))?;
        for (i, ((r, p), d)) in self.r.iter().zip(&self.p).zip(&self.d).enumerate() {
            writeln!(
                f,
                "| r_{i:<4} = {r:<4} | p_{i:<4} = {p:<4} | dd_{i:<4} = {d:<4} |"
            )?;
        }
        write!(f, "{}", "-".repeat(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_the_job_data() {
        let instance = InstanceData::from_jobs(vec![0, 5, 2], vec![3, 2, 4], vec![10, 4, 8])
            .expect("valid instance");

        assert_eq!(instance.n(), 3);
        assert_eq!(instance.r(1).ok(), Some(5));
        assert_eq!(instance.p(2).ok(), Some(4));
        assert_eq!(instance.d(0).ok(), Some(10));
        assert_eq!(instance.sum_p(), 9);
        assert_eq!(instance.max_r(), 5);
    }

    #[test]
    fn out_of_range_indices_are_reported() {
        let instance =
            InstanceData::from_jobs(vec![0], vec![5], vec![3]).expect("valid instance");

        let error = instance.r(1).expect_err("index 1 is out of range");
        assert!(matches!(
            error,
            InstanceError::IndexOutOfRange {
                index: 1,
                num_jobs: 1
            }
        ));
        assert!(instance.p(7).is_err());
        assert!(instance.d(usize::MAX).is_err());
    }

    #[test]
    fn arrays_of_different_lengths_are_rejected() {
        let error = InstanceData::from_jobs(vec![0, 1], vec![1], vec![1, 2])
            .expect_err("lengths differ");
        assert!(matches!(
            error,
            InstanceError::MalformedInput {
                location: Location::Instance,
                ..
            }
        ));
    }

    #[test]
    fn empty_instances_are_rejected() {
        let error =
            InstanceData::from_jobs(vec![], vec![], vec![]).expect_err("no jobs is malformed");
        assert!(matches!(error, InstanceError::MalformedInput { .. }));
    }

    #[test]
    fn processing_times_below_one_are_rejected() {
        let error = InstanceData::from_jobs(vec![0, 0], vec![4, 0], vec![3, 3])
            .expect_err("p = 0 is not allowed");
        assert!(matches!(
            error,
            InstanceError::MalformedInput {
                location: Location::Job(1),
                ..
            }
        ));
    }

    #[test]
    fn horizons_which_do_not_fit_are_rejected() {
        let error = InstanceData::from_jobs(
            vec![0, 0],
            vec![i32::MAX / 2, i32::MAX / 2],
            vec![0, 0],
        )
        .expect_err("P overflows the horizon");
        assert!(matches!(error, InstanceError::MalformedInput { .. }));
    }

    #[test]
    fn the_table_lists_every_job() {
        let instance =
            InstanceData::from_jobs(vec![0, 5], vec![3, 2], vec![10, 4]).expect("valid instance");

        let expected = "\
Instance -----------------------------------------
| r_0    = 0    | p_0    = 3    | dd_0    = 10   |
| r_1    = 5    | p_1    = 2    | dd_1    = 4    |
--------------------------------------------------";
        assert_eq!(instance.to_string(), expected);
    }
}
