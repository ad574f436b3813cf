use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use super::InstanceData;
use super::InstanceError;
use super::MAX_HORIZON;

/// The largest processing time of a generated job.
const MAX_PROCESSING_TIME: i32 = 50;

impl InstanceData {
    /// Generates a random instance with `n` jobs, following the scheme of Pan and Shi (2006).
    ///
    /// `k` controls the spread of the release and due dates:
    /// * `r_i` is drawn from `[0, ceil(k * n)]`,
    /// * `p_i` is drawn from `[1, 50]`,
    /// * `d_i` is drawn from `[floor(P - k * n), P]`.
    ///
    /// All draws are made from `rng`, so the same source yields the same instance.
    pub fn generate_random<R: Rng + ?Sized>(
        n: usize,
        k: f64,
        rng: &mut R,
    ) -> Result<InstanceData, InstanceError> {
        if n == 0 {
            return Err(InstanceError::InvalidParameter {
                name: "n",
                reason: "an instance needs at least one job".to_owned(),
            });
        }
        if !k.is_finite() || k <= 0.0 {
            return Err(InstanceError::InvalidParameter {
                name: "k",
                reason: format!("must be a positive number, found {k}"),
            });
        }

        let spread = k * n as f64;
        let processing_bound = (MAX_PROCESSING_TIME as f64) * n as f64;
        if processing_bound > MAX_HORIZON as f64 {
            return Err(InstanceError::InvalidParameter {
                name: "n",
                reason: format!("{n} jobs of length up to {MAX_PROCESSING_TIME} do not fit the horizon"),
            });
        }
        if spread.ceil() + processing_bound > MAX_HORIZON as f64 {
            return Err(InstanceError::InvalidParameter {
                name: "k",
                reason: format!("release dates up to k * n = {spread} do not fit the horizon"),
            });
        }

        let release_bound = spread.ceil() as i32;
        let r = (0..n)
            .map(|_| rng.gen_range(0..=release_bound))
            .collect::<Vec<_>>();
        let p = (0..n)
            .map(|_| rng.gen_range(1..=MAX_PROCESSING_TIME))
            .collect::<Vec<_>>();

        let sum_p = p.iter().sum::<i32>();
        let (lowest_due_date, highest_due_date) = due_date_range(sum_p, spread);
        debug!("Drawing due dates from [{lowest_due_date}, {highest_due_date}]");

        let d = (0..n)
            .map(|_| rng.gen_range(lowest_due_date..=highest_due_date))
            .collect::<Vec<_>>();

        InstanceData::from_validated_jobs(r, p, d)
    }

    /// Generates a random instance with [`InstanceData::generate_random`] from a [`SmallRng`]
    /// seeded with `seed`.
    pub fn generate_seeded(n: usize, k: f64, seed: u64) -> Result<InstanceData, InstanceError> {
        InstanceData::generate_random(n, k, &mut SmallRng::seed_from_u64(seed))
    }
}

/// The due date range `[floor(P - spread), P]`. When the lower end exceeds `P` the range
/// collapses to `{P}`.
fn due_date_range(sum_p: i32, spread: f64) -> (i32, i32) {
    let lowest = (sum_p as f64 - spread).floor();

    if lowest > sum_p as f64 {
        (sum_p, sum_p)
    } else {
        (lowest as i32, sum_p)
    }
}
