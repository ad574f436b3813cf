use log::debug;

use super::ModelError;
use crate::instance::InstanceData;

/// The closed interval `[lower, upper]` an engine variable is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i32,
    pub upper: i32,
}

/// The domains of the start and end variable of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDomains {
    pub start: Bounds,
    pub end: Bounds,
}

/// The domain of every variable of the model, derived from the instance data alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDomains {
    pub jobs: Vec<JobDomains>,
    pub lateness: Vec<Bounds>,
    pub lmax: Bounds,
}

impl ModelDomains {
    /// Derives the domains with horizon `U = P + R`:
    /// * `start_i` in `[r_i, U - p_i]` and `end_i` in `[r_i + p_i, U]`,
    /// * `L_i` in `[r_i + p_i - d_i, R + P - d_i]`,
    /// * `Lmax` in `[max_i (r_i + p_i - d_i), U - min_i d_i]`.
    ///
    /// Fails with [`ModelError::InfeasibleDomain`] on the first empty domain, which can only
    /// happen when `P` or `R` do not match the job arrays.
    pub fn derive(instance: &InstanceData) -> Result<ModelDomains, ModelError> {
        let horizon = instance.sum_p as i64 + instance.max_r as i64;

        let mut jobs = Vec::with_capacity(instance.n());
        let mut lateness = Vec::with_capacity(instance.n());
        let mut max_lateness_lower = i64::MIN;
        let mut min_due_date = i64::MAX;

        for (job, ((&r, &p), &d)) in instance
            .r
            .iter()
            .zip(&instance.p)
            .zip(&instance.d)
            .enumerate()
        {
            let (r, p, d) = (r as i64, p as i64, d as i64);

            let start = bounds(format!("start_{job}"), r, horizon - p)?;
            let end = bounds(format!("end_{job}"), r + p, horizon)?;
            let lateness_bounds = bounds(format!("L_{job}"), r + p - d, horizon - d)?;

            max_lateness_lower = max_lateness_lower.max(r + p - d);
            min_due_date = min_due_date.min(d);

            jobs.push(JobDomains { start, end });
            lateness.push(lateness_bounds);
        }

        let lmax = bounds("Lmax".to_owned(), max_lateness_lower, horizon - min_due_date)?;
        debug!(
            "Derived domains for {} jobs with horizon {horizon}, Lmax in [{}, {}]",
            instance.n(),
            lmax.lower,
            lmax.upper
        );

        Ok(ModelDomains {
            jobs,
            lateness,
            lmax,
        })
    }
}

fn bounds(variable: String, lower: i64, upper: i64) -> Result<Bounds, ModelError> {
    if lower > upper {
        return Err(ModelError::InfeasibleDomain {
            variable,
            lower,
            upper,
        });
    }

    let to_i32 = |value: i64| {
        i32::try_from(value).map_err(|_| ModelError::BoundOverflow {
            variable: variable.clone(),
            value,
        })
    };

    Ok(Bounds {
        lower: to_i32(lower)?,
        upper: to_i32(upper)?,
    })
}
