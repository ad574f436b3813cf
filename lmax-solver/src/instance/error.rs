use std::fmt::Display;

use thiserror::Error;

/// Errors raised while creating, reading, writing or querying an
/// [`InstanceData`](super::InstanceData).
#[derive(Error, Debug)]
pub enum InstanceError {
    /// A generator argument is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// The job data does not describe a valid instance.
    #[error("malformed input at {location}: {reason}")]
    MalformedInput { location: Location, reason: String },
    /// The underlying reader or writer failed.
    #[error("IO error, more details: {0}")]
    IoFailure(#[from] std::io::Error),
    /// A job index outside of `[0, n)` was queried.
    #[error("job index {index} is out of range for an instance with {num_jobs} jobs")]
    IndexOutOfRange { index: usize, num_jobs: usize },
}

impl InstanceError {
    pub(crate) fn malformed(location: Location, reason: impl Display) -> Self {
        InstanceError::MalformedInput {
            location,
            reason: reason.to_string(),
        }
    }
}

/// Where in the input a [`InstanceError::MalformedInput`] was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A 1-based line of a plain-format source.
    Line(usize),
    /// A 0-based job of the provided arrays.
    Job(usize),
    /// The instance as a whole.
    Instance,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Line(line) => write!(f, "line {line}"),
            Location::Job(job) => write!(f, "job {job}"),
            Location::Instance => write!(f, "instance level"),
        }
    }
}
