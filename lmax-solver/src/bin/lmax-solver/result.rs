use lmax_solver::instance::InstanceError;
use lmax_solver::model::ModelError;
use thiserror::Error;

pub(crate) type LmaxResult<T> = Result<T, LmaxError>;

#[derive(Error, Debug)]
pub(crate) enum LmaxError {
    #[error("Failed to load the instance, more details: {0}")]
    Instance(#[from] InstanceError),
    #[error("Failed to build the model, more details: {0}")]
    Model(#[from] ModelError),
}
