use tg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The parameter validator rejected the configuration; the model was
    /// never built.
    #[error("model construction rejected: {0}")]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
