use chase_core::ChaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Chase(#[from] ChaseError),

    #[error("{got} prey positions supplied for {expected} prey")]
    PreyCountMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
