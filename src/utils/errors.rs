use std::result;
use thiserror::Error;

/// Errors from operations that accept externally supplied generator state.
///
/// Seeding and extraction never fail; only restoring or reconstructing a
/// generator can be handed something malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("state snapshot must hold {expected} words, found {found}")]
    StateLength { expected: usize, found: usize },
    #[error("cursor {cursor} is past the end of the state buffer")]
    CursorOutOfRange { cursor: usize },
    #[error("need {expected} consecutive outputs to clone a generator, found {found}")]
    NotEnoughOutputs { expected: usize, found: usize },
}

pub type Result<T> = result::Result<T, Error>;
