use thiserror::Error;

use crate::length::{MAX_LENGTH, MIN_LENGTH};

/// Failures the generator reports back to its caller.
///
/// The core never logs, retries or exits on any of these; deciding what to
/// do with them is left to whoever called in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid length {0:?}: expected an integer of at least {min}", min = MIN_LENGTH)]
    InvalidLength(String),

    #[error("Length {0} is too large (maximum is {max})", max = MAX_LENGTH)]
    LengthTooLarge(usize),

    #[error("No characters left to choose from: enable at least one character set")]
    EmptyAlphabet,

    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, Error>;
