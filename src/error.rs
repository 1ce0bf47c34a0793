//! Error types for the rank index and the exercise modules.

use thiserror::Error;

/// Error variants for index operations and argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value was inserted that is not a member of the index universe.
    #[error("key is not a member of the index universe")]
    KeyNotInUniverse,

    /// A range query was given a lower bound above its upper bound.
    #[error("invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange {
        /// Requested lower bound.
        lower: i64,
        /// Requested upper bound.
        upper: i64,
    },

    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Exponentiation of a negative base.
    #[error("cannot exponentiate a negative base")]
    NegativeBase,

    /// A digit vector contained a value outside `0..=9`.
    #[error("invalid decimal digit: {0}")]
    InvalidDigit(i32),

    /// A permutation array was not a bijection onto `0..n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// A string could not be parsed as a decimal integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// A specialized Result type for fenrank operations.
pub type Result<T> = std::result::Result<T, Error>;
