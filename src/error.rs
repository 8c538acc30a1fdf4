/// Rejected arguments. Every variant is an invalid-argument condition raised before any
/// random byte is drawn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NanoIdError {
    #[error("invalid argument: alphabet must not be empty")]
    EmptyAlphabet,

    #[error("invalid argument: alphabet must contain at most 255 characters, got {len}")]
    AlphabetTooLong { len: usize },

    #[error("invalid argument: size must be greater than zero, got {size}")]
    InvalidSize { size: usize },

    #[error("invalid argument: additional bytes factor must be at least 1, got {factor}")]
    InvalidFactor { factor: f64 },
}

impl NanoIdError {
    /// Returns true if the error is an invalid-argument condition, which every current
    /// variant is.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyAlphabet
                | Self::AlphabetTooLong { .. }
                | Self::InvalidSize { .. }
                | Self::InvalidFactor { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NanoIdError>;
