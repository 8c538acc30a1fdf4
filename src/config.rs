use crate::error::{NanoIdError, Result};
use crate::generate::IdGenerator;
use crate::params::{
    DEFAULT_ADDITIONAL_BYTES_FACTOR, DEFAULT_ALPHABET, DEFAULT_SIZE, MAX_ALPHABET_LEN,
    calculate_additional_bytes_factor, calculate_mask,
};

/// Parameters of an ID: its length, the alphabet it draws from, and how many extra random
/// bytes to draw per batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IdConfig {
    pub size: usize,
    pub alphabet: String,
    pub additional_bytes_factor: f64,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            alphabet: DEFAULT_ALPHABET.to_string(),
            additional_bytes_factor: DEFAULT_ADDITIONAL_BYTES_FACTOR,
        }
    }
}

impl IdConfig {
    /// Create a new config with the default size, alphabet and factor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    #[must_use]
    pub const fn additional_bytes_factor(mut self, factor: f64) -> Self {
        self.additional_bytes_factor = factor;
        self
    }

    /// Replace the factor with the one derived from the configured alphabet.
    #[must_use]
    pub fn derived_factor(mut self) -> Self {
        let mask = calculate_mask(&self.alphabet);
        self.additional_bytes_factor = calculate_additional_bytes_factor(&self.alphabet, mask);
        self
    }

    /// # Errors
    ///
    /// Returns the first rejected argument, checked in the order alphabet, size, factor.
    pub fn validate(&self) -> Result<()> {
        validate(
            self.size,
            self.alphabet.chars().count(),
            self.additional_bytes_factor,
        )
    }

    /// Validate and build a reusable generator.
    ///
    /// # Errors
    ///
    /// Same as [`IdConfig::validate`].
    pub fn build(&self) -> Result<IdGenerator> {
        IdGenerator::new(self)
    }
}

pub(crate) fn validate(size: usize, alphabet_len: usize, factor: f64) -> Result<()> {
    if alphabet_len == 0 {
        return Err(NanoIdError::EmptyAlphabet);
    }
    if alphabet_len > MAX_ALPHABET_LEN {
        return Err(NanoIdError::AlphabetTooLong { len: alphabet_len });
    }
    if size == 0 {
        return Err(NanoIdError::InvalidSize { size });
    }
    if factor.is_nan() || factor < 1.0 {
        return Err(NanoIdError::InvalidFactor { factor });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        let config = IdConfig::new();
        assert_eq!(config.size, 21);
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
        assert!((config.additional_bytes_factor - 1.6).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_chain() {
        let config = IdConfig::new().size(8).alphabet("0123456789");
        assert_eq!(config.size, 8);
        assert_eq!(config.alphabet, "0123456789");
        assert!((config.additional_bytes_factor - 1.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_derived_factor() {
        // 1 + |15 - 10| / 10
        let config = IdConfig::new().alphabet("0123456789").derived_factor();
        assert!((config.additional_bytes_factor - 1.5).abs() < 1e-9);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_alphabet() {
        let config = IdConfig::new().alphabet("");
        assert_eq!(config.validate(), Err(NanoIdError::EmptyAlphabet));
    }

    #[test]
    fn test_validate_empty_alphabet_with_derived_factor() {
        let config = IdConfig::new().alphabet("").derived_factor();
        assert_eq!(config.validate(), Err(NanoIdError::EmptyAlphabet));
    }

    #[test]
    fn test_validate_alphabet_too_long() {
        let config = IdConfig::new().alphabet("a".repeat(256));
        assert_eq!(
            config.validate(),
            Err(NanoIdError::AlphabetTooLong { len: 256 })
        );
    }

    #[test]
    fn test_validate_max_alphabet_accepted() {
        let config = IdConfig::new().alphabet("a".repeat(255));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_zero_size() {
        let config = IdConfig::new().size(0);
        assert_eq!(config.validate(), Err(NanoIdError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_validate_factor_below_one() {
        let config = IdConfig::new().additional_bytes_factor(0.99);
        assert_eq!(
            config.validate(),
            Err(NanoIdError::InvalidFactor { factor: 0.99 })
        );
    }

    #[test]
    fn test_validate_nan_factor() {
        let config = IdConfig::new().additional_bytes_factor(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(NanoIdError::InvalidFactor { .. })
        ));
    }

    #[test]
    fn test_validate_alphabet_checked_before_size() {
        let config = IdConfig::new().alphabet("").size(0);
        assert_eq!(config.validate(), Err(NanoIdError::EmptyAlphabet));
    }

    #[test]
    fn test_build_rejects_invalid() {
        assert!(IdConfig::new().size(0).build().is_err());
        assert!(IdConfig::new().build().is_ok());
    }
}
