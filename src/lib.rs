pub mod config;
pub mod error;
pub mod generate;
pub mod params;
pub mod random;
pub mod seeded;

pub use config::IdConfig;
pub use error::{NanoIdError, Result};
pub use generate::{IdGenerator, generate, generate_optimized};
pub use params::{
    DEFAULT_ADDITIONAL_BYTES_FACTOR, DEFAULT_ALPHABET, DEFAULT_SIZE, MAX_ALPHABET_LEN, MAX_STEP,
    calculate_additional_bytes_factor, calculate_mask, calculate_step, derived_step,
};
pub use random::{ByteSource, default_source};
pub use seeded::SeededSource;

/// A 21-character ID over the default alphabet from the default secure source.
#[must_use]
pub fn nanoid() -> String {
    IdGenerator::default().generate()
}

/// A `size`-character ID over the default alphabet.
///
/// # Errors
///
/// [`NanoIdError::InvalidSize`] if `size` is zero.
pub fn nanoid_sized(size: usize) -> Result<String> {
    nanoid_with(size, DEFAULT_ALPHABET)
}

/// A `size`-character ID over `alphabet`.
///
/// # Errors
///
/// See [`generate`].
pub fn nanoid_with(size: usize, alphabet: &str) -> Result<String> {
    generate(
        size,
        alphabet,
        DEFAULT_ADDITIONAL_BYTES_FACTOR,
        &mut default_source(),
    )
}

/// Shorthand for the default-argument entry points. Every form returns [`Result<String>`];
/// `nanoid!()` is always `Ok`.
///
/// ```
/// use nanoid_gen::nanoid;
///
/// assert_eq!(nanoid!().unwrap().len(), 21);
/// assert_eq!(nanoid!(8).unwrap().len(), 8);
/// assert!(nanoid!(8, "01").unwrap().chars().all(|c| c == '0' || c == '1'));
///
/// let mut source = nanoid_gen::SeededSource::new("fixture");
/// assert_eq!(nanoid!(10, "abc", &mut source).unwrap().len(), 10);
/// ```
#[macro_export]
macro_rules! nanoid {
    () => {
        $crate::nanoid_sized($crate::DEFAULT_SIZE)
    };
    ($size:expr) => {
        $crate::nanoid_sized($size)
    };
    ($size:expr, $alphabet:expr) => {
        $crate::nanoid_with($size, $alphabet)
    };
    ($size:expr, $alphabet:expr, $source:expr) => {
        $crate::generate(
            $size,
            $alphabet,
            $crate::DEFAULT_ADDITIONAL_BYTES_FACTOR,
            $source,
        )
    };
}
