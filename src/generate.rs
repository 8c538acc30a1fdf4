use tracing::{debug, trace};

use crate::config::{IdConfig, validate};
use crate::error::{NanoIdError, Result};
use crate::params::{
    DEFAULT_ADDITIONAL_BYTES_FACTOR, DEFAULT_ALPHABET, DEFAULT_SIZE, MAX_STEP, mask_for_len,
    step_for_len,
};
use crate::random::{ByteSource, default_source};
use crate::seeded::SeededSource;

/// Generate a random ID of `size` characters drawn uniformly from `alphabet`.
///
/// Validates every argument before drawing any bytes, then derives the mask and step and
/// hands off to the sampling loop.
///
/// ```
/// use nanoid_gen::generate;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let id = generate(12, "0123456789abcdef", 1.6, &mut rng).unwrap();
/// assert_eq!(id.len(), 12);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
///
/// # Errors
///
/// - [`NanoIdError::EmptyAlphabet`] or [`NanoIdError::AlphabetTooLong`] unless the alphabet
///   has 1 to 255 characters
/// - [`NanoIdError::InvalidSize`] if `size` is zero
/// - [`NanoIdError::InvalidFactor`] if `additional_bytes_factor` is below 1 or NaN
pub fn generate<S>(
    size: usize,
    alphabet: &str,
    additional_bytes_factor: f64,
    source: &mut S,
) -> Result<String>
where
    S: ByteSource + ?Sized,
{
    let symbols: Vec<char> = alphabet.chars().collect();
    validate(size, symbols.len(), additional_bytes_factor)?;

    let mask = mask_for_len(symbols.len());
    let step = step_for_len(size, symbols.len(), additional_bytes_factor, mask);
    Ok(sample(size, &symbols, mask, step, source))
}

/// The unvalidated fast path: generate `size` characters with a caller-supplied mask and
/// step.
///
/// Only `size` is checked. The caller must pass the mask from
/// [`calculate_mask`](crate::calculate_mask) and a step from
/// [`calculate_step`](crate::calculate_step) for this same alphabet. A mask narrower than
/// the alphabet silently skips its tail characters and biases the output; a wider one wastes
/// bytes. Bytes are never used to index outside the alphabet, and `step` is clamped to
/// `1..=MAX_STEP`.
///
/// # Errors
///
/// [`NanoIdError::InvalidSize`] if `size` is zero.
pub fn generate_optimized<S>(
    size: usize,
    alphabet: &str,
    mask: u8,
    step: usize,
    source: &mut S,
) -> Result<String>
where
    S: ByteSource + ?Sized,
{
    if size == 0 {
        return Err(NanoIdError::InvalidSize { size });
    }
    let symbols: Vec<char> = alphabet.chars().collect();
    Ok(sample(size, &symbols, mask, step, source))
}

/// Rejection sampling over batches of `step` bytes.
///
/// Each byte is masked as an unsigned value; masked values past the end of the alphabet are
/// dropped. Returns as soon as `size` characters are accepted, discarding the rest of the
/// batch. Batches hold at most [`MAX_STEP`] bytes; there is no cap on their number.
fn sample<S>(size: usize, symbols: &[char], mask: u8, step: usize, source: &mut S) -> String
where
    S: ByteSource + ?Sized,
{
    let mut id = String::with_capacity(size);
    let mut accepted = 0;
    let mut bytes = vec![0u8; step.clamp(1, MAX_STEP)];
    let mut batch: u64 = 0;

    loop {
        source.fill_random(&mut bytes);
        for &byte in &bytes {
            if let Some(&symbol) = symbols.get(usize::from(byte & mask)) {
                id.push(symbol);
                accepted += 1;
                if accepted == size {
                    return id;
                }
            }
        }
        batch += 1;
        trace!(batch, accepted, size, "batch exhausted, drawing more bytes");
    }
}

/// A validated, reusable generator with the mask and step worked out once.
///
/// Holds no mutable state, so one instance can be shared across threads; each call brings
/// its own byte source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    size: usize,
    symbols: Vec<char>,
    mask: u8,
    step: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let mask = mask_for_len(symbols.len());
        let step = step_for_len(
            DEFAULT_SIZE,
            symbols.len(),
            DEFAULT_ADDITIONAL_BYTES_FACTOR,
            mask,
        );
        Self {
            size: DEFAULT_SIZE,
            symbols,
            mask,
            step,
        }
    }
}

impl IdGenerator {
    /// Create a new ID generator with the given config.
    ///
    /// # Errors
    ///
    /// Returns the first argument [`IdConfig::validate`] rejects.
    pub fn new(config: &IdConfig) -> Result<Self> {
        config.validate()?;

        let symbols: Vec<char> = config.alphabet.chars().collect();
        let mask = mask_for_len(symbols.len());
        let step = step_for_len(
            config.size,
            symbols.len(),
            config.additional_bytes_factor,
            mask,
        );
        debug!(
            size = config.size,
            alphabet_len = symbols.len(),
            mask,
            step,
            "built id generator"
        );

        Ok(Self {
            size: config.size,
            symbols,
            mask,
            step,
        })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn alphabet(&self) -> String {
        self.symbols.iter().collect()
    }

    #[must_use]
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Generate an ID from the default secure source.
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_with(&mut default_source())
    }

    #[must_use]
    pub fn generate_with<S>(&self, source: &mut S) -> String
    where
        S: ByteSource + ?Sized,
    {
        sample(self.size, &self.symbols, self.mask, self.step, source)
    }

    /// The ID a [`SeededSource`] built from `seed` produces. Same seed, same ID.
    #[must_use]
    pub fn generate_seeded(&self, seed: impl AsRef<[u8]>) -> String {
        self.generate_with(&mut SeededSource::new(seed))
    }
}
