/// URL-safe alphabet used when the caller does not supply one. Order matters: a masked byte
/// value indexes straight into this table.
pub const DEFAULT_ALPHABET: &str =
    "_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default ID length. With the default alphabet this gives 126 bits of entropy.
pub const DEFAULT_SIZE: usize = 21;

pub const DEFAULT_ADDITIONAL_BYTES_FACTOR: f64 = 1.6;

/// Largest alphabet a single random byte can index.
pub const MAX_ALPHABET_LEN: usize = 255;

/// Upper bound on the bytes drawn per batch. Larger batches only waste entropy; the loop
/// refills until the ID is complete.
pub const MAX_STEP: usize = 1 << 16;

/// Smallest `2^n - 1` covering every index of `alphabet`.
///
/// A one-character alphabet yields `0`. The alphabet length is not validated here; anything
/// past 256 characters saturates to `0xFF`.
///
/// ```
/// use nanoid_gen::calculate_mask;
///
/// assert_eq!(calculate_mask("a"), 0);
/// assert_eq!(calculate_mask("abc"), 3);
/// assert_eq!(calculate_mask("abcdefgh"), 7);
/// ```
#[must_use]
pub fn calculate_mask(alphabet: &str) -> u8 {
    mask_for_len(alphabet.chars().count())
}

pub(crate) fn mask_for_len(len: usize) -> u8 {
    match len {
        0 | 1 => 0,
        2..=256 => {
            let bits = usize::BITS - (len - 1).leading_zeros();
            u8::try_from((1_u16 << bits) - 1).unwrap_or(u8::MAX)
        }
        _ => u8::MAX,
    }
}

/// Overhead multiplier `1 + |mask - len| / len`, rounded to two decimals.
///
/// The further the alphabet length sits below the next power of two, the more masked bytes
/// get rejected and the larger the factor.
#[must_use]
pub fn calculate_additional_bytes_factor(alphabet: &str, mask: u8) -> f64 {
    factor_for_len(alphabet.chars().count(), mask)
}

#[allow(clippy::cast_precision_loss)]
fn factor_for_len(len: usize, mask: u8) -> f64 {
    let len = len as f64;
    let factor = 1.0 + (f64::from(mask) - len).abs() / len;
    (factor * 100.0).round() / 100.0
}

/// Number of random bytes to draw per batch: `ceil(factor * mask * size / len)`, clamped to
/// `1..=MAX_STEP`.
///
/// `factor >= 1` is the caller's responsibility; [`generate`](crate::generate) checks it.
#[must_use]
pub fn calculate_step(size: usize, alphabet: &str, factor: f64, mask: u8) -> usize {
    step_for_len(size, alphabet.chars().count(), factor, mask)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn step_for_len(size: usize, len: usize, factor: f64, mask: u8) -> usize {
    let step = (factor * f64::from(mask) * size as f64 / len as f64).ceil();
    if step.is_nan() || step < 1.0 {
        1
    } else if step >= MAX_STEP as f64 {
        MAX_STEP
    } else {
        step as usize
    }
}

/// Step for `size` characters of `alphabet` with both the mask and the additional bytes
/// factor derived from the alphabet itself.
#[must_use]
pub fn derived_step(size: usize, alphabet: &str) -> usize {
    let len = alphabet.chars().count();
    let mask = mask_for_len(len);
    step_for_len(size, len, factor_for_len(len, mask), mask)
}
