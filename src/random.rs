use rand::RngCore;
use rand::rngs::ThreadRng;

/// Anything that can fill a buffer with uniformly distributed random bytes.
///
/// Every [`rand::RngCore`] is a `ByteSource`, so seeded generators such as
/// `rand::rngs::StdRng` can stand in for the secure default in tests.
pub trait ByteSource {
    fn fill_random(&mut self, dest: &mut [u8]);
}

impl<R: RngCore + ?Sized> ByteSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}

/// The cryptographically secure source used when the caller supplies none: rand's
/// thread-local generator, periodically reseeded from the operating system.
#[must_use]
pub fn default_source() -> ThreadRng {
    rand::rng()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rng_is_byte_source() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let mut from_trait = [0u8; 16];
        let mut from_rng = [0u8; 16];
        a.fill_random(&mut from_trait);
        b.fill_bytes(&mut from_rng);
        assert_eq!(from_trait, from_rng);
    }

    #[test]
    fn test_mutable_reference_is_byte_source() {
        fn draw(source: &mut impl ByteSource) -> [u8; 8] {
            let mut buf = [0u8; 8];
            source.fill_random(&mut buf);
            buf
        }
        let mut rng = StdRng::seed_from_u64(5);
        let first = draw(&mut &mut rng);
        let second = draw(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_default_source_fills() {
        let mut buf = [0u8; 64];
        default_source().fill_random(&mut buf);
        // 64 zero bytes from a CSPRNG has probability 2^-512
        assert!(buf.iter().any(|&b| b != 0));
    }
}
