use rand::RngCore;
use sha2::{Digest, Sha256};

const BLOCK_LEN: usize = 32;

/// Deterministic byte stream: `SHA-256(seed || counter)` for counter 0, 1, 2, ... with the
/// counter as a big-endian u64.
///
/// The same seed always yields the same IDs, which makes it useful for fixtures and
/// idempotent imports. Anyone who knows the seed can predict the output, so it must not be
/// used for IDs that need to be unguessable.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: Vec<u8>,
    counter: u64,
    block: [u8; BLOCK_LEN],
    pos: usize,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: impl AsRef<[u8]>) -> Self {
        Self {
            seed: seed.as_ref().to_vec(),
            counter: 0,
            block: [0; BLOCK_LEN],
            pos: BLOCK_LEN,
        }
    }

    fn refill(&mut self) {
        let digest = Sha256::new()
            .chain_update(&self.seed)
            .chain_update(self.counter.to_be_bytes())
            .finalize();
        self.block.copy_from_slice(&digest);
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

impl RngCore for SeededSource {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut written = 0;
        while written < dest.len() {
            if self.pos == BLOCK_LEN {
                self.refill();
            }
            let n = (BLOCK_LEN - self.pos).min(dest.len() - written);
            dest[written..written + n].copy_from_slice(&self.block[self.pos..self.pos + n]);
            self.pos += n;
            written += n;
        }
    }
}
