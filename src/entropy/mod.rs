//! Random sources for word selection and injection.
//!
//! The generator takes any `rand::Rng`; this module picks which one the CLI
//! hands it.

mod hw;

use rand::rngs::{StdRng, ThreadRng};
use rand::{RngCore, SeedableRng};
use zeroize::Zeroize;

// =============================================================================
// Source selection
// =============================================================================

pub enum Source {
    Thread(ThreadRng),
    Seeded(StdRng),
    Hardware(HwRng),
}

impl Source {
    /// Seed wins over `hardware`; neither gives the thread-local RNG.
    pub fn select(seed: Option<u64>, hardware: bool) -> Self {
        match (seed, hardware) {
            (Some(seed), _) => Source::Seeded(StdRng::seed_from_u64(seed)),
            (None, true) => Source::Hardware(HwRng::new()),
            (None, false) => Source::Thread(rand::rng()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Thread(_) => "thread rng",
            Source::Seeded(_) => "seeded",
            Source::Hardware(_) => hw::source_name(),
        }
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Thread(r) => r.next_u32(),
            Source::Seeded(r) => r.next_u32(),
            Source::Hardware(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Thread(r) => r.next_u64(),
            Source::Seeded(r) => r.next_u64(),
            Source::Hardware(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Source::Thread(r) => r.fill_bytes(dst),
            Source::Seeded(r) => r.fill_bytes(dst),
            Source::Hardware(r) => r.fill_bytes(dst),
        }
    }
}

// =============================================================================
// Cycle-counter RNG
// =============================================================================

const MULTIPLIERS: [u64; 6] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
];

/// Mixes the CPU cycle counter into a rotating state on every draw.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    #[inline]
    pub fn new() -> Self {
        HwRng {
            state: hw::entropy(),
        }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
