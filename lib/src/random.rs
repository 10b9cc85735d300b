use spin::{Mutex, Once};

use crate::{clock, klog_warn};

const DEFAULT_LFSR_SEED: u64 = 0xACE1u64;

/// Xorshift generator. Cheap, deterministic per seed, and nowhere near
/// cryptographic.
#[derive(Clone, Copy, Debug)]
pub struct Lfsr64 {
    state: u64,
}

impl Lfsr64 {
    pub fn with_seed(seed: u64) -> Self {
        let s = if seed == 0 { DEFAULT_LFSR_SEED } else { seed };
        Self { state: s }
    }

    /// Seed from the registered clock mixed with the address of a stack slot.
    /// Without a clock only the address differs between processes, which
    /// still varies under ASLR; a warning is logged in that case.
    pub fn from_clock() -> Self {
        if !clock::clock_is_registered() {
            klog_warn!("random: no clock registered, seeding from stack address only");
        }
        let slot = 0u8;
        let salt = core::ptr::addr_of!(slot) as usize as u64;
        Self::with_seed(mix_seed(clock::uptime_ms(), salt))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = if x == 0 { 0xfeedc0de } else { x };
        self.state
    }

    /// Uniform value in `0..bound`. Returns 0 for a zero bound.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next() % bound
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next_unit_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// splitmix64 finalizer over `time ^ salt`.
fn mix_seed(time_ms: u64, salt: u64) -> u64 {
    let mut z = (time_ms ^ salt.rotate_left(32)).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

static RNG: Once<Mutex<Lfsr64>> = Once::new();

/// Next value of the process-wide generator, used to seed per-engine ones.
pub fn random_next() -> u64 {
    RNG.call_once(|| Mutex::new(Lfsr64::from_clock()))
        .lock()
        .next()
}
