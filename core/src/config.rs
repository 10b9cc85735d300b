use luckywheel_abi::DEFAULT_UNIT_STAKE;
use luckywheel_lib::{KlogLevel, klog_set_level, klog_warn};

const DEFAULT_STARTING_BALANCE: u64 = 100;
const DEFAULT_GROWTH_LOG_CAPACITY: usize = 1000;
const DEFAULT_MIN_FULL_SPINS: u32 = 6;
const DEFAULT_MAX_FULL_SPINS: u32 = 8;
const DEFAULT_MAX_OFFSET_DEG: f64 = 180.0;
const DEFAULT_SPIN_DURATION_MS: u32 = 10_000;
const DEFAULT_LOG_LEVEL: KlogLevel = KlogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    pub starting_balance: u64,
    pub unit_stake: u64,
    /// Growth log entries kept before the oldest is evicted; 0 keeps all.
    pub growth_log_capacity: usize,
    pub min_full_spins: u32,
    pub max_full_spins: u32,
    /// Upper bound (exclusive) of the random landing offset, in degrees.
    pub max_offset_deg: f64,
    pub spin_duration_ms: u32,
    /// Fixed planner seed; `None` draws one from the process generator.
    pub rng_seed: Option<u64>,
    pub log_level: KlogLevel,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            unit_stake: DEFAULT_UNIT_STAKE,
            growth_log_capacity: DEFAULT_GROWTH_LOG_CAPACITY,
            min_full_spins: DEFAULT_MIN_FULL_SPINS,
            max_full_spins: DEFAULT_MAX_FULL_SPINS,
            max_offset_deg: DEFAULT_MAX_OFFSET_DEG,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            rng_seed: None,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WheelConfig {
    /// Push `log_level` into klog.
    pub fn apply_logging(&self) {
        klog_set_level(self.log_level);
    }

    /// Copy with out-of-range fields replaced: a zero stake or a non-finite
    /// offset outside `0..=360` falls back to the default, and an inverted
    /// spin range collapses to `min_full_spins`.
    pub fn validated(mut self) -> Self {
        if self.unit_stake == 0 {
            klog_warn!("wheel: zero unit stake, using {}", DEFAULT_UNIT_STAKE);
            self.unit_stake = DEFAULT_UNIT_STAKE;
        }
        if !self.max_offset_deg.is_finite() || !(0.0..=360.0).contains(&self.max_offset_deg) {
            klog_warn!(
                "wheel: landing offset {} out of range, using {}",
                self.max_offset_deg,
                DEFAULT_MAX_OFFSET_DEG
            );
            self.max_offset_deg = DEFAULT_MAX_OFFSET_DEG;
        }
        if self.max_full_spins < self.min_full_spins {
            self.max_full_spins = self.min_full_spins;
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse::<u64>().ok(),
    }
}

/// Build a config from whitespace-separated `wheel.*=value` tokens.
///
/// Unknown keys and malformed values are ignored and leave the default in
/// place. Recognised keys: `balance`, `stake`, `growth_cap`, `spins`
/// (`N` or `MIN..MAX`), `offset`, `duration` (optional `ms` suffix), `seed`
/// (decimal or hex, `off` to clear), `log`.
pub fn config_from_cmdline(cmdline: Option<&str>) -> WheelConfig {
    let mut cfg = WheelConfig::default();
    let Some(cmdline) = cmdline else {
        return cfg;
    };

    for token in cmdline.split_whitespace() {
        let Some(rest) = token.strip_prefix("wheel.") else {
            continue;
        };
        let Some((key, value)) = rest.split_once('=') else {
            continue;
        };
        match key {
            "balance" => {
                if let Ok(parsed) = value.parse::<u64>() {
                    cfg.starting_balance = parsed;
                }
            }
            "stake" => {
                // A zero stake would make every bet free.
                if let Ok(parsed) = value.parse::<u64>() {
                    if parsed > 0 {
                        cfg.unit_stake = parsed;
                    }
                }
            }
            "growth_cap" => {
                if let Ok(parsed) = value.parse::<usize>() {
                    cfg.growth_log_capacity = parsed;
                }
            }
            "spins" => {
                let range = match value.split_once("..") {
                    Some((lo, hi)) => lo.parse::<u32>().ok().zip(hi.parse::<u32>().ok()),
                    None => value.parse::<u32>().ok().map(|n| (n, n)),
                };
                if let Some((lo, hi)) = range {
                    if lo <= hi {
                        cfg.min_full_spins = lo;
                        cfg.max_full_spins = hi;
                    }
                }
            }
            "offset" => {
                if let Ok(parsed) = value.parse::<f64>() {
                    if parsed.is_finite() && (0.0..=360.0).contains(&parsed) {
                        cfg.max_offset_deg = parsed;
                    }
                }
            }
            "duration" => {
                if let Ok(parsed) = value.trim_end_matches("ms").parse::<u32>() {
                    cfg.spin_duration_ms = parsed;
                }
            }
            "seed" => {
                if parse_bool(value) == Some(false) && value != "0" {
                    cfg.rng_seed = None;
                } else if let Some(seed) = parse_u64(value) {
                    cfg.rng_seed = Some(seed);
                }
            }
            "log" => {
                if let Some(level) = KlogLevel::from_str(value) {
                    cfg.log_level = level;
                }
            }
            _ => {}
        }
    }
    cfg
}
