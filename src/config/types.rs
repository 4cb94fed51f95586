use std::time::Duration;

/// Default number of additional attempts after the first failure
pub const DEFAULT_RETRIES: u32 = 2;

/// Default exponential backoff base, in seconds
pub const DEFAULT_BACKOFF_BASE: f64 = 0.5;

/// Default per-attempt request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Ceiling on any single backoff sleep, in seconds
pub const MAX_BACKOFF_SECS: f64 = 120.0;

/// Retry and timeout configuration for the HTTP client
///
/// This is the explicit configuration struct carried alongside the client.
/// All fields are validated at construction time; a `FetchConfig` in hand is
/// always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Additional attempts after the first failure (0 means a single attempt)
    pub retries: u32,

    /// Backoff multiplier: the sleep before retry `n` is `backoff_base * 2^n` seconds
    pub backoff_base: f64,

    /// Ceiling for how long a single request attempt may take
    pub timeout: Duration,
}

impl FetchConfig {
    /// Creates a config, clamping misconfigured values instead of deferring
    /// failure to request time. A negative or non-finite backoff base clamps
    /// to zero.
    pub fn new(retries: u32, backoff_base: f64, timeout_secs: u64) -> Self {
        let backoff_base = if backoff_base.is_finite() && backoff_base > 0.0 {
            backoff_base
        } else {
            0.0
        };

        FetchConfig {
            retries,
            backoff_base,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Returns the sleep duration before retry attempt `n` (zero-based)
    ///
    /// The sleep is `backoff_base * 2^n` seconds, capped at
    /// [`MAX_BACKOFF_SECS`]; the exponent itself is capped at 16 so the
    /// doubling cannot overflow before the ceiling applies. An extreme
    /// backoff base therefore yields the ceiling, never a panic at sleep
    /// time.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let secs = self.backoff_base * f64::from(2u32.pow(attempt.min(16)));
        Duration::from_secs_f64(secs.min(MAX_BACKOFF_SECS))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig::new(DEFAULT_RETRIES, DEFAULT_BACKOFF_BASE, DEFAULT_TIMEOUT_SECS)
    }
}
