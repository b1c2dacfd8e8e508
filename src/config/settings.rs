use std::env;

const DELAY_MIN_MS_KEY: &str = "LEARNAULT_DELAY_MIN_MS";
const DELAY_MAX_MS_KEY: &str = "LEARNAULT_DELAY_MAX_MS";
const BALANCE_FAILURE_KEY: &str = "LEARNAULT_BALANCE_FAILURE_RATE";
const TRANSFER_FAILURE_KEY: &str = "LEARNAULT_TRANSFER_FAILURE_RATE";
const VERIFY_FAILURE_KEY: &str = "LEARNAULT_VERIFY_FAILURE_RATE";

/// Tuning knobs for the mock network simulator.
///
/// Defaults match the behavior the frontend was written against: a round
/// trip takes 500-1500ms and fails a fixed fraction of the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Lower bound of the artificial delay, inclusive (milliseconds)
    pub delay_min_ms: u64,
    /// Upper bound of the artificial delay, exclusive (milliseconds)
    pub delay_max_ms: u64,
    /// Probability that a balance lookup fails
    pub balance_failure_rate: f64,
    /// Probability that a transaction submission fails
    pub transfer_failure_rate: f64,
    /// Probability that a credential verification call fails
    pub verify_failure_rate: f64,
    /// Probability that a verified credential comes back `verified: true`
    pub verified_rate: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            delay_min_ms: 500,
            delay_max_ms: 1500,
            balance_failure_rate: 0.10,
            transfer_failure_rate: 0.15,
            verify_failure_rate: 0.10,
            verified_rate: 0.80,
        }
    }
}

impl SimulatorConfig {
    /// Defaults overridden by `LEARNAULT_*` environment variables.
    ///
    /// Unparseable values are logged and skipped rather than failing
    /// startup.
    pub fn from_env() -> SimulatorConfig {
        let mut config = SimulatorConfig::default();
        if let Some(v) = read_env_u64(DELAY_MIN_MS_KEY) {
            config.delay_min_ms = v;
        }
        if let Some(v) = read_env_u64(DELAY_MAX_MS_KEY) {
            config.delay_max_ms = v;
        }
        if let Some(v) = read_env_rate(BALANCE_FAILURE_KEY) {
            config.balance_failure_rate = v;
        }
        if let Some(v) = read_env_rate(TRANSFER_FAILURE_KEY) {
            config.transfer_failure_rate = v;
        }
        if let Some(v) = read_env_rate(VERIFY_FAILURE_KEY) {
            config.verify_failure_rate = v;
        }
        config
    }

    /// A simulator that never fails and never sleeps. Used by tests and
    /// demos that want deterministic control flow.
    pub fn reliable() -> SimulatorConfig {
        SimulatorConfig {
            delay_min_ms: 0,
            delay_max_ms: 0,
            balance_failure_rate: 0.0,
            transfer_failure_rate: 0.0,
            verify_failure_rate: 0.0,
            verified_rate: 1.0,
        }
    }
}

fn read_env_u64(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {key}={raw}: not a valid integer");
            None
        }
    }
}

fn read_env_rate(key: &str) -> Option<f64> {
    let raw = env::var(key).ok()?;
    match raw.parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Some(v),
        Ok(_) | Err(_) => {
            log::warn!("Ignoring {key}={raw}: expected a probability in [0, 1]");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_frontend_contract() {
        let config = SimulatorConfig::default();
        assert_eq!(config.delay_min_ms, 500);
        assert_eq!(config.delay_max_ms, 1500);
        assert_eq!(config.balance_failure_rate, 0.10);
        assert_eq!(config.transfer_failure_rate, 0.15);
        assert_eq!(config.verify_failure_rate, 0.10);
        assert_eq!(config.verified_rate, 0.80);
    }

    #[test]
    fn test_reliable_never_fails_or_sleeps() {
        let config = SimulatorConfig::reliable();
        assert_eq!(config.delay_min_ms, 0);
        assert_eq!(config.delay_max_ms, 0);
        assert_eq!(config.balance_failure_rate, 0.0);
        assert_eq!(config.transfer_failure_rate, 0.0);
        assert_eq!(config.verify_failure_rate, 0.0);
        assert_eq!(config.verified_rate, 1.0);
    }
}
