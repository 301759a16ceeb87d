//! Configuration
//!
//! Read from the environment once at startup; every variable is
//! optional and empty values count as unset

use anyhow::Context;
use anyhow::Result;
use chrono::TimeDelta;

/// Default base for share strings
const DEFAULT_BASE_URL: &str = "https://brief.ly";

/// Default lifetime of a link, in minutes
const DEFAULT_TTL_MINUTES: i64 = 30;

/// Default "expiring soon" threshold, in minutes
const DEFAULT_EXPIRING_SOON_MINUTES: i64 = 5;

/// Default cadence of the periodic prune, in seconds
const DEFAULT_PRUNE_INTERVAL_SECONDS: i64 = 60;

/// Registry and front end configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base of the copyable share string, `<base>#<code>`
    pub base_url: String,

    /// How long a link stays resolvable after creation
    pub expiry_window: TimeDelta,

    /// Remaining time at which a link counts as expiring soon
    pub expiring_soon_threshold: TimeDelta,

    /// How often the front end runs the periodic prune
    pub prune_interval: TimeDelta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            expiry_window: TimeDelta::minutes(DEFAULT_TTL_MINUTES),
            expiring_soon_threshold: TimeDelta::minutes(DEFAULT_EXPIRING_SOON_MINUTES),
            prune_interval: TimeDelta::seconds(DEFAULT_PRUNE_INTERVAL_SECONDS),
        }
    }
}

impl Config {
    /// Read the configuration from the environment
    ///
    /// Recognized variables: `BASE_URL`, `LINK_TTL_MINUTES`,
    /// `EXPIRING_SOON_MINUTES`, `PRUNE_INTERVAL_SECONDS`
    ///
    /// # Errors
    ///
    /// Will return `Err` when a numeric variable is set to something
    /// that does not parse as a whole number
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            base_url: env_var("BASE_URL").unwrap_or(defaults.base_url),
            expiry_window: delta_var(
                "LINK_TTL_MINUTES",
                TimeDelta::minutes,
                defaults.expiry_window,
            )?,
            expiring_soon_threshold: delta_var(
                "EXPIRING_SOON_MINUTES",
                TimeDelta::minutes,
                defaults.expiring_soon_threshold,
            )?,
            prune_interval: delta_var(
                "PRUNE_INTERVAL_SECONDS",
                TimeDelta::seconds,
                defaults.prune_interval,
            )?,
        })
    }
}

/// Get the value of an ENV var
///
/// Only when:
/// - It is set
/// - It is not empty
fn env_var(var_name: &'static str) -> Option<String> {
    std::env::var(var_name)
        .ok()
        .filter(|value| !value.is_empty())
}

/// Get a duration from an ENV var, or a default
fn delta_var(
    var_name: &'static str,
    to_delta: fn(i64) -> TimeDelta,
    default: TimeDelta,
) -> Result<TimeDelta> {
    match env_var(var_name) {
        Some(value) => value
            .parse::<i64>()
            .map(to_delta)
            .with_context(|| format!("`{var_name}` must be a whole number")),
        None => Ok(default),
    }
}
