use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{anyhow, Result};
use log::{info, warn};

pub struct Config {
    pub origin: String,
    pub alert_ttl: Duration,
    pub results_delay: Duration,
    pub stats_interval: Duration,
    pub fallback_vote_duration: f64,
    pub min_password_len: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            origin: try_load("VOTING_SERVER_ORIGIN", "http://localhost:5000")?,
            alert_ttl: Duration::from_secs(try_load("VOTING_ALERT_TTL_SECS", "5")?),
            results_delay: Duration::from_secs(try_load("VOTING_RESULTS_DELAY_SECS", "3")?),
            stats_interval: Duration::from_secs(try_load("VOTING_STATS_INTERVAL_SECS", "10")?),
            fallback_vote_duration: try_load("VOTING_FALLBACK_DURATION_SECS", "5")?,
            min_password_len: try_load("VOTING_MIN_PASSWORD_LEN", "6")?,
        })
    }

    /// Every endpoint lives under `/api` on the server origin.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.origin.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "http://localhost:5000".to_owned(),
            alert_ttl: Duration::from_secs(5),
            results_delay: Duration::from_secs(3),
            stats_interval: Duration::from_secs(10),
            fallback_vote_duration: 5.0,
            min_password_len: 6,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("{key} is misconfigured: {e}")
    })
}
