use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

const DEFAULT_RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PORT: u16 = 3001;

/// Process configuration, read once at startup
#[derive(Clone)]
pub struct Config {
    /// Public key id, also handed to the browser checkout
    pub razorpay_key_id: String,
    /// Shared secret for gateway auth and payment signatures. Never logged.
    pub razorpay_key_secret: String,
    pub razorpay_api_url: String,
    /// Upper bound on a single order-creation call
    pub gateway_timeout: Duration,
    pub port: u16,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| anyhow!("{} must be set", key))
        };

        let timeout_secs = parse_or(
            &lookup,
            "GATEWAY_TIMEOUT_SECS",
            DEFAULT_GATEWAY_TIMEOUT_SECS,
        )?;
        // A zero timeout would fail every order before the gateway is reached
        if timeout_secs == 0 {
            return Err(anyhow!("GATEWAY_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            razorpay_key_id: required("RAZORPAY_KEY_ID")?,
            razorpay_key_secret: required("RAZORPAY_KEY_SECRET")?,
            razorpay_api_url: lookup("RAZORPAY_API_URL")
                .unwrap_or_else(|| DEFAULT_RAZORPAY_API_URL.to_string()),
            gateway_timeout: Duration::from_secs(timeout_secs),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            rate_limit_per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 2)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", 5)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid value: {:?}", key, raw)),
        None => Ok(default),
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("razorpay_key_id", &self.razorpay_key_id)
            .field("razorpay_key_secret", &"<redacted>")
            .field("razorpay_api_url", &self.razorpay_api_url)
            .field("gateway_timeout", &self.gateway_timeout)
            .field("port", &self.port)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .field("rate_limit_burst", &self.rate_limit_burst)
            .finish()
    }
}
