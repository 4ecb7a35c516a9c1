//! Dashboard Configuration
//!
//! Where the campaigns come from and how long to wait for them.

use anyhow::{bail, Context};
use std::sync::OnceLock;
use std::time::Duration;

/// Endpoint used when nothing else is configured (the local mock API).
pub const DEFAULT_CAMPAIGNS_URL: &str = "http://localhost:8000/campaigns";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Full URL of the campaigns collection (e.g., "http://localhost:8000/campaigns")
    pub campaigns_url: String,

    /// Request timeout for the campaigns fetch. `None` waits indefinitely.
    /// Ignored on wasm, where the browser owns the request.
    pub request_timeout: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            campaigns_url: DEFAULT_CAMPAIGNS_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl DashboardConfig {
    /// Create config from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        let campaigns_url = std::env::var("CAMPAIGNS_URL")
            .unwrap_or_else(|_| DEFAULT_CAMPAIGNS_URL.to_string());

        let request_timeout = match std::env::var("CAMPAIGNS_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => None,
        };

        let config = Self {
            campaigns_url,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create config from values baked in at compile time
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            campaigns_url: option_env!("CAMPAIGNS_URL")
                .unwrap_or(DEFAULT_CAMPAIGNS_URL)
                .to_string(),
            request_timeout: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = reqwest::Url::parse(&self.campaigns_url)
            .with_context(|| format!("CAMPAIGNS_URL is not a valid URL: {}", self.campaigns_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!("CAMPAIGNS_URL must use http or https, got {}", url.scheme());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_timeout(raw: &str) -> anyhow::Result<Option<Duration>> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("CAMPAIGNS_TIMEOUT_SECS must be a whole number of seconds, got {:?}", raw))?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Install the configuration for the running app. Later calls are ignored.
pub fn init(config: DashboardConfig) {
    let _ = CONFIG.set(config);
}

/// The installed configuration, or the defaults if `init` was never called.
pub fn current() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}
