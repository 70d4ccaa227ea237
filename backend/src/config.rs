//! Search service location and client settings.

use std::time::Duration;

use anyhow::Context;
use common::search_const::{CAMPSITES_SEGMENT, FREE_SEGMENT, PARKS_SEGMENT};
use reqwest::Url;

pub const SEARCH_SERVICE_URL_VAR: &str = "SEARCH_SERVICE_URL";
pub const SEARCH_SERVICE_TIMEOUT_VAR: &str = "SEARCH_SERVICE_TIMEOUT_SECS";

pub const DEFAULT_SEARCH_SERVICE_URL: &str = "http://127.0.0.1:6543";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid search service url: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("search service url cannot be used as a base: {}", base_url);
        }
        Ok(Self { base_url, timeout: DEFAULT_TIMEOUT })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup(SEARCH_SERVICE_URL_VAR).unwrap_or(DEFAULT_SEARCH_SERVICE_URL.to_string());
        let mut config = Self::new(&base_url)?;
        if let Some(secs) = lookup(SEARCH_SERVICE_TIMEOUT_VAR) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{SEARCH_SERVICE_TIMEOUT_VAR} must be a whole number of seconds, got {secs:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// `{base}/parks/free`
    pub fn free_parks_url(&self) -> Url {
        self.endpoint(&[PARKS_SEGMENT, FREE_SEGMENT])
    }

    /// `{base}/parks/{park_name}/campsites/free`, with the park name path-encoded.
    pub fn free_camp_sites_url(&self, park_name: &str) -> Url {
        self.endpoint(&[PARKS_SEGMENT, park_name, CAMPSITES_SEGMENT, FREE_SEGMENT])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // base_url is checked to be a base in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
