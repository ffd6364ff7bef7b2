//! environment configuration

use std::str::FromStr;
use std::time::Duration;

use crate::controller::EmptyResults;
use crate::error::{ConfigSnafu, Error};

pub const BASE_URL_VAR: &str = "PATENT_SEARCH_API_URL";
pub const FIXTURE_DELAY_VAR: &str = "PATENT_SEARCH_FIXTURE_DELAY_MS";
pub const EMPTY_RESULTS_VAR: &str = "PATENT_SEARCH_EMPTY_RESULTS";

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_FIXTURE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// where `HttpBackend` sends searches
    pub base_url: String,
    /// latency of `FixtureBackend`
    pub fixture_delay: Duration,
    pub empty_results: EmptyResults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            fixture_delay: DEFAULT_FIXTURE_DELAY,
            empty_results: EmptyResults::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
        where F: Fn(&str) -> Option<String>
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(url) = get(BASE_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return ConfigSnafu { var: BASE_URL_VAR, msg: format!("{:?} is not an http(s) url", url) }.fail();
            }
            config.base_url = url;
        }

        if let Some(ms) = get(FIXTURE_DELAY_VAR) {
            let ms = u64::from_str(ms.trim())
                .map_err(|e| Error::Config { var: FIXTURE_DELAY_VAR, msg: e.to_string() })?;
            config.fixture_delay = Duration::from_millis(ms);
        }

        if let Some(policy) = get(EMPTY_RESULTS_VAR) {
            config.empty_results = policy
                .parse()
                .map_err(|msg| Error::Config { var: EMPTY_RESULTS_VAR, msg })?;
        }

        Ok(config)
    }
}
