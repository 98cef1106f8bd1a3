//! Environment-driven client configuration.

use std::time::Duration;

use nanigans_api::Client;

use crate::error::NanigansError;

pub const ENV_SITE_ID: &str = "NANIGANS_SITE_ID";
pub const ENV_ACCESS_TOKEN: &str = "NANIGANS_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "NANIGANS_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "NANIGANS_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and transport settings for one site.
#[derive(Clone)]
pub struct Config {
    pub site_id: String,
    pub access_token: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("site_id", &self.site_id)
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, NanigansError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NanigansError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_id = required(&lookup, ENV_SITE_ID)?;
        let access_token = required(&lookup, ENV_ACCESS_TOKEN)?;
        let base_url = lookup(ENV_BASE_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let timeout_secs = lookup(ENV_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            site_id,
            access_token,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds an API client for the configured site.
    pub fn client(&self) -> Client {
        let client = match &self.base_url {
            Some(base_url) => Client::with_base_url(base_url, &self.site_id, &self.access_token),
            None => Client::new(&self.site_id, &self.access_token),
        };
        client.with_timeout(self.timeout)
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, NanigansError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| NanigansError::Config(format!("{} is not set", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn minimal_config() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ENV_SITE_ID, "1234"),
            (ENV_ACCESS_TOKEN, "tok"),
        ]))
        .unwrap();
        assert_eq!(cfg.site_id, "1234");
        assert_eq!(cfg.base_url, None);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.client().site_id(), "1234");
    }

    #[test]
    fn overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ENV_SITE_ID, " 1234 "),
            (ENV_ACCESS_TOKEN, "tok"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.site_id, "1234");
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_falls_back() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ENV_SITE_ID, "1"),
            (ENV_ACCESS_TOKEN, "tok"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_token() {
        let err = Config::from_lookup(lookup_from(&[(ENV_SITE_ID, "1")])).unwrap_err();
        assert!(matches!(err, NanigansError::Config(_)));
        assert!(err.to_string().contains(ENV_ACCESS_TOKEN));
    }

    #[test]
    fn blank_site_is_missing() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_SITE_ID, "  "),
            (ENV_ACCESS_TOKEN, "tok"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_SITE_ID));
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = Config::from_lookup(lookup_from(&[
            (ENV_SITE_ID, "1"),
            (ENV_ACCESS_TOKEN, "super-secret"),
        ]))
        .unwrap();
        assert!(!format!("{:?}", cfg).contains("super-secret"));
    }
}
