use std::time::Duration;

use scraper_core::ClientError;

use crate::endpoint::{EndpointDefaults, EndpointResolver, RuntimeMode};
use crate::http::HttpSettings;

pub const ENV_MODE: &str = "SCRAPER_MODE";
pub const ENV_API_BASE_URL: &str = "SCRAPER_API_BASE_URL";
pub const ENV_STORE_URL: &str = "SCRAPER_STORE_URL";
pub const ENV_STORE_KEY: &str = "SCRAPER_STORE_KEY";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SCRAPER_REQUEST_TIMEOUT_SECS";
pub const ENV_COOKIES_FILE: &str = "SCRAPER_COOKIES_FILE";

/// Runtime configuration gathered from the environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub mode: RuntimeMode,
    pub api_base_url: Option<String>,
    pub store_url: Option<String>,
    pub store_key: Option<String>,
    pub cookies_file: Option<String>,
    pub http: HttpSettings,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mode = match get(ENV_MODE) {
            Some(raw) => raw.parse()?,
            None => RuntimeMode::default(),
        };

        let mut http = HttpSettings::default();
        if let Some(raw) = get(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!(
                    "{ENV_REQUEST_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            http.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(Self {
            mode,
            api_base_url: get(ENV_API_BASE_URL),
            store_url: get(ENV_STORE_URL),
            store_key: get(ENV_STORE_KEY),
            cookies_file: get(ENV_COOKIES_FILE),
            http,
        })
    }

    pub fn endpoint_resolver(&self) -> EndpointResolver {
        EndpointResolver::new(
            self.mode,
            self.api_base_url.clone(),
            EndpointDefaults::default(),
        )
    }

    /// Returns the store URL and key, naming every missing variable at once.
    pub fn store_credentials(&self) -> Result<(&str, &str), ClientError> {
        match (self.store_url.as_deref(), self.store_key.as_deref()) {
            (Some(url), Some(key)) => Ok((url, key)),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(ENV_STORE_URL);
                }
                if key.is_none() {
                    missing.push(ENV_STORE_KEY);
                }
                Err(ClientError::Configuration(format!(
                    "missing required environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ClientError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_development_without_variables() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.mode, RuntimeMode::Development);
        assert!(settings.http.request_timeout.is_none());
        assert_eq!(
            settings.endpoint_resolver().resolve().unwrap(),
            "http://localhost:5000"
        );
    }

    #[test]
    fn production_without_base_url_fails_to_resolve() {
        let settings = settings(&[(ENV_MODE, "production")]).unwrap();
        assert!(matches!(
            settings.endpoint_resolver().resolve(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn missing_store_variables_are_reported_together() {
        let err = settings(&[]).unwrap().store_credentials().unwrap_err();
        assert_eq!(
            err,
            ClientError::Configuration(
                "missing required environment variables: SCRAPER_STORE_URL, SCRAPER_STORE_KEY"
                    .to_string()
            )
        );
    }

    #[test]
    fn reads_timeout_and_cookies() {
        let settings = settings(&[
            (ENV_REQUEST_TIMEOUT_SECS, "90"),
            (ENV_COOKIES_FILE, "/tmp/cookies.txt"),
            (ENV_STORE_URL, "https://store.example.com"),
            (ENV_STORE_KEY, "anon"),
        ])
        .unwrap();
        assert_eq!(settings.http.request_timeout, Some(Duration::from_secs(90)));
        assert_eq!(settings.cookies_file.as_deref(), Some("/tmp/cookies.txt"));
        assert_eq!(
            settings.store_credentials().unwrap(),
            ("https://store.example.com", "anon")
        );
    }

    #[test]
    fn rejects_bad_timeout_and_mode() {
        assert!(settings(&[(ENV_REQUEST_TIMEOUT_SECS, "soon")]).is_err());
        assert!(settings(&[(ENV_MODE, "staging")]).is_err());
    }
}
