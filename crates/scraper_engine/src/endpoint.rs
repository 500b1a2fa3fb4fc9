use std::fmt;
use std::str::FromStr;

use scraper_core::ClientError;
use url::Url;

/// Default base URL of a locally running scraping service.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl FromStr for RuntimeMode {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeMode::Development),
            "production" | "prod" => Ok(RuntimeMode::Production),
            other => Err(ClientError::Configuration(format!(
                "unknown runtime mode '{other}' (expected development or production)"
            ))),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Development => f.write_str("development"),
            RuntimeMode::Production => f.write_str("production"),
        }
    }
}

/// Per-mode fallback base URLs used when nothing is configured explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDefaults {
    pub development: Option<String>,
    pub production: Option<String>,
}

impl Default for EndpointDefaults {
    fn default() -> Self {
        Self {
            development: Some(DEVELOPMENT_BASE_URL.to_string()),
            // No production default ships; deployments must set one.
            production: None,
        }
    }
}

impl EndpointDefaults {
    fn for_mode(&self, mode: RuntimeMode) -> Option<&str> {
        match mode {
            RuntimeMode::Development => self.development.as_deref(),
            RuntimeMode::Production => self.production.as_deref(),
        }
    }
}

/// Picks the scraping service base URL. Pure: no I/O, same input same output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver {
    mode: RuntimeMode,
    explicit: Option<String>,
    defaults: EndpointDefaults,
}

impl EndpointResolver {
    pub fn new(mode: RuntimeMode, explicit: Option<String>, defaults: EndpointDefaults) -> Self {
        Self {
            mode,
            explicit,
            defaults,
        }
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn resolve(&self) -> Result<String, ClientError> {
        let candidate = non_blank(self.explicit.as_deref())
            .or_else(|| non_blank(self.defaults.for_mode(self.mode)))
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "no scraping service URL configured for {} mode",
                    self.mode
                ))
            })?;

        let base = candidate.trim_end_matches('/');
        let parsed = Url::parse(base).map_err(|err| {
            ClientError::Configuration(format!("invalid scraping service URL '{base}': {err}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Configuration(format!(
                "scraping service URL '{base}' must use http or https"
            )));
        }
        Ok(base.to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults(development: Option<&str>, production: Option<&str>) -> EndpointDefaults {
        EndpointDefaults {
            development: development.map(str::to_string),
            production: production.map(str::to_string),
        }
    }

    #[test]
    fn explicit_url_wins_over_default() {
        let resolver = EndpointResolver::new(
            RuntimeMode::Development,
            Some("https://scraper.example.com/".to_string()),
            EndpointDefaults::default(),
        );
        assert_eq!(resolver.resolve().unwrap(), "https://scraper.example.com");
    }

    #[test]
    fn blank_explicit_url_falls_back_to_mode_default() {
        let resolver = EndpointResolver::new(
            RuntimeMode::Development,
            Some("   ".to_string()),
            EndpointDefaults::default(),
        );
        assert_eq!(resolver.resolve().unwrap(), DEVELOPMENT_BASE_URL);
    }

    #[test]
    fn production_uses_its_own_default() {
        let resolver = EndpointResolver::new(
            RuntimeMode::Production,
            None,
            defaults(Some("http://localhost:5000"), Some("https://prod.example.com")),
        );
        assert_eq!(resolver.resolve().unwrap(), "https://prod.example.com");
    }

    #[test]
    fn production_without_any_url_is_a_configuration_error() {
        let resolver =
            EndpointResolver::new(RuntimeMode::Production, None, EndpointDefaults::default());
        assert!(matches!(
            resolver.resolve(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver =
            EndpointResolver::new(RuntimeMode::Development, None, EndpointDefaults::default());
        assert_eq!(resolver.resolve(), resolver.resolve());
    }

    #[test]
    fn rejects_non_http_urls() {
        let resolver = EndpointResolver::new(
            RuntimeMode::Production,
            Some("ftp://files.example.com".to_string()),
            EndpointDefaults::default(),
        );
        assert!(matches!(
            resolver.resolve(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn parses_modes() {
        assert_eq!("PROD".parse::<RuntimeMode>().unwrap(), RuntimeMode::Production);
        assert_eq!(" dev ".parse::<RuntimeMode>().unwrap(), RuntimeMode::Development);
        assert!("staging".parse::<RuntimeMode>().is_err());
    }
}
