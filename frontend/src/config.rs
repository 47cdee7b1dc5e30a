//! Startup configuration. Values are resolved once from compile-time
//! environment variables and injected into the client and provider
//! constructors; nothing below `main` reads the environment.

const DEFAULT_API_URL: &str = "http://localhost:5001";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    /// Pseudo-random pick from the fixed reference table after a
    /// simulated processing delay.
    Demo,
    /// One round trip against the external inference service.
    Remote,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub provider: ProviderKind,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("DR_API_URL"), option_env!("DR_PROVIDER"))
    }

    fn from_values(api_url: Option<&str>, provider: Option<&str>) -> Self {
        AppConfig {
            api_base_url: api_url.unwrap_or(DEFAULT_API_URL).to_string(),
            provider: match provider {
                Some("remote") => ProviderKind::Remote,
                _ => ProviderKind::Demo,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_provider_and_local_address() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:5001");
        assert_eq!(config.provider, ProviderKind::Demo);
    }

    #[test]
    fn remote_provider_is_opt_in() {
        let config = AppConfig::from_values(Some("https://dr.example.org"), Some("remote"));
        assert_eq!(config.api_base_url, "https://dr.example.org");
        assert_eq!(config.provider, ProviderKind::Remote);

        let config = AppConfig::from_values(None, Some("demo"));
        assert_eq!(config.provider, ProviderKind::Demo);
    }
}
