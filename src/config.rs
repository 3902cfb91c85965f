use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TasteDive API key. Absence is reported per request, not at startup.
    #[serde(default)]
    pub tastedive_api_key: Option<String>,

    /// TasteDive API base URL
    #[serde(default = "default_tastedive_api_url")]
    pub tastedive_api_url: String,

    /// Origin allowed to call the proxy from a browser
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tastedive_api_url() -> String {
    "https://tastedive.com".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// The subset of configuration the recommendation proxy needs.
///
/// Built once at startup and injected into the proxy, so tests can construct
/// it directly instead of touching the process environment.
#[derive(Clone, Default)]
pub struct ProxyConfig {
    pub api_key: Option<String>,
}

impl ProxyConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Returns the credential, treating a blank value as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

// Never print the credential, even in debug output
impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key().map(redact_key))
            .finish()
    }
}

/// Shortens a credential to a loggable prefix
pub fn redact_key(key: &str) -> String {
    const VISIBLE: usize = 4;
    if key.chars().count() <= VISIBLE {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(VISIBLE).collect();
    format!("{}…", prefix)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn proxy_config(&self) -> ProxyConfig {
        ProxyConfig::new(self.tastedive_api_key.clone())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
