use crate::error::ConfigError;

/// Environment variable holding the base URL of the hosted data store.
pub static STORE_URL_VAR: &str = "PORTFOLIO_STORE_URL";
/// Environment variable holding the public (anonymous) API key of the data store.
pub static STORE_KEY_VAR: &str = "PORTFOLIO_STORE_KEY";

/// Connection settings for the remote data store.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub store_url: String,
    pub store_key: String,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// Native builds load a `.env` file first and prefer the process environment. Values
    /// present at compile time are used otherwise, which is the only source available to a
    /// build running in the browser.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let store_url = read_var(STORE_URL_VAR, option_env!("PORTFOLIO_STORE_URL"))?;
        let store_key = read_var(STORE_KEY_VAR, option_env!("PORTFOLIO_STORE_KEY"))?;

        Self::new(store_url, store_key)
    }

    /// Build a configuration from explicit values, validating the store URL.
    pub fn new(store_url: String, store_key: String) -> Result<Self, ConfigError> {
        if !(store_url.starts_with("http://") || store_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: STORE_URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {:?}", store_url),
            });
        }

        Ok(Self {
            store_url: store_url.trim_end_matches('/').to_string(),
            store_key,
        })
    }
}

fn read_var(name: &str, baked: Option<&'static str>) -> Result<String, ConfigError> {
    if let Some(value) = runtime_var(name) {
        return Ok(value);
    }

    baked
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}
