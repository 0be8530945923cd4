use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_URL, ENV_TIMEOUT_SECS, ENV_VISION_MODEL,
    GPT_API_URL, VISION_MODEL,
};
use crate::error::InterpretError;
use std::{env, fmt, time::Duration};

/// Settings handed to [`crate::client::ImageInterpretationClient::new`].
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            api_url: GPT_API_URL.to_string(),
            model: VISION_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, InterpretError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, InterpretError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                InterpretError::ConfigurationError(format!("{} is not set", ENV_API_KEY))
            })?;

        let mut config = ClientConfig::new(api_key);
        if let Some(api_url) = lookup(ENV_API_URL) {
            config = config.with_api_url(api_url);
        }
        if let Some(model) = lookup(ENV_VISION_MODEL) {
            config = config.with_model(model);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                InterpretError::ConfigurationError(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InterpretError> {
        if self.api_key.trim().is_empty() {
            return Err(InterpretError::ConfigurationError(
                "API key is empty".to_string(),
            ));
        }
        reqwest::Url::parse(&self.api_url).map_err(|e| {
            InterpretError::ConfigurationError(format!(
                "Invalid API URL {:?}: {}",
                self.api_url, e
            ))
        })?;
        Ok(())
    }
}

// The key never reaches logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
