use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://server.aptech.io";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root of the remote API, without a trailing path (e.g. `https://server.aptech.io`).
    pub base_url: String,
    /// Per-request timeout (default: 10 seconds).
    pub timeout_ms: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 10_000,
            user_agent: concat!("taskdesk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ApiError::InvalidConfig("base_url is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ApiError::InvalidConfig("timeout_ms must be positive".to_string()));
        }
        Ok(())
    }
}
