//! Client configuration

/// Default API base when `BRANCH_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Client configuration for connecting to the branch API
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BRANCH_API_URL | http://localhost:8080/api | API 基础地址 |
/// | BRANCH_API_TOKEN | - | Bearer token |
/// | BRANCH_API_TIMEOUT_SECS | - | 请求超时(秒)，未设置则使用传输层默认值 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token, fixed for the lifetime of the client
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BRANCH_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            token: std::env::var("BRANCH_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            timeout: std::env::var("BRANCH_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
