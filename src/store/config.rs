use std::time::Duration;

/// Remote calls that exceed the configured timeout fail with a persistence
/// error instead of hanging the attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the remote table store.
///
/// Built once at startup and shared read-only by every component; nothing
/// mutates it after construction.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base endpoint, e.g. `https://example.supabase.co/rest/v1`.
    pub base_url: String,
    /// API key, sent as both `apikey` and bearer token.
    pub api_key: String,
    /// Upper bound for every remote call.
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
