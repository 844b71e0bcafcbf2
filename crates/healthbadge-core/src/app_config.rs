#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub soda_base_url: String,
    pub soda_dataset: String,
    pub soda_app_token: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inject_interval_ms: u64,
    pub inject_max_attempts: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("soda_base_url", &self.soda_base_url)
            .field("soda_dataset", &self.soda_dataset)
            .field(
                "soda_app_token",
                &self.soda_app_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inject_interval_ms", &self.inject_interval_ms)
            .field("inject_max_attempts", &self.inject_max_attempts)
            .finish()
    }
}
