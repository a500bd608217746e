use std::time::Duration;

use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "BIND_HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "BIND_PORT", default = "8000")]
    pub port: u16,

    #[envconfig(from = "MAX_UPLOAD_BYTES", default = "104857600")] // 100 MiB
    pub max_upload_bytes: usize,

    #[envconfig(from = "SESSION_TTL_SECS", default = "1209600")] // 2 weeks
    pub session_ttl_secs: u64,

    #[envconfig(from = "SESSION_MAX_ENTRIES", default = "10000")]
    pub session_max_entries: u64,

    #[envconfig(from = "SESSION_COOKIE_NAME", default = "sessionid")]
    pub session_cookie_name: String,

    #[envconfig(from = "ENABLE_METRICS", default = "false")]
    pub enable_metrics: bool,
}

impl Config {
    pub fn bind(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn default_for_test() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_upload_bytes: 1024 * 1024,
            session_ttl_secs: 60,
            session_max_entries: 100,
            session_cookie_name: "sessionid".to_string(),
            enable_metrics: false,
        }
    }
}
