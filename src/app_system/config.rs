use std::str::FromStr;

/// Runtime settings.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | interface the API binds to |
/// | HTTP_PORT | 8080 | API port |
/// | ACTOR_BUFFER_SIZE | 100 | request queue length of each store actor |
///
/// Values that fail to parse fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub actor_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            actor_buffer_size: 100,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: env_or("HTTP_PORT", defaults.http_port),
            actor_buffer_size: env_or("ACTOR_BUFFER_SIZE", defaults.actor_buffer_size),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
