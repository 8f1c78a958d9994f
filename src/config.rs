use std::env;
use std::time::Duration;

pub const DEFAULT_RELAY_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSc1qOkb9JVlkcJ6JMocOp9tDC5FDNZ29SSOLW0PCXJNVxXelQ/formResponse";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub relay_url: String,
    pub relay_timeout: Duration,
    pub confirmation: Duration,
    pub session_ttl: Duration,
    pub dentists_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            relay_url: env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
            relay_timeout: secs_from_env("RELAY_TIMEOUT_SECS", 15),
            confirmation: secs_from_env("CONFIRMATION_SECS", 5),
            session_ttl: secs_from_env("SESSION_TTL_SECS", 1800),
            dentists_file: env::var("DENTISTS_FILE").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn secs_from_env(key: &str, default: u64) -> Duration {
    let secs = env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}
