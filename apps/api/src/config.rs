use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Pause before returning job-match results. 0 disables it.
    pub analysis_delay_ms: u64,
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay_ms: 0,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            analysis_delay_ms: match lookup("ANALYSIS_DELAY_MS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("ANALYSIS_DELAY_MS must be a non-negative integer")?,
                None => defaults.analysis_delay_ms,
            },
            cors_permissive: match lookup("CORS_PERMISSIVE") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("CORS_PERMISSIVE must be true or false, got '{v}'"))?,
                None => defaults.cors_permissive,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
