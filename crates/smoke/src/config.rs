use std::time::Duration;

/// Default API base, including the `/api` prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Smoke runner settings.
///
/// | Variable             | Default                      |
/// |----------------------|------------------------------|
/// | `SMOKE_BASE_URL`     | `http://localhost:3000/api`  |
/// | `SMOKE_TIMEOUT_SECS` | `30`                         |
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl SmokeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparsable timeouts fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("SMOKE_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = lookup("SMOKE_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SmokeConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_trimmed_and_bad_timeout_ignored() {
        let config = SmokeConfig::from_lookup(|key| match key {
            "SMOKE_BASE_URL" => Some("https://myco.example/api/".into()),
            "SMOKE_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config.base_url, "https://myco.example/api");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
