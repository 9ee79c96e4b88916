use std::time::Duration;

use crate::types::Redirect;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Endpoints, storage keys and timings shared by the widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub drafts_key: String,
    pub session_email_key: String,
    pub session_profile_key: String,
    pub login_redirect: Redirect,
    pub register_redirect: Redirect,
    pub clock_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            drafts_key: "lcebolla-news-submissions".to_string(),
            session_email_key: "userEmail".to_string(),
            session_profile_key: "userData".to_string(),
            login_redirect: Redirect::new("perfil.html", Duration::from_millis(1000)),
            register_redirect: Redirect::new("login.html", Duration::from_millis(1500)),
            clock_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// override the API base url, a blank value keeps the current one
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            self.api_base_url = url.to_string();
        }

        self
    }

    /// clock refresh period in milliseconds, saturating at `u32::MAX`
    pub fn clock_interval_millis(&self) -> u32 {
        u32::try_from(self.clock_interval.as_millis()).unwrap_or(u32::MAX)
    }

    pub fn api_url(&self, path: &str) -> String {
        let mut url = self.api_base_url.clone();
        url.push('/');
        url.push_str(path.trim_start_matches('/'));

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoint_paths() {
        let config = Config::default();
        assert_eq!(
            config.api_url("users/me"),
            "http://127.0.0.1:8000/api/v1/users/me"
        );
        assert_eq!(
            config.api_url("/auth/register"),
            "http://127.0.0.1:8000/api/v1/auth/register"
        );
    }

    #[test]
    fn override_base_url() {
        let config = Config::default().with_api_base_url("https://news.example/api/v1/");
        assert_eq!(config.api_url("users/me"), "https://news.example/api/v1/users/me");

        let config = Config::default().with_api_base_url("   ");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn clock_interval_saturates() {
        assert_eq!(Config::default().clock_interval_millis(), 60_000);

        let config = Config {
            clock_interval: Duration::from_secs(60 * 24 * 3600),
            ..Config::default()
        };
        assert_eq!(config.clock_interval_millis(), u32::MAX);
    }
}
