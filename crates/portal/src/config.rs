//! Portal configuration.

use crate::error::{Error, Result};

/// Configuration for the connect endpoint.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Display name of the panel, substituted into the page and used as the
    /// subscription label inside the app.
    pub app_name: String,
    /// Login entry point unauthenticated requests are redirected to.
    pub login_path: String,
    /// Path the connect route is mounted at.
    pub connect_path: String,
    /// Name of the return-path cookie set before redirecting to login.
    pub redirect_cookie: String,
    /// Lifetime of the return-path cookie, in hours.
    pub redirect_ttl_hours: i64,
    /// Format suffix appended to the universal subscription link.
    pub link_suffix: String,
    /// Where the page loads the browser-side bridge script from.
    pub script_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app_name: "Karing".to_string(),
            login_path: "/auth/login".to_string(),
            connect_path: "/karing/connect".to_string(),
            redirect_cookie: "redir".to_string(),
            redirect_ttl_hours: 1,
            link_suffix: "/singbox".to_string(),
            script_url: "/assets/karing.js".to_string(),
        }
    }
}

impl PortalConfig {
    /// Build a config from the environment. `APP_NAME` is required; the
    /// remaining fields keep their defaults.
    pub fn from_env() -> Result<Self> {
        let app_name = std::env::var("APP_NAME")
            .map_err(|_| Error::Config("APP_NAME is not set".to_string()))?;
        Ok(Self {
            app_name,
            ..Self::default()
        })
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_connect_path(mut self, path: impl Into<String>) -> Self {
        self.connect_path = path.into();
        self
    }

    pub fn with_link_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.link_suffix = suffix.into();
        self
    }

    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.login_path, "/auth/login");
        assert_eq!(config.connect_path, "/karing/connect");
        assert_eq!(config.redirect_ttl_hours, 1);
        assert_eq!(config.link_suffix, "/singbox");
    }

    #[test]
    fn test_builder_setters() {
        let config = PortalConfig::default()
            .with_app_name("MyApp")
            .with_login_path("/login")
            .with_link_suffix("/clash");
        assert_eq!(config.app_name, "MyApp");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.link_suffix, "/clash");
    }
}
