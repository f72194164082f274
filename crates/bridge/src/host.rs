//! The host capability seam.
//!
//! The native app injects a single call entry point into the webview's page
//! context. Here that ambient global becomes an injected dependency: a trait
//! with one asynchronous call method, so the bridge can run against the real
//! webview channel or a test double.

use async_trait::async_trait;

/// Handler names understood by the Karing host.
pub mod handlers {
    /// Report the app version.
    pub const VERSION: &str = "version";
    /// Pre-register a provider id so its configuration is preloaded.
    pub const PREPARE: &str = "ispPrepare";
    /// Install a subscription configuration.
    pub const INSTALL_CONFIG: &str = "ispInstallConfig";
    /// Describe the currently installed provider.
    pub const PROVIDER_INFO: &str = "ispInfo";
    /// Close the hosting window.
    pub const CLOSE: &str = "close";
}

/// A value returned by the host.
///
/// The host answers with opaque text (empty text is the conventional success
/// sentinel) or, for some handlers, a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Text(String),
    Object(serde_json::Value),
}

impl HostValue {
    /// The textual form of the reply, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HostValue::Text(text) => Some(text),
            HostValue::Object(_) => None,
        }
    }

    /// Whether this reply is the empty-text success sentinel.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, HostValue::Text(text) if text.is_empty())
    }

    /// Render the reply for inclusion in a message.
    pub fn render(&self) -> String {
        match self {
            HostValue::Text(text) => text.clone(),
            HostValue::Object(value) => value.to_string(),
        }
    }
}

impl From<&str> for HostValue {
    fn from(text: &str) -> Self {
        HostValue::Text(text.to_string())
    }
}

impl From<String> for HostValue {
    fn from(text: String) -> Self {
        HostValue::Text(text)
    }
}

impl From<serde_json::Value> for HostValue {
    fn from(value: serde_json::Value) -> Self {
        HostValue::Object(value)
    }
}

/// How a host call can fail at the transport tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCallError {
    /// The host took the call and rejected it. The bridge drops the host's
    /// own error and reports only which handler failed.
    Rejected,
    /// Dispatch faulted before the host produced a reply (entry point
    /// malformed, channel torn down, ...).
    Faulted(String),
}

/// The host-provided call entry point.
#[async_trait]
pub trait HostChannel: Send + Sync {
    /// Whether the entry point is present in this context. Pure probe, no
    /// side effects.
    fn is_attached(&self) -> bool {
        true
    }

    /// Forward a handler invocation to the host.
    async fn call(&self, handler: &str, args: &[String]) -> Result<HostValue, HostCallError>;
}

#[async_trait]
impl<H: HostChannel + ?Sized> HostChannel for std::sync::Arc<H> {
    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    async fn call(&self, handler: &str, args: &[String]) -> Result<HostValue, HostCallError> {
        (**self).call(handler, args).await
    }
}

/// A channel standing in for a page context with no host object.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedChannel;

#[async_trait]
impl HostChannel for DetachedChannel {
    fn is_attached(&self) -> bool {
        false
    }

    async fn call(&self, _handler: &str, _args: &[String]) -> Result<HostValue, HostCallError> {
        Err(HostCallError::Faulted("no host attached".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_sentinel() {
        assert!(HostValue::Text(String::new()).is_empty_text());
        assert!(!HostValue::Text("1.2.3".to_string()).is_empty_text());
        assert!(!HostValue::Object(serde_json::json!({})).is_empty_text());
    }

    #[test]
    fn test_render_object() {
        let value = HostValue::Object(serde_json::json!({"isp": "acme"}));
        assert_eq!(value.render(), r#"{"isp":"acme"}"#);
    }

    #[tokio::test]
    async fn test_detached_channel() {
        let channel = DetachedChannel;
        assert!(!channel.is_attached());
        assert!(channel.call(handlers::VERSION, &[]).await.is_err());
    }
}
