//! The bridge client: one generic call primitive plus the convenience
//! operations built on it.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::host::{handlers, HostCallError, HostChannel, HostValue};
use crate::provider::{InstallOutcome, ProviderId};

/// Observer notified when the host rejects a call, the page-level `onerror`
/// analogue.
pub type ErrorObserver = Box<dyn Fn(&Error) + Send + Sync>;

/// Client over a [`HostChannel`].
///
/// Every operation is a one-shot request/response; the bridge keeps no
/// session state of its own and does not coordinate overlapping calls.
pub struct KaringBridge<H> {
    channel: H,
    error_observer: Option<ErrorObserver>,
}

impl<H: HostChannel> KaringBridge<H> {
    pub fn new(channel: H) -> Self {
        Self {
            channel,
            error_observer: None,
        }
    }

    /// Register an observer for host rejections.
    pub fn with_error_observer(mut self, observer: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        self.error_observer = Some(Box::new(observer));
        self
    }

    /// Whether the host call entry point exists in this context. Pure
    /// capability probe, no side effects.
    pub fn is_available(&self) -> bool {
        self.channel.is_attached()
    }

    /// The sole transport primitive.
    ///
    /// Fails with [`Error::HostUnavailable`] before touching the channel if
    /// the host is absent. A host rejection notifies the error observer and
    /// comes back as [`Error::HandlerFailed`] naming the handler; the host's
    /// own error is not preserved. A dispatch fault surfaces as
    /// [`Error::Dispatch`], never a panic.
    pub async fn call(&self, handler: &str, args: &[String]) -> Result<HostValue> {
        if !self.is_available() {
            return Err(Error::HostUnavailable);
        }

        match self.channel.call(handler, args).await {
            Ok(reply) => {
                debug!(handler, "host call resolved");
                Ok(reply)
            }
            Err(HostCallError::Rejected) => {
                let err = Error::HandlerFailed {
                    handler: handler.to_string(),
                };
                error!(handler, "host rejected call");
                if let Some(observer) = &self.error_observer {
                    observer(&err);
                }
                Err(err)
            }
            Err(HostCallError::Faulted(detail)) => {
                error!(handler, %detail, "host call dispatch faulted");
                Err(Error::Dispatch(detail))
            }
        }
    }

    /// App version, best-effort. Any failure is logged and degrades to
    /// `None`.
    pub async fn version(&self) -> Option<HostValue> {
        match self.call(handlers::VERSION, &[]).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                warn!(%err, "could not get host version");
                None
            }
        }
    }

    /// Pre-register a provider id so the host preloads (and validates) its
    /// configuration, shortening the later install.
    ///
    /// The id is sent in its raw string form; no collapsing applies here.
    pub async fn prepare(&self, pid: impl Into<ProviderId>) -> Result<HostValue> {
        let args = [pid.into().raw()];
        match self.call(handlers::PREPARE, &args).await {
            Ok(reply) => {
                debug!(reply = %reply.render(), "prepare complete");
                Ok(reply)
            }
            Err(err) => {
                error!(%err, "prepare failed");
                Err(err)
            }
        }
    }

    /// Like [`prepare`](Self::prepare), invoking `on_complete` with the
    /// reply before returning it.
    pub async fn prepare_with<F>(&self, pid: impl Into<ProviderId>, on_complete: F) -> Result<HostValue>
    where
        F: FnOnce(&HostValue),
    {
        let reply = self.prepare(pid).await?;
        on_complete(&reply);
        Ok(reply)
    }

    /// Install a subscription configuration.
    ///
    /// The provider id is normalized ([`ProviderId::normalized`]); an empty
    /// id tells the host to reuse the id from a prior prepare. The host's
    /// empty-string success convention is translated into
    /// [`InstallOutcome`] here; transport failures propagate as errors.
    pub async fn install_config(
        &self,
        pid: impl Into<ProviderId>,
        user: &str,
        url: &str,
        name: &str,
    ) -> Result<InstallOutcome> {
        let args = [
            pid.into().normalized(),
            user.to_string(),
            url.to_string(),
            name.to_string(),
        ];
        match self.call(handlers::INSTALL_CONFIG, &args).await {
            Ok(reply) => {
                debug!(reply = %reply.render(), "configuration call complete");
                Ok(InstallOutcome::from_reply(&reply))
            }
            Err(err) => {
                error!(%err, "failed to install subscription configuration");
                Err(err)
            }
        }
    }

    /// Info about the currently installed provider, best-effort.
    ///
    /// A text reply is parsed as JSON; only a container (object or array)
    /// counts. Anything else (rejection, non-JSON text, a scalar) degrades
    /// to `None`.
    pub async fn provider_info(&self) -> Option<serde_json::Value> {
        let reply = match self.call(handlers::PROVIDER_INFO, &[]).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(%err, "could not get provider info");
                return None;
            }
        };

        let parsed = match reply {
            HostValue::Object(value) => value,
            HostValue::Text(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(err) => {
                    warn!(%err, "provider info reply is not JSON");
                    return None;
                }
            },
        };

        match parsed {
            value @ (serde_json::Value::Object(_) | serde_json::Value::Array(_)) => Some(value),
            other => {
                warn!(kind = %json_kind(&other), "provider info reply is not a container");
                None
            }
        }
    }

    /// Close the hosting window, optionally after a delay.
    ///
    /// The delay is a plain timer; once this future is in flight it cannot
    /// be cancelled through the bridge.
    pub async fn close_window(&self, delay: Duration) -> Result<HostValue> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match self.call(handlers::CLOSE, &[]).await {
            Ok(reply) => {
                debug!("window closed");
                Ok(reply)
            }
            Err(err) => {
                error!(%err, "failed to close the window");
                Err(err)
            }
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
