//! Provider ids and the install result protocol.

use crate::host::HostValue;

/// A subscription provider id, as accepted by the host's `ispPrepare` and
/// `ispInstallConfig` handlers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProviderId {
    /// No id supplied; the host falls back to a previously prepared one.
    #[default]
    Unset,
    Numeric(i64),
    Text(String),
}

impl ProviderId {
    /// The id as sent to `ispInstallConfig`.
    ///
    /// Legacy callers pass a handful of "absent" spellings; all of them
    /// collapse to the empty id, which tells the host to reuse the id set
    /// by a prior `ispPrepare`.
    pub fn normalized(&self) -> String {
        match self {
            ProviderId::Unset | ProviderId::Numeric(0) => String::new(),
            ProviderId::Text(text) if text.is_empty() || text == "None" => String::new(),
            other => other.raw(),
        }
    }

    /// The plain string form, with no collapsing. `ispPrepare` takes the id
    /// verbatim, so numeric zero stays `"0"` here.
    pub fn raw(&self) -> String {
        match self {
            ProviderId::Unset => String::new(),
            ProviderId::Numeric(n) => n.to_string(),
            ProviderId::Text(text) => text.clone(),
        }
    }
}

impl From<i64> for ProviderId {
    fn from(n: i64) -> Self {
        ProviderId::Numeric(n)
    }
}

impl From<i32> for ProviderId {
    fn from(n: i32) -> Self {
        ProviderId::Numeric(i64::from(n))
    }
}

impl From<&str> for ProviderId {
    fn from(text: &str) -> Self {
        ProviderId::Text(text.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(text: String) -> Self {
        ProviderId::Text(text)
    }
}

impl<T: Into<ProviderId>> From<Option<T>> for ProviderId {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ProviderId::Unset,
        }
    }
}

/// Outcome of an `ispInstallConfig` call.
///
/// The host signals success with an empty text reply and failure with a
/// free-text message. That convention is translated into a typed variant
/// here, at the boundary, so callers never compare strings themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallOutcome {
    /// The configuration was imported.
    Installed,
    /// The host declined the configuration and said why.
    Rejected(String),
}

impl InstallOutcome {
    /// Translate a raw host reply.
    pub fn from_reply(reply: &HostValue) -> Self {
        if reply.is_empty_text() {
            InstallOutcome::Installed
        } else {
            InstallOutcome::Rejected(reply.render())
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_collapses_absent_spellings() {
        assert_eq!(ProviderId::Unset.normalized(), "");
        assert_eq!(ProviderId::Numeric(0).normalized(), "");
        assert_eq!(ProviderId::Text(String::new()).normalized(), "");
        assert_eq!(ProviderId::Text("None".to_string()).normalized(), "");
    }

    #[test]
    fn test_normalized_keeps_real_ids() {
        assert_eq!(ProviderId::Numeric(42).normalized(), "42");
        assert_eq!(ProviderId::Numeric(-7).normalized(), "-7");
        assert_eq!(ProviderId::Text("acme".to_string()).normalized(), "acme");
        // "none" is only special in its exact legacy spelling
        assert_eq!(ProviderId::Text("none".to_string()).normalized(), "none");
    }

    #[test]
    fn test_raw_does_not_collapse() {
        assert_eq!(ProviderId::Numeric(0).raw(), "0");
        assert_eq!(ProviderId::Unset.raw(), "");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ProviderId::from(42), ProviderId::Numeric(42));
        assert_eq!(ProviderId::from("pid"), ProviderId::Text("pid".to_string()));
        assert_eq!(ProviderId::from(None::<i64>), ProviderId::Unset);
        assert_eq!(ProviderId::from(Some(3)), ProviderId::Numeric(3));
    }

    #[test]
    fn test_install_outcome_translation() {
        assert!(InstallOutcome::from_reply(&HostValue::from("")).is_installed());
        assert_eq!(
            InstallOutcome::from_reply(&HostValue::from("bad link")),
            InstallOutcome::Rejected("bad link".to_string())
        );
        assert_eq!(
            InstallOutcome::from_reply(&HostValue::Object(serde_json::json!({"err": 1}))),
            InstallOutcome::Rejected(r#"{"err":1}"#.to_string())
        );
    }
}
