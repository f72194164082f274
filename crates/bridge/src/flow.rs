//! The auto-import flow the connect page runs at load time.

use std::time::Duration;

use tracing::{debug, warn};

use crate::bridge::KaringBridge;
use crate::error::Error;
use crate::host::HostChannel;
use crate::notice::{Notice, Notifier};
use crate::provider::{InstallOutcome, ProviderId};

/// How long the window stays open after a successful import.
pub const CLOSE_DELAY: Duration = Duration::from_secs(10);

/// What to import: the user's display name, subscription link, and the
/// label the host files the subscription under.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub user: String,
    pub link: String,
    pub label: String,
}

/// How an import attempt ended.
#[derive(Debug)]
pub enum ImportReport {
    /// Not running inside the Karing webview; nothing was attempted and the
    /// user was not bothered.
    HostMissing,
    /// The configuration was imported and the window close was scheduled.
    Imported,
    /// The host declined the configuration.
    Rejected(String),
    /// The call itself failed.
    Failed(Error),
}

/// Drive a full import: probe availability, keep the user posted, install
/// the configuration, and close the window on success.
///
/// The provider id is left unset so the host reuses whatever an earlier
/// `ispPrepare` registered.
pub async fn run_auto_import<H: HostChannel>(
    bridge: &KaringBridge<H>,
    notifier: &dyn Notifier,
    request: &ImportRequest,
) -> ImportReport {
    if !bridge.is_available() {
        debug!("not running inside the Karing webview");
        return ImportReport::HostMissing;
    }

    notifier.notify(Notice::pinned("Syncing configuration, please wait..."));

    match bridge
        .install_config(ProviderId::Unset, &request.user, &request.link, &request.label)
        .await
    {
        Ok(InstallOutcome::Installed) => {
            notifier.notify(Notice::toast(
                "Configuration imported, returning to Karing. Enjoy!",
            ));
            if let Err(err) = bridge.close_window(CLOSE_DELAY).await {
                warn!(%err, "could not close the window after import");
            }
            ImportReport::Imported
        }
        Ok(InstallOutcome::Rejected(detail)) => {
            notifier.notify(Notice::toast(format!(
                "Import failed, please contact the administrator. Error: {detail}"
            )));
            ImportReport::Rejected(detail)
        }
        Err(err) => {
            notifier.notify(Notice::alert(format!(
                "Configuration failed, please contact the administrator. {err}"
            )));
            ImportReport::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{handlers, DetachedChannel, HostCallError, HostValue};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubHost {
        install_reply: Result<HostValue, HostCallError>,
    }

    #[async_trait]
    impl HostChannel for StubHost {
        async fn call(&self, handler: &str, _args: &[String]) -> Result<HostValue, HostCallError> {
            match handler {
                handlers::INSTALL_CONFIG => self.install_reply.clone(),
                handlers::CLOSE => Ok(HostValue::from("")),
                _ => Err(HostCallError::Rejected),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    fn request() -> ImportRequest {
        ImportRequest {
            user: "alice".to_string(),
            link: "https://sub/abc/singbox".to_string(),
            label: "MyApp".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_host_is_silent() {
        let bridge = KaringBridge::new(DetachedChannel);
        let notifier = RecordingNotifier::default();

        let report = run_auto_import(&bridge, &notifier, &request()).await;
        assert!(matches!(report, ImportReport::HostMissing));
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_import_toasts_and_closes() {
        let bridge = KaringBridge::new(StubHost {
            install_reply: Ok(HostValue::from("")),
        });
        let notifier = RecordingNotifier::default();

        let report = run_auto_import(&bridge, &notifier, &request()).await;
        assert!(matches!(report, ImportReport::Imported));

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 2);
        // syncing notice stays up on its own
        assert!(!notices[0].close_on_confirm);
        assert_eq!(notices[0].auto_dismiss, None);
        // success notice is a regular toast
        assert!(notices[1].close_on_confirm);
    }

    #[tokio::test]
    async fn test_rejection_surfaces_host_detail() {
        let bridge = KaringBridge::new(StubHost {
            install_reply: Ok(HostValue::from("invalid link")),
        });
        let notifier = RecordingNotifier::default();

        let report = run_auto_import(&bridge, &notifier, &request()).await;
        match report {
            ImportReport::Rejected(detail) => assert_eq!(detail, "invalid link"),
            other => panic!("expected rejection, got {other:?}"),
        }

        let notices = notifier.notices.lock().unwrap();
        assert!(notices[1].text.contains("invalid link"));
    }

    #[tokio::test]
    async fn test_transport_failure_alerts() {
        let bridge = KaringBridge::new(StubHost {
            install_reply: Err(HostCallError::Rejected),
        });
        let notifier = RecordingNotifier::default();

        let report = run_auto_import(&bridge, &notifier, &request()).await;
        assert!(matches!(report, ImportReport::Failed(Error::HandlerFailed { .. })));

        let notices = notifier.notices.lock().unwrap();
        assert!(notices[1].text.contains("ispInstallConfig"));
        assert_eq!(notices[1].auto_dismiss, None);
    }
}
