//! User-visible notices.
//!
//! The bridge reports progress and failures through a modal notice in the
//! page. Presentation (the overlay, the confirm button, the dismiss timer)
//! belongs to the page runtime; this module carries the parameters of a
//! notice and the seam through which the flow raises one.

use std::time::Duration;

/// Parameters of a single notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Whether confirming the notice also closes the hosting window.
    pub close_on_confirm: bool,
    /// Independent timer after which the notice is removed regardless of
    /// user action. Dismissal never closes the window.
    pub auto_dismiss: Option<Duration>,
}

impl Notice {
    /// Default dismiss window for transient notices.
    pub const DEFAULT_DISMISS: Duration = Duration::from_secs(10);

    /// A transient notice: confirming closes the window, and it dismisses
    /// itself after [`Self::DEFAULT_DISMISS`].
    pub fn toast(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            close_on_confirm: true,
            auto_dismiss: Some(Self::DEFAULT_DISMISS),
        }
    }

    /// A notice that stays up until replaced or confirmed, without closing
    /// the window. Used while work is still in flight.
    pub fn pinned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            close_on_confirm: false,
            auto_dismiss: None,
        }
    }

    /// A failure notice that demands acknowledgement: no timer, and
    /// confirming leaves the window open so the user can read the detail.
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            close_on_confirm: false,
            auto_dismiss: None,
        }
    }

    /// Override the dismiss timer; `None` pins the notice.
    pub fn with_auto_dismiss(mut self, after: Option<Duration>) -> Self {
        self.auto_dismiss = after;
        self
    }
}

/// Sink for notices raised by the import flow.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

impl<F: Fn(Notice) + Send + Sync> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice);
    }
}
