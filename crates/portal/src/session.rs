//! The authentication seam.

use async_trait::async_trait;
use axum::http::HeaderMap;

/// A logged-in panel user, as far as the connect page needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUser {
    pub display_name: String,
}

/// Resolves a request to its logged-in user, if any.
///
/// Authentication internals (sessions, tokens, the login flow itself) live
/// in the hosting panel; the portal only asks this one question.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_user(&self, headers: &HeaderMap) -> Option<PanelUser>;
}
