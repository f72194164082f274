//! The subscription-link seam.

use crate::session::PanelUser;

/// Computes a user's universal subscription link base.
///
/// The link encodes the user's service configuration; how it is derived is
/// the panel's business. The portal appends the configured format suffix
/// before handing it to the page.
pub trait SubscriptionLinker: Send + Sync {
    fn universal_link(&self, user: &PanelUser) -> String;
}
