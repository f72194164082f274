//! # karing-connect
//!
//! Rust toolkit for connecting a proxy panel to the Karing app.
//!
//! Karing renders panel pages inside a webview and exposes a host object
//! the page can call to install subscriptions. This workspace covers both
//! halves of that handshake:
//!
//! - **karing-bridge** - Typed client for the host bridge: handler
//!   dispatch, provider preparation, subscription install, notices, token
//!   storage and authenticated JSON fetches.
//! - **karing-portal** - axum portal serving the connect page that walks
//!   a logged-in user through the automatic import.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use karing_connect::bridge::{KaringBridge, InstallOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bridge = KaringBridge::new(my_channel);
//!
//!     if !bridge.is_available() {
//!         return Ok(());
//!     }
//!
//!     match bridge
//!         .install_config(None::<i64>, "alice", "https://panel.example/sub/abc/singbox", "MyApp")
//!         .await?
//!     {
//!         InstallOutcome::Installed => bridge.close_window(Duration::from_secs(10)).await,
//!         InstallOutcome::Rejected(reason) => eprintln!("import refused: {reason}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "bridge")]
pub use karing_bridge as bridge;
#[cfg(feature = "portal")]
pub use karing_portal as portal;

// Commonly used types at the top level
#[cfg(feature = "bridge")]
pub use karing_bridge::{HostChannel, InstallOutcome, KaringBridge, ProviderId};
#[cfg(feature = "portal")]
pub use karing_portal::{AppState, PortalConfig};
