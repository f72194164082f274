//! # karing-bridge
//!
//! Typed client for the Karing webview host bridge.
//!
//! The Karing app injects a call entry point into pages it embeds; a page
//! invokes named native handlers through it and gets a reply back. This
//! crate models that contract for Rust callers:
//!
//! - [`HostChannel`] is the capability seam: the injected entry point as a
//!   trait with one asynchronous call method, substitutable with a test
//!   double.
//! - [`KaringBridge`] provides the generic call primitive and the
//!   convenience operations: version probe, provider preparation,
//!   configuration install, provider info, window close.
//! - [`InstallOutcome`] translates the host's empty-string success
//!   convention into a typed result at the boundary.
//! - [`flow::run_auto_import`] is the connect page's load-time sequence as
//!   a testable flow.
//! - [`fetch::get_json`] and [`TokenStore`] cover the authorized,
//!   best-effort panel fetch the page script performs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use karing_bridge::{KaringBridge, ProviderId};
//!
//! # async fn demo(channel: impl karing_bridge::HostChannel) -> karing_bridge::Result<()> {
//! let bridge = KaringBridge::new(channel);
//!
//! if bridge.is_available() {
//!     bridge.prepare(42).await?;
//!     let outcome = bridge
//!         .install_config(ProviderId::Unset, "alice", "https://sub/abc", "MyApp")
//!         .await?;
//!     assert!(outcome.is_installed());
//! }
//! # Ok(())
//! # }
//! ```

mod bridge;
mod error;
pub mod fetch;
pub mod flow;
mod host;
mod notice;
mod provider;
mod token;

pub use bridge::{ErrorObserver, KaringBridge};
pub use error::{Error, Result};
pub use fetch::FetchOptions;
pub use flow::{ImportReport, ImportRequest};
pub use host::{handlers, DetachedChannel, HostCallError, HostChannel, HostValue};
pub use notice::{Notice, Notifier};
pub use provider::{InstallOutcome, ProviderId};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, DEFAULT_TOKEN_KEY};
