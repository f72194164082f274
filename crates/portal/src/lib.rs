//! Server-side portal that hands a panel subscription to the Karing app.
//!
//! The portal mounts a single connect page. A logged-in visitor gets HTML
//! that loads the browser-side bridge and asks the app to import their
//! subscription; anyone else is parked at the panel's login page with a
//! return-path cookie.
//!
//! ```no_run
//! use std::sync::Arc;
//! use karing_portal::{AppState, PortalConfig, router};
//! # use karing_portal::{PanelUser, SessionProvider, SubscriptionLinker};
//! # use axum::http::HeaderMap;
//! # struct Sessions;
//! # #[async_trait::async_trait]
//! # impl SessionProvider for Sessions {
//! #     async fn current_user(&self, _h: &HeaderMap) -> Option<PanelUser> { None }
//! # }
//! # struct Links;
//! # impl SubscriptionLinker for Links {
//! #     fn universal_link(&self, _u: &PanelUser) -> String { String::new() }
//! # }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PortalConfig::from_env()?;
//! let app = router(AppState::new(config, Arc::new(Sessions), Arc::new(Links)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cookie;
mod config;
mod error;
mod routes;
mod session;
mod subscribe;
mod template;

pub use config::PortalConfig;
pub use error::{Error, Result};
pub use routes::{router, AppState};
pub use session::{PanelUser, SessionProvider};
pub use subscribe::SubscriptionLinker;
pub use template::{render_connect_page, KARING_SCRIPT};
