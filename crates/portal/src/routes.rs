//! The axum surface of the portal.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::PortalConfig;
use crate::session::SessionProvider;
use crate::subscribe::SubscriptionLinker;
use crate::{cookie, template};

/// Shared state behind every portal route.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub sessions: Arc<dyn SessionProvider>,
    pub links: Arc<dyn SubscriptionLinker>,
}

impl AppState {
    pub fn new(
        config: PortalConfig,
        sessions: Arc<dyn SessionProvider>,
        links: Arc<dyn SubscriptionLinker>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sessions,
            links,
        }
    }
}

/// Build the portal router. The connect route lands at the configured
/// path; the bridge script is served next to it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(&state.config.connect_path, get(connect))
        .route(&state.config.script_url, get(bridge_script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The connect page. Unauthenticated visitors are parked at login with a
/// return-path cookie so the panel can bring them back here afterwards.
async fn connect(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let config = &state.config;

    let Some(user) = state.sessions.current_user(&headers).await else {
        let cookie = cookie::build(
            &config.redirect_cookie,
            &config.connect_path,
            config.redirect_ttl_hours,
        );
        return (
            StatusCode::FOUND,
            [
                (SET_COOKIE, cookie),
                (LOCATION, config.login_path.clone()),
            ],
        )
            .into_response();
    };

    let link = format!(
        "{}{}",
        state.links.universal_link(&user),
        config.link_suffix
    );
    info!(user = %user.display_name, "rendering connect page");

    Html(template::render_connect_page(
        &user.display_name,
        &link,
        &config.app_name,
        &config.script_url,
    ))
    .into_response()
}

async fn bridge_script() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        template::KARING_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PanelUser;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct NoSession;

    #[async_trait]
    impl SessionProvider for NoSession {
        async fn current_user(&self, _headers: &HeaderMap) -> Option<PanelUser> {
            None
        }
    }

    struct FixedSession(&'static str);

    #[async_trait]
    impl SessionProvider for FixedSession {
        async fn current_user(&self, _headers: &HeaderMap) -> Option<PanelUser> {
            Some(PanelUser {
                display_name: self.0.to_string(),
            })
        }
    }

    struct FixedLinker(&'static str);

    impl SubscriptionLinker for FixedLinker {
        fn universal_link(&self, _user: &PanelUser) -> String {
            self.0.to_string()
        }
    }

    fn test_router(sessions: Arc<dyn SessionProvider>) -> Router {
        let config = PortalConfig::default().with_app_name("MyApp");
        router(AppState::new(
            config,
            sessions,
            Arc::new(FixedLinker("https://panel.example/sub/abc")),
        ))
    }

    #[tokio::test]
    async fn test_connect_redirects_without_a_session() {
        let app = test_router(Arc::new(NoSession));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/karing/connect")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/auth/login");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("redir=/karing/connect; expires="));
        assert!(cookie.ends_with("path=/"));
    }

    #[tokio::test]
    async fn test_connect_renders_for_a_logged_in_user() {
        let app = test_router(Arc::new(FixedSession("alice")));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/karing/connect")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("alice signed in"));
        assert!(page.contains("https://panel.example/sub/abc/singbox"));
        assert!(page.contains("<title>MyApp</title>"));
    }

    #[tokio::test]
    async fn test_bridge_script_is_served() {
        let app = test_router(Arc::new(NoSession));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/karing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("const _karing"));
    }
}
