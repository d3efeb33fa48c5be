//! Error detail exposure
//!
//! Error responses are rendered without internal details. Outside production this middleware
//! re-renders them with the `details` field taken from [`ErrorDetailsExtension`].

use crate::error::ErrorDetailsExtension;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use meshport_core::Config;

/// Whether error responses may carry internal details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDetailsPolicy {
    pub expose: bool,
}

impl ErrorDetailsPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            expose: !config.is_production(),
        }
    }
}

pub async fn error_details_middleware(
    State(policy): State<ErrorDetailsPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(extension) = response.extensions_mut().remove::<ErrorDetailsExtension>() else {
        return response;
    };
    if !policy.expose {
        return response;
    }

    let mut body = extension.body;
    body.details = Some(extension.details);
    (response.status(), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpAppError;
    use axum::{body::to_bytes, middleware::from_fn_with_state, routing::get, Router};
    use meshport_core::AppError;
    use tower::ServiceExt;

    fn app(expose: bool) -> Router {
        Router::new()
            .route(
                "/fail",
                get(|| async {
                    HttpAppError(AppError::UnsupportedGeometry("no faces".into())).into_response()
                }),
            )
            .layer(from_fn_with_state(
                ErrorDetailsPolicy { expose },
                error_details_middleware,
            ))
    }

    async fn body_json(expose: bool) -> serde_json::Value {
        let request = axum::http::Request::builder()
            .uri("/fail")
            .body(axum::body::Body::empty())
            .expect("request");
        let response = app(expose).oneshot(request).await.expect("response");
        assert_eq!(response.status().as_u16(), 500);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn test_details_exposed_when_allowed() {
        let json = body_json(true).await;
        assert_eq!(json["code"], "UNSUPPORTED_GEOMETRY");
        assert_eq!(json["error"], "no faces");
        assert_eq!(json["details"], "Unsupported geometry: no faces");
    }

    #[tokio::test]
    async fn test_details_hidden_when_not_allowed() {
        let json = body_json(false).await;
        assert_eq!(json["error"], "no faces");
        assert!(json.get("details").is_none());
    }
}
