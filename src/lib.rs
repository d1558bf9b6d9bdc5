//! Provides a RESTful web server managing Members.
//!
//! API will be (base path `/api`):
//!
//! - `POST /api/members`: create a new Member.
//! - `GET /api/members`: return a JSON list of Members.
//! - `GET /api/members/{id}`: return a specific Member.
//! - `PUT /api/members/{id}`: replace name/email of a specific Member.
//! - `DELETE /api/members/{id}`: delete a specific Member.
//!
//! 서비스는 라우터 생성 시점에 `Arc<dyn MemberService>` 로 주입합니다.

pub mod config;
pub mod error;
pub mod extract;
pub mod member;
pub mod routes;
pub mod service;


use std::sync::Arc;

use axum::{
    error_handling::HandleErrorLayer,
    extract::{MatchedPath, Request},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::json;
use tower::{BoxError, ServiceBuilder};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use member::{Member, MemberParams};
pub use routes::AppState;
pub use service::{InMemoryMemberService, MemberService, MemberServiceError};

/// Having a function that produces our app makes it easy to call it from tests
/// without having to create an HTTP server.
pub fn app(members: Arc<dyn MemberService>, config: &Config) -> Router {
    Router::new()
        .nest("/api", routes::member_routes())
        // 정의되지 않은 모든 경로는 JSON 404
        .fallback(handler_404)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|req: &Request| {
                        let method = req.method();
                        let uri = req.uri();
                        let matched_path = req
                            .extensions()
                            .get::<MatchedPath>()
                            .map(|matched| matched.as_str());

                        tracing::debug_span!("request", %method, %uri, matched_path)
                    }),
                )
                // 타임아웃 등 미들웨어 에러도 JSON 으로 응답
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.request_timeout),
        )
        .with_state(AppState { members })
}

/// 🚫 404 fallback 핸들러
async fn handler_404(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("no route for {}", uri.path()) })),
    )
}

/// ⏳ 미들웨어 에러 핸들러
pub(crate) async fn handle_middleware_error(error: BoxError) -> impl IntoResponse {
    if error.is::<tower::timeout::error::Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "message": "request timed out" })),
        );
    }

    tracing::error!(%error, "unhandled middleware error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Something went wrong" })),
    )
}
