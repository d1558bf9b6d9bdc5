//! 🚨 애플리케이션 에러 타입과 HTTP 응답 변환
//!
//! 에러 본문은 항상 `{"message": "..."}` 형태의 JSON 입니다.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::service::MemberServiceError;

// ✨ 앱 전용 에러 타입
#[derive(Debug, Error)]
pub enum AppError {
    // JSON 본문 파싱 실패 (문법 오류, 필드 누락, Content-Type 누락 등)
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    // 경로 파라미터 파싱 실패 (예: /members/abc)
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    // 서비스(협력자)에서 올라온 에러
    #[error(transparent)]
    Service(#[from] MemberServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonRejection(rejection) => rejection.status(),
            AppError::PathRejection(_) | AppError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            AppError::Service(MemberServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Service(MemberServiceError::Unavailable) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// ✨ 에러를 HTTP 응답으로 변환하는 로직
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::JsonRejection(rejection) => rejection.body_text(),
            AppError::PathRejection(rejection) => rejection.body_text(),
            AppError::QueryRejection(rejection) => rejection.body_text(),
            AppError::Service(err @ MemberServiceError::NotFound(_)) => err.to_string(),
            AppError::Service(err @ MemberServiceError::Unavailable) => {
                // 서버 내부 오류 (클라이언트에 자세한 내용 노출 금지)
                tracing::error!(%err, "member service failure");
                "Something went wrong".to_owned()
            }
        };

        if status.is_client_error() {
            tracing::debug!(%status, %message, "request rejected");
        }

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}
