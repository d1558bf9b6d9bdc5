//! 🧩 커스텀 추출기
//!
//! axum 기본 추출기(`Json`, `Path`, `Query`)를 감싸서
//! 실패 시 axum 의 기본 리젝션 대신 [`AppError`] 로 변환합니다.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

// ✨ JSON 본문 추출 + 응답 래퍼
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

// ✨ 경로 파라미터 추출 (/members/{id})
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

// ✨ 쿼리 스트링 추출 (?offset=..&limit=..)
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
