//! 📚 회원 리소스 라우터
//!
//! - `POST   /members`: 회원 생성 (201)
//! - `GET    /members`: 회원 목록 (offset, limit 선택)
//! - `GET    /members/{id}`: 회원 조회
//! - `PUT    /members/{id}`: 회원 수정
//! - `DELETE /members/{id}`: 회원 삭제 (204)
//!
//! 핸들러는 요청을 파싱한 뒤 서비스에 그대로 넘기고 결과만 직렬화합니다.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    member::{Member, MemberParams},
    service::MemberService,
};

/// 📦 라우터 상태: trait object 로 주입된 서비스
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberService>,
}

/// 회원 라우트 구성. 호출하는 쪽에서 `/api` 아래로 nest 합니다.
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members_index).post(members_create))
        .route(
            "/members/{id}",
            get(members_show).put(members_update).delete(members_delete),
        )
        // 위에서 등록한 경로에만 적용되므로 반드시 마지막에 호출
        .method_not_allowed_fallback(handler_405)
}

// 🚫 경로는 있지만 메서드가 없는 경우 (예: PATCH /members/1)
async fn handler_405(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": format!("method {method} not allowed on {}", uri.path()) })),
    )
}

// The query parameters for members index
#[derive(Debug, Deserialize, Default)]
pub struct Pagination {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

// 1️⃣ POST /members
async fn members_create(
    State(state): State<AppState>,
    AppJson(params): AppJson<MemberParams>,
) -> Result<(StatusCode, AppJson<Member>), AppError> {
    let member = state.members.create(params)?;
    Ok((StatusCode::CREATED, AppJson(member)))
}

// 2️⃣ GET /members
async fn members_index(
    State(state): State<AppState>,
    AppQuery(pagination): AppQuery<Pagination>,
) -> Result<AppJson<Vec<Member>>, AppError> {
    let members = state
        .members
        .list()?
        .into_iter()
        .skip(pagination.offset.unwrap_or(0))
        .take(pagination.limit.unwrap_or(usize::MAX))
        .collect();

    Ok(AppJson(members))
}

// 3️⃣ GET /members/{id}
async fn members_show(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<AppJson<Member>, AppError> {
    Ok(AppJson(state.members.get(id)?))
}

// 4️⃣ PUT /members/{id}
async fn members_update(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(params): AppJson<MemberParams>,
) -> Result<AppJson<Member>, AppError> {
    Ok(AppJson(state.members.update(id, params)?))
}

// 5️⃣ DELETE /members/{id}
async fn members_delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<StatusCode, AppError> {
    state.members.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
