//! 회원(Member) 도메인 모델
//!
//! - `Member`: 클라이언트에게 응답되는 엔티티 (id 는 항상 존재)
//! - `MemberParams`: 생성/수정 요청 본문

use serde::{Deserialize, Serialize};

/// 🧍 회원 엔티티
///
/// `id` 는 서비스가 생성 시점에 부여하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// ✏️ POST / PUT 요청 본문
///
/// 본문에 `id` 가 함께 오더라도 무시됩니다 (알 수 없는 필드는 거부하지 않음).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberParams {
    pub name: String,
    pub email: String,
}

impl Member {
    // 새 id 와 요청 본문으로 엔티티 생성
    pub(crate) fn new(id: u64, params: MemberParams) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
        }
    }

    // id 는 그대로 두고 name/email 만 교체
    pub(crate) fn apply(&mut self, params: MemberParams) {
        self.name = params.name;
        self.email = params.email;
    }
}
