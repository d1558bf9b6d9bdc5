//! 회원 서비스: 라우터가 의존하는 협력자(collaborator) 인터페이스와
//! 메모리 기반 구현체.
//!
//! 라우터는 `Arc<dyn MemberService>` 로 서비스를 주입받습니다.
//! 실제 저장소(PostgreSQL 등)로 교체할 때는 이 트레잇만 구현하면 됩니다.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
};

use thiserror::Error;

use crate::member::{Member, MemberParams};

/// 🧩 DI 대상이 될 Trait
pub trait MemberService: Send + Sync {
    fn create(&self, params: MemberParams) -> Result<Member, MemberServiceError>;

    /// id 오름차순으로 모든 회원을 반환
    fn list(&self) -> Result<Vec<Member>, MemberServiceError>;

    fn get(&self, id: u64) -> Result<Member, MemberServiceError>;

    fn update(&self, id: u64, params: MemberParams) -> Result<Member, MemberServiceError>;

    fn delete(&self, id: u64) -> Result<(), MemberServiceError>;
}

/// 🚨 서비스 계층 에러
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberServiceError {
    #[error("member {0} not found")]
    NotFound(u64),

    #[error("member store is unavailable")]
    Unavailable,
}

/// 🧠 메모리 기반 서비스 구현
///
/// `Clone` 은 같은 저장소를 공유합니다.
#[derive(Debug, Clone)]
pub struct InMemoryMemberService {
    next_id: Arc<AtomicU64>,
    members: Arc<RwLock<BTreeMap<u64, Member>>>,
}

impl Default for InMemoryMemberService {
    fn default() -> Self {
        Self {
            // id 는 1 부터 시작
            next_id: Arc::new(AtomicU64::new(1)),
            members: Arc::default(),
        }
    }
}

impl InMemoryMemberService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberService for InMemoryMemberService {
    fn create(&self, params: MemberParams) -> Result<Member, MemberServiceError> {
        let mut members = self
            .members
            .write()
            .map_err(|_| MemberServiceError::Unavailable)?;

        // 삭제된 id 는 재사용하지 않음
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let member = Member::new(id, params);
        members.insert(id, member.clone());

        tracing::debug!(id, "member created");
        Ok(member)
    }

    fn list(&self) -> Result<Vec<Member>, MemberServiceError> {
        let members = self
            .members
            .read()
            .map_err(|_| MemberServiceError::Unavailable)?;

        Ok(members.values().cloned().collect())
    }

    fn get(&self, id: u64) -> Result<Member, MemberServiceError> {
        self.members
            .read()
            .map_err(|_| MemberServiceError::Unavailable)?
            .get(&id)
            .cloned()
            .ok_or(MemberServiceError::NotFound(id))
    }

    fn update(&self, id: u64, params: MemberParams) -> Result<Member, MemberServiceError> {
        let mut members = self
            .members
            .write()
            .map_err(|_| MemberServiceError::Unavailable)?;

        let member = members
            .get_mut(&id)
            .ok_or(MemberServiceError::NotFound(id))?;
        member.apply(params);

        tracing::debug!(id, "member updated");
        Ok(member.clone())
    }

    fn delete(&self, id: u64) -> Result<(), MemberServiceError> {
        let removed = self
            .members
            .write()
            .map_err(|_| MemberServiceError::Unavailable)?
            .remove(&id);

        match removed {
            Some(_) => {
                tracing::debug!(id, "member deleted");
                Ok(())
            }
            None => Err(MemberServiceError::NotFound(id)),
        }
    }
}

/// 🧪 서비스 단위 테스트
