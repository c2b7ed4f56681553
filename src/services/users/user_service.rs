//! # 사용자 저장소 서비스 구현
//!
//! 사용자 엔티티 연산(전체 조회, ID 조회, 생성)을 리포지토리 호출로 변환합니다.
//! 식별자 조회와 필수 필드 검증 외의 비즈니스 로직은 없습니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 UserService                 │
//! │  find_many ─┐                               │
//! │  find_by_id ─┼─▶ UserDocument ▶ UserResponse │
//! │  create_user ┘   (From 변환)                 │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │         Arc<dyn UserRepository>             │
//! │   MongoUserRepository | InMemoryUserRepository │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 전파
//!
//! 모든 실패는 이 계층에서 발생하거나 리포지토리에서 올라오며,
//! 변환 없이 리졸버로 전달됩니다.

use std::sync::Arc;

use log::{debug, info};
use validator::Validate;

use crate::{
    domain::{
        dto::users::{request::CreateUserInput, response::UserResponse},
        entities::users::user::UserDocument,
    },
    errors::AppError,
    repositories::users::UserRepository,
};

/// 사용자 저장소 서비스
///
/// 프로세스 시작 시 리포지토리 핸들을 주입받아 한 번 생성되고,
/// `Arc`로 리졸버들과 공유됩니다. 요청 간 상태는 저장하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
///
/// let created = user_service
///     .create_user(CreateUserInput::new("Ann", "ann@x.com", "555-0100", "f"))
///     .await?;
/// let found = user_service.find_by_id(&created.id).await?;
/// assert_eq!(created, found);
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 저장된 모든 사용자 조회
    ///
    /// 저장소가 정한 순서대로 반환하며 호출 간 순서는 보장하지 않습니다.
    /// 저장소가 비어 있으면 빈 목록입니다.
    pub async fn find_many(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 일치하는 사용자
    /// * `Err(AppError::NotFound)` - 일치하는 사용자가 없음 (형식이 잘못된 ID 포함)
    /// * `Err(AppError::StoreUnavailable)` - 저장소에 도달할 수 없음
    pub async fn find_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 네 속성을 검증한 뒤 문서를 저장하고, 저장소가 할당한 ID를 포함해 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 (새 ID 포함)
    /// * `Err(AppError::ValidationError)` - 필수 속성 누락, 저장은 시도하지 않음
    /// * `Err(AppError::StoreUnavailable)` - 저장소에 도달할 수 없음
    pub async fn create_user(&self, input: CreateUserInput) -> Result<UserResponse, AppError> {
        input.validate()?;

        let created = self.user_repo
            .insert(UserDocument::from(input))
            .await?;

        info!("👤 사용자 생성 완료: {}", created.id_string().unwrap_or_default());

        Ok(UserResponse::from(created))
    }
}
