//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`] - 프로세스 메모리 (로컬 개발, 테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let users = user_repo.find_all().await?;
//! ```

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::{MongoUserRepository, UserRepository, USERS_COLLECTION};
pub use memory_repo::InMemoryUserRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use super::UserRepository;
    use crate::domain::entities::users::user::UserDocument;
    use crate::errors::AppError;

    /// 모든 호출이 저장소 연결 불가로 실패하는 리포지토리
    pub struct UnreachableRepository;

    fn unreachable() -> AppError {
        AppError::StoreUnavailable("connection refused".to_string())
    }

    #[async_trait]
    impl UserRepository for UnreachableRepository {
        async fn find_all(&self) -> Result<Vec<UserDocument>, AppError> {
            Err(unreachable())
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<UserDocument>, AppError> {
            Err(unreachable())
        }

        async fn insert(&self, _user: UserDocument) -> Result<UserDocument, AppError> {
            Err(unreachable())
        }
    }
}
