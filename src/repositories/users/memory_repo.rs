//! 프로세스 메모리 기반 사용자 리포지토리
//!
//! `STORE_BACKEND=memory`로 MongoDB 없이 서비스를 띄울 때와 테스트에서 사용합니다.
//! ID는 MongoDB와 동일하게 `ObjectId::new()`로 생성하므로 형식이 같습니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::UserDocument;
use crate::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 삽입 순서를 유지하는 메모리 저장소
///
/// 락은 단일 연산 동안에만 잡습니다.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<UserDocument>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 문서 수
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.users.read().expect("memory store lock poisoned").len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("메모리 저장소 락이 손상되었습니다".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserDocument>, AppError> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserDocument>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn insert(&self, mut user: UserDocument) -> Result<UserDocument, AppError> {
        user.id = Some(ObjectId::new());

        self.users.write().map_err(poisoned)?.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserDocument {
        UserDocument::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            "555-0100".to_string(),
            "f".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_insert_assigns_fresh_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(ann()).await.unwrap();
        let second = repo.insert(ann()).await.unwrap();

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
        assert_eq!(repo.len(), 2);
    }

    #[actix_web::test]
    async fn test_insert_overrides_caller_supplied_id() {
        let repo = InMemoryUserRepository::new();
        let forced = ObjectId::new();
        let mut user = ann();
        user.id = Some(forced);

        let created = repo.insert(user).await.unwrap();

        assert_ne!(created.id, Some(forced));
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        let mut bob = ann();
        bob.name = "Bob".to_string();
        repo.insert(ann()).await.unwrap();
        repo.insert(bob).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[actix_web::test]
    async fn test_poisoned_lock_is_internal_error() {
        let repo = InMemoryUserRepository::new();
        repo.insert(ann()).await.unwrap();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.users.write().unwrap();
            panic!("writer crashed while holding the lock");
        }));

        assert!(matches!(repo.find_all().await, Err(AppError::InternalError(_))));
        assert!(matches!(repo.insert(ann()).await, Err(AppError::InternalError(_))));
        assert!(matches!(
            repo.find_by_id(&ObjectId::new().to_hex()).await,
            Err(AppError::InternalError(_))
        ));
    }

    #[actix_web::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(ann()).await.unwrap();
        let id = created.id_string().unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(created));
        assert_eq!(repo.find_by_id(&ObjectId::new().to_hex()).await.unwrap(), None);
        assert_eq!(repo.find_by_id("not-an-object-id").await.unwrap(), None);
    }
}
