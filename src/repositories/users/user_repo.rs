//! # 사용자 리포지토리 구현
//!
//! 사용자 문서의 데이터 액세스 계층입니다.
//! [`UserRepository`] trait이 저장소 경계를 정의하고,
//! [`MongoUserRepository`]가 MongoDB `users` 컬렉션으로 이를 구현합니다.
//!
//! ## 특징
//!
//! - **식별자 생성 위임**: `_id`는 MongoDB 드라이버가 생성하는 ObjectId
//! - **캐싱 없음**: 모든 호출이 저장소 왕복 한 번으로 끝남
//! - **보조 인덱스 없음**: `_id` 기본 인덱스만 사용

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::error;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::users::user::UserDocument;
use crate::errors::AppError;

/// 사용자 문서를 보관하는 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 경계
///
/// 서비스 계층은 이 trait에만 의존하며, 실제 저장소는 프로세스 시작 시 주입됩니다.
///
/// ## 에러 처리
///
/// - `StoreUnavailable`: 저장소에 도달할 수 없음
/// - `DatabaseError`: 그 밖의 저장소 오류
///
/// 존재하지 않는 ID는 에러가 아니라 `Ok(None)`입니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장된 모든 사용자 문서를 저장소 순서대로 반환합니다.
    async fn find_all(&self) -> Result<Vec<UserDocument>, AppError>;

    /// ID(ObjectId 16진수 문자열)로 사용자 문서를 조회합니다.
    ///
    /// 형식이 잘못된 ID는 어떤 문서와도 일치할 수 없으므로 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<UserDocument>, AppError>;

    /// 새 사용자 문서를 저장하고, 할당된 ID를 포함한 문서를 반환합니다.
    async fn insert(&self, user: UserDocument) -> Result<UserDocument, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::connect("mongodb://localhost:27017", "chatbot-widget-demo").await?;
/// let repo = MongoUserRepository::new(&database);
///
/// let created = repo.insert(UserDocument::new(name, email, phone, gender)).await?;
/// let found = repo.find_by_id(&created.id_string().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database
                .get_database()
                .collection::<UserDocument>(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<UserDocument>, AppError> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(log_store_error)?;

        cursor
            .try_collect::<Vec<UserDocument>>()
            .await
            .map_err(log_store_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserDocument>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(log_store_error)
    }

    async fn insert(&self, mut user: UserDocument) -> Result<UserDocument, AppError> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(log_store_error)?;

        let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!(
                "예상하지 못한 _id 타입입니다: {}",
                result.inserted_id
            ))
        })?;
        user.id = Some(object_id);

        Ok(user)
    }
}

fn log_store_error(err: mongodb::error::Error) -> AppError {
    let err = AppError::from(err);
    error!("❌ users 컬렉션 작업 실패: {}", err);
    err
}
