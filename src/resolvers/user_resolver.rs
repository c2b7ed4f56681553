//! # User Resolvers
//!
//! 외부 호출자의 유일한 진입점입니다. 세 개의 GraphQL 연산을 서비스 호출에 연결합니다.
//!
//! | 연산 | 종류 | 서비스 호출 |
//! |------|------|-------------|
//! | `users` | query | `UserService::find_many` |
//! | `user(input: FindUserInput!)` | query | `UserService::find_by_id` |
//! | `createUser(input: CreateUserInput!)` | mutation | `UserService::create_user` |
//!
//! 인자를 풀어 전달하는 것 외의 변환, 인가, 속도 제한은 없습니다.
//! 서비스 에러는 [`ErrorExtensions`]로 GraphQL 에러가 되며 메시지와 분류 코드가 보존됩니다.

use std::sync::Arc;

use async_graphql::{ErrorExtensions, Object, Result};

use crate::domain::dto::users::{
    request::{CreateUserInput, FindUserInput},
    response::UserResponse,
};
use crate::services::users::UserService;

/// 사용자 조회 리졸버 (Query 루트)
pub struct UserQuery {
    user_service: Arc<UserService>,
}

impl UserQuery {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[Object]
impl UserQuery {
    /// 저장된 모든 사용자
    async fn users(&self) -> Result<Vec<UserResponse>> {
        self.user_service
            .find_many()
            .await
            .map_err(|e| e.extend())
    }

    /// ID로 조회한 사용자. 없으면 `NOT_FOUND` 에러
    async fn user(&self, input: FindUserInput) -> Result<UserResponse> {
        self.user_service
            .find_by_id(&input.id)
            .await
            .map_err(|e| e.extend())
    }
}

/// 사용자 생성 리졸버 (Mutation 루트)
pub struct UserMutation {
    user_service: Arc<UserService>,
}

impl UserMutation {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[Object]
impl UserMutation {
    /// 새 사용자를 만들고 할당된 ID와 함께 반환
    async fn create_user(&self, input: CreateUserInput) -> Result<UserResponse> {
        self.user_service
            .create_user(input)
            .await
            .map_err(|e| e.extend())
    }
}
