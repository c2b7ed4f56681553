use async_graphql::{ID, InputObject};
use serde::{Deserialize, Serialize};

/// 단건 사용자 조회 입력 (`user` 쿼리의 인자)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, InputObject)]
pub struct FindUserInput {
    /// 조회할 사용자 ID (ObjectId 16진수 문자열)
    pub id: ID,
}

impl FindUserInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: ID(id.into()) }
    }
}
