//! User Document Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서의 저장소 측 표현입니다.
//! API 측 표현은 [`UserResponse`](crate::domain::dto::users::response::UserResponse)이며,
//! 두 표현은 `From<UserDocument>` 변환 하나로만 연결됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::CreateUserInput;

/// 사용자 문서
///
/// `_id`는 저장 시점에 저장소가 할당하며 이후 변경되지 않습니다.
/// 네 개의 속성은 모두 필수이며 저장 전에 서비스 계층에서 검증됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub name: String,
    /// 이메일
    pub email: String,
    /// 전화번호
    pub phone: String,
    /// 성별
    pub gender: String,
}

impl UserDocument {
    /// 아직 저장되지 않은 새 사용자 문서 생성 (ID 없음)
    pub fn new(name: String, email: String, phone: String, gender: String) -> Self {
        Self {
            id: None,
            name,
            email,
            phone,
            gender,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl From<CreateUserInput> for UserDocument {
    fn from(input: CreateUserInput) -> Self {
        let CreateUserInput {
            name,
            email,
            phone,
            gender,
        } = input;

        Self::new(name, email, phone, gender)
    }
}
