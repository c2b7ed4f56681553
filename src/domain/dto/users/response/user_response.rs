use async_graphql::{ID, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserDocument;

/// 사용자 응답 DTO
///
/// GraphQL 스키마에는 `User` 타입으로 게시됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "User")]
pub struct UserResponse {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
}

impl From<UserDocument> for UserResponse {
    fn from(user: UserDocument) -> Self {
        let UserDocument {
            id,
            name,
            email,
            phone,
            gender,
        } = user;

        Self {
            id: ID(id.map(|id| id.to_hex()).unwrap_or_default()),
            name,
            email,
            phone,
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_document_copies_fields_verbatim() {
        let oid = ObjectId::new();
        let doc = UserDocument {
            id: Some(oid),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555-0100".to_string(),
            gender: "f".to_string(),
        };

        let response = UserResponse::from(doc);

        assert_eq!(response.id.as_str(), oid.to_hex());
        assert_eq!(response.name, "Ann");
        assert_eq!(response.email, "ann@x.com");
        assert_eq!(response.phone, "555-0100");
        assert_eq!(response.gender, "f");
    }
}
