//! 사용자 생성 입력 DTO
//!
//! `createUser` 뮤테이션의 인자이자 저장소 서비스의 생성 요청입니다.
//! 사용자 문서가 만들어지면 버려지는 일시적인 값 객체입니다.
use async_graphql::InputObject;
use validator::Validate;

/// 새 사용자 생성을 위한 입력
///
/// GraphQL 계층에서는 네 필드 모두 `String!`로 선언되어 누락 시 리졸버 호출 전에 거부됩니다.
/// 서비스 계층에서는 빈 문자열을 누락으로 보고 `validator`로 다시 검증합니다.
#[derive(Debug, Clone, PartialEq, Validate, InputObject)]
pub struct CreateUserInput {
    /// 이름
    #[validate(length(min = 1, message = "이름은 필수입니다"))]
    pub name: String,

    /// 이메일 (형식 검증 없음)
    #[validate(length(min = 1, message = "이메일은 필수입니다"))]
    pub email: String,

    /// 전화번호 (형식 검증 없음)
    #[validate(length(min = 1, message = "전화번호는 필수입니다"))]
    pub phone: String,

    /// 성별
    #[validate(length(min = 1, message = "성별은 필수입니다"))]
    pub gender: String,
}

impl CreateUserInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            gender: gender.into(),
        }
    }
}
