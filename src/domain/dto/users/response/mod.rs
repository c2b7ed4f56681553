//! 사용자 응답 DTO 모듈
//!
//! GraphQL 출력 객체로 노출되는 응답 타입입니다.
//! 저장소 문서에서 `From` 변환으로만 만들어집니다.

pub mod user_response;

pub use user_response::UserResponse;
