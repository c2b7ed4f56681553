//! 사용자 요청 DTO 모듈
//!
//! GraphQL 입력 객체로 노출되는 요청 값 객체들입니다.
//!
//! - [`CreateUserInput`] - `createUser` 뮤테이션 입력
//! - [`FindUserInput`] - `user` 쿼리 입력

pub mod create_user_input;
pub mod find_user_input;

pub use create_user_input::CreateUserInput;
pub use find_user_input::FindUserInput;
