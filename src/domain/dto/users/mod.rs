//! # User DTOs
//!
//! 사용자 API 계약을 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user_input.rs   # CreateUserInput (createUser 뮤테이션)
//! │   └── find_user_input.rs     # FindUserInput (user 쿼리)
//! └── response/
//!     └── user_response.rs       # UserResponse (GraphQL User 타입)
//! ```
//!
//! ## GraphQL 스키마
//!
//! ```graphql
//! type User {
//!   id: ID!
//!   name: String!
//!   email: String!
//!   phone: String!
//!   gender: String!
//! }
//!
//! input CreateUserInput {
//!   name: String!
//!   email: String!
//!   phone: String!
//!   gender: String!
//! }
//!
//! input FindUserInput {
//!   id: ID!
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
