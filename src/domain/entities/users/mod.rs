//! Users Entity Module
//!
//! 사용자 도메인의 저장소 측 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::UserDocument;
//!
//! let user = UserDocument::new(
//!     "Ann".to_string(),
//!     "ann@x.com".to_string(),
//!     "555-0100".to_string(),
//!     "f".to_string(),
//! );
//! assert!(user.id.is_none());
//! ```

pub mod user;

pub use user::UserDocument;
