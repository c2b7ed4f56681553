//! 사용자 서비스 모듈
//!
//! 사용자 문서의 조회와 생성을 담당하는 [`UserService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let users = user_service.find_many().await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
