//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 프로세스 시작 시 한 번 생성되어 `Arc<dyn UserRepository>`로
//! 서비스에 주입됩니다. 전역 레지스트리는 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::MongoUserRepository;
//!
//! let user_repo = Arc::new(MongoUserRepository::new(&database));
//! let user_service = UserService::new(user_repo);
//! ```

pub mod users;
