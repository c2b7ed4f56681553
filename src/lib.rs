//! 사용자 프로필 서비스
//!
//! 단일 엔티티(사용자 프로필)를 GraphQL 쿼리/뮤테이션 API로 노출하고
//! MongoDB 문서 저장소에 보관하는 서비스입니다.
//!
//! # Features
//!
//! - **GraphQL API**: `users`, `user`, `createUser` 세 개의 연산
//! - **MongoDB**: `users` 컬렉션에 사용자 문서 영구 저장
//! - **메모리 저장소**: `STORE_BACKEND=memory`로 MongoDB 없이 실행
//! - **명시적 의존성 주입**: 시작 시 한 번 조립, 전역 레지스트리 없음
//! - **SDL 출력**: 시작 시 GraphQL 스키마를 파일로 기록
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /graphql, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Resolvers    │ ← users / user / createUser
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 필수 필드 검증, 식별자 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_profile_service::repositories::users::InMemoryUserRepository;
//! use user_profile_service::resolvers::build_schema;
//! use user_profile_service::services::users::UserService;
//!
//! let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! let schema = build_schema(user_service);
//! let response = schema.execute("{ users { id name } }").await;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod resolvers;
pub mod routes;
pub mod handlers;
pub mod errors;
