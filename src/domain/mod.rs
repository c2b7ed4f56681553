//! # Domain Layer Module
//!
//! 사용자 엔티티의 형태를 선언하는 도메인 계층입니다.
//! 동작은 없고 구조 선언만 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소 측 문서 (UserDocument)
//! └── dto       - API 측 타입 (UserResponse, CreateUserInput, FindUserInput)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 필수 필드 계약
//!
//! `name`, `email`, `phone`, `gender`는 모든 입력과 저장된 모든 문서에 존재해야 합니다.
//! 누락은 저장소 실패가 아니라 입력 검증 실패입니다.

pub mod entities;
pub mod dto;
