//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - /graphql 엔드포인트        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Resolvers - GraphQL 연산 바인딩                ← API Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 식별자 조회                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 스키마를 `web::Data`로 받아 실행만 하며,
//! 저장소 연결 불가 에러를 HTTP 503으로 끌어올리는 것 외의 처리는 없습니다.

pub mod graphql;
