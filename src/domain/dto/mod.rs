//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 GraphQL 타입으로 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 내부 표현 vs 외부 표현
//! - **Entity**: MongoDB 문서 구조 (`_id: ObjectId`)
//! - **DTO**: GraphQL 타입 구조 (`id: ID!`)
//! - 두 구조는 `From` 구현 하나로 연결됩니다
//!
//! ### 2. 유효성 검증 내장
//! - **스키마 검증**: GraphQL non-null 선언으로 누락 필드 거부
//! - **런타임 검증**: `validator` crate로 빈 값 거부

pub mod users;
