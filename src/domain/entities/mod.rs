//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 저장소 측 데이터 구조체들을 정의합니다.
//!
//! ## MongoDB 통합
//!
//! - **BSON 직렬화**: `serde`와 `bson`을 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **보조 인덱스 없음**: `_id` 기본 인덱스만 사용
//!
//! ## 저장 레이아웃
//!
//! ```text
//! users
//! └── { _id: ObjectId, name: String, email: String, phone: String, gender: String }
//! ```
//!
//! API에 노출되는 형태는 `dto` 모듈이 별도로 정의합니다.
//! 엔티티에는 GraphQL 어노테이션을 두지 않습니다.

pub mod users;
