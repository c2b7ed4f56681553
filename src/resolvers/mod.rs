//! # GraphQL Resolvers Module
//!
//! 리졸버와 GraphQL 스키마 조립을 담당합니다.
//!
//! 스키마는 프로세스 시작 시 한 번 만들어지며, 게시되는 SDL도 그때 한 번만 생성되어
//! `SCHEMA_FILE` 경로에 기록됩니다. 요청마다 다시 계산하지 않습니다.
//!
//! ```rust,ignore
//! let user_service = Arc::new(UserService::new(user_repo));
//! let schema = build_schema(user_service);
//! write_sdl(&schema, "schema.gql")?;
//! ```

pub mod user_resolver;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use log::info;

use crate::errors::{AppResult, ErrorContext};
use crate::services::users::UserService;

pub use user_resolver::{UserMutation, UserQuery};

/// 애플리케이션 GraphQL 스키마
pub type AppSchema = Schema<UserQuery, UserMutation, EmptySubscription>;

/// 서비스 인스턴스를 리졸버 생성자에 명시적으로 넘겨 스키마를 조립합니다.
pub fn build_schema(user_service: Arc<UserService>) -> AppSchema {
    Schema::build(
        UserQuery::new(user_service.clone()),
        UserMutation::new(user_service),
        EmptySubscription,
    )
    .finish()
}

/// 스키마의 SDL을 파일로 기록합니다.
pub fn write_sdl(schema: &AppSchema, path: &str) -> AppResult<()> {
    std::fs::write(path, schema.sdl())
        .with_context(|| format!("스키마 파일 기록 실패 ({})", path))?;

    info!("📝 GraphQL 스키마 기록: {}", path);
    Ok(())
}
