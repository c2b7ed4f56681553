//! # GraphQL HTTP Handlers
//!
//! GraphQL 스키마를 HTTP에 연결하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/graphql` | GraphQL 요청 실행 |
//! | `GET` | `/graphql` | GraphiQL 탐색기 (프로덕션 제외) |
//!
//! ## 저장소 장애 처리
//!
//! 리졸버에서 올라온 에러 중 `STORE_UNAVAILABLE` 코드가 있으면 GraphQL 응답 본문 대신
//! `503 Service Unavailable`로 응답합니다. 그 밖의 에러(`NOT_FOUND`, `VALIDATION_ERROR`)는
//! `200 OK`와 함께 GraphQL `errors` 배열로 전달됩니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/graphql \
//!   -H "Content-Type: application/json" \
//!   -d '{"query":"mutation { createUser(input: {name: \"Ann\", email: \"ann@x.com\", phone: \"555-0100\", gender: \"f\"}) { id name } }"}'
//! ```

use actix_web::{get, post, web, Either, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql::{Response, Value};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use log::error;
use serde_json::json;

use crate::config::Environment;
use crate::errors::{AppError, STORE_UNAVAILABLE_CODE};
use crate::resolvers::AppSchema;

/// GraphQL 요청 실행 핸들러
///
/// 503 응답 본문은 `AppError`의 HTTP 렌더링과 같은 `{"error": ...}` 형태이며,
/// 리졸버가 남긴 에러 메시지를 그대로 담습니다.
#[post("")]
pub async fn graphql(
    schema: web::Data<AppSchema>,
    request: GraphQLRequest,
) -> Either<GraphQLResponse, HttpResponse> {
    let response = schema.execute(request.into_inner()).await;

    if let Some(message) = store_unavailable(&response) {
        error!("❌ 저장소 연결 불가로 요청 실패: {}", message);
        return Either::Right(
            HttpResponse::ServiceUnavailable().json(json!({ "error": message })),
        );
    }

    Either::Left(response.into())
}

/// GraphiQL 탐색기 페이지
#[get("")]
pub async fn graphiql(environment: web::Data<Environment>) -> Result<HttpResponse, AppError> {
    if !environment.exposes_graphiql() {
        return Err(AppError::NotFound("GraphiQL은 이 환경에서 제공되지 않습니다".to_string()));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish()))
}

/// 응답 에러 중 저장소 연결 불가 에러의 메시지를 찾습니다.
fn store_unavailable(response: &Response) -> Option<String> {
    let code = Value::from(STORE_UNAVAILABLE_CODE);

    response
        .errors
        .iter()
        .find(|err| {
            err.extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .is_some_and(|value| *value == code)
        })
        .map(|err| err.message.clone())
}
