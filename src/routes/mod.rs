//! API 라우트 설정 모듈
//!
//! GraphQL 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `POST /graphql` - GraphQL 요청 실행
//! - `GET /graphql` - GraphiQL 탐색기 (프로덕션 제외)
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(schema))
//!     .app_data(web::Data::new(Environment::current()))
//!     .app_data(web::Data::new(DatabaseConfig::backend()))
//!     .configure(configure_all_routes);
//! ```

use crate::config::StoreBackend;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `AppSchema`, `Environment`, `StoreBackend`가 `app_data`로 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_graphql_routes(cfg);
}

/// GraphQL 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/graphql \
///   -H "Content-Type: application/json" \
///   -d '{"query":"{ users { id name email phone gender } }"}'
/// ```
fn configure_graphql_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/graphql")
            .service(handlers::graphql::graphql)
            .service(handlers::graphql::graphiql)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 프로세스 생존 여부만 알려주며 저장소 왕복은 하지 않습니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_profile_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "store": "MongoDB"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(backend: web::Data<StoreBackend>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_profile_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": backend.label()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check_reports_store() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StoreBackend::Memory))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
