//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 프로필 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고, 두 가지 출구로 렌더링합니다.
//!
//! - `actix_web::ResponseError`: HTTP 응답으로 직접 변환 (전송 계층 실패)
//! - `async_graphql::ErrorExtensions`: GraphQL `errors` 배열의 항목으로 변환
//!   (`extensions.code`에 에러 분류 코드 포함)
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | GraphQL code |
//! |----------|-------------|--------------|
//! | `ValidationError` | 400 Bad Request | `VALIDATION_ERROR` |
//! | `NotFound` | 404 Not Found | `NOT_FOUND` |
//! | `StoreUnavailable` | 503 Service Unavailable | `STORE_UNAVAILABLE` |
//! | `DatabaseError` | 500 Internal Server Error | `DATABASE_ERROR` |
//! | `InternalError` | 500 Internal Server Error | `INTERNAL_ERROR` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! let user = user_repo.find_by_id(id).await?
//!     .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))?;
//! ```

use async_graphql::ErrorExtensions;
use mongodb::error::ErrorKind;
use thiserror::Error;
use validator::ValidationErrors;

/// 저장소 연결 불가를 나타내는 GraphQL 에러 코드
pub const STORE_UNAVAILABLE_CODE: &str = "STORE_UNAVAILABLE";

/// 애플리케이션 전역 에러 타입
///
/// 모든 실패는 저장소 서비스에서 발생하여 리졸버를 그대로 통과합니다.
/// 중간 계층에서의 복구나 변환은 없습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 연결 불가 에러 (503 Service Unavailable)
    ///
    /// 서버 선택 실패, 네트워크 I/O 오류 등 저장소에 도달할 수 없는 경우입니다.
    /// 재시도나 대체 경로 없이 요청 전체가 실패합니다.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 그 밖의 데이터베이스 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// GraphQL `extensions.code`에 기록되는 분류 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StoreUnavailable(_) => STORE_UNAVAILABLE_CODE,
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl ErrorExtensions for AppError {
    /// GraphQL 에러로 변환합니다.
    ///
    /// 메시지는 `Display` 출력 그대로, 분류는 `extensions.code`에 담깁니다.
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<mongodb::error::Error> for AppError {
    /// MongoDB 드라이버 에러를 분류합니다.
    ///
    /// 저장소에 도달하지 못한 경우만 `StoreUnavailable`,
    /// 나머지는 `DatabaseError`입니다.
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => AppError::StoreUnavailable(err.to_string()),
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    /// `validator` 검증 결과를 필드별 메시지로 정리합니다.
    ///
    /// 필드 이름 순으로 정렬되어 `email: 이메일은 필수입니다; name: ...` 형태가 됩니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{}: {}", field, msg),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join("; "))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use async_graphql::Value;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_unavailable_error_response() {
        let error = AppError::StoreUnavailable("server selection timeout".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_mongodb_io_error_is_store_unavailable() {
        let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = AppError::from(mongodb::error::Error::from(io_error));

        match error {
            AppError::StoreUnavailable(msg) => assert!(msg.contains("refused")),
            other => panic!("Expected StoreUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_mongodb_decode_error_is_database_error() {
        let decode_error =
            mongodb::bson::from_document::<crate::domain::entities::users::UserDocument>(
                mongodb::bson::doc! { "name": 1 },
            )
            .unwrap_err();
        let error = AppError::from(mongodb::error::Error::from(decode_error));

        assert!(matches!(error, AppError::DatabaseError(_)));
        assert_eq!(error.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_graphql_extension_code() {
        let error = AppError::NotFound("User not found".to_string()).extend();

        assert_eq!(error.message, "Not found: User not found");
        let code = error.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from("NOT_FOUND")));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
