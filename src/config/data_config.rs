//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 스키마 출력 관련 설정을 관리합니다.

use std::env;
use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// GraphiQL 탐색기 페이지를 노출할지 여부
    pub fn exposes_graphiql(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

/// dotenv 프로필 설정
pub struct ProfileConfig;

impl ProfileConfig {
    /// 현재 프로필 (`PROFILE`, 설정되지 않으면 `None`)
    pub fn current() -> Option<String> {
        env::var("PROFILE").ok()
    }

    /// 프로필에 해당하는 dotenv 파일 이름
    ///
    /// - `dev` → `.env.dev`
    /// - `prod` → `.env.prod`
    /// - 그 밖의 값 또는 미설정 → `.env`
    pub fn env_file(profile: Option<&str>) -> &'static str {
        match profile {
            Some("dev") => ".env.dev",
            Some("prod") => ".env.prod",
            _ => ".env",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_or_default("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수 (`SERVER_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        parse_or_default("SERVER_WORKERS", 4)
    }
}

/// 사용자 문서를 보관할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션
    Mongo,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 소실)
    Memory,
}

impl StoreBackend {
    /// 알 수 없는 값은 `Mongo`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }

    /// 헬스체크 응답에 표시할 이름
    pub fn label(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "MongoDB",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "chatbot-widget-demo")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "chatbot-widget-demo".to_string())
    }

    /// `STORE_BACKEND` (기본값: mongo)
    pub fn backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("STORE_BACKEND").unwrap_or_default())
    }
}

/// GraphQL 스키마 출력 설정
pub struct SchemaConfig;

impl SchemaConfig {
    /// 시작 시 SDL을 기록할 파일 경로 (`SCHEMA_FILE`, 기본값: "schema.gql")
    pub fn schema_file() -> String {
        env::var("SCHEMA_FILE").unwrap_or_else(|_| "schema.gql".to_string())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: &'static str =
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

    /// 허용할 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string()),
        )
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 숫자형 환경 변수를 읽고, 파싱 실패 시 에러를 기록하고 기본값을 사용합니다.
fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_graphiql_hidden_in_production() {
        assert!(Environment::Development.exposes_graphiql());
        assert!(Environment::Staging.exposes_graphiql());
        assert!(!Environment::Production.exposes_graphiql());
    }

    #[test]
    fn test_profile_env_file() {
        assert_eq!(ProfileConfig::env_file(Some("dev")), ".env.dev");
        assert_eq!(ProfileConfig::env_file(Some("prod")), ".env.prod");
        assert_eq!(ProfileConfig::env_file(Some("staging")), ".env");
        assert_eq!(ProfileConfig::env_file(None), ".env");
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("MEMORY"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_str(""), StoreBackend::Mongo);
    }

    #[test]
    fn test_cors_origins_parsing() {
        let origins = CorsConfig::parse_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "chatbot-widget-demo");
        }

        if env::var("SCHEMA_FILE").is_err() {
            assert_eq!(SchemaConfig::schema_file(), "schema.gql");
        }
    }
}
