//! 사용자 프로필 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 GraphQL 스키마를 조립합니다.
//! 저장소 연결을 설정한 뒤 사용자 프로필 GraphQL API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use user_profile_service::config::{
    CorsConfig, DatabaseConfig, Environment, ProfileConfig, SchemaConfig, ServerConfig,
    StoreBackend,
};
use user_profile_service::db::Database;
use user_profile_service::errors::AppError;
use user_profile_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use user_profile_service::resolvers::{build_schema, write_sdl, AppSchema};
use user_profile_service::routes::configure_all_routes;
use user_profile_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 프로필 서비스 시작중...");

    let environment = Environment::current();
    let backend = DatabaseConfig::backend();
    info!("Current environment: {:?}", environment);

    // 저장소 초기화
    let user_repo = initialize_user_repository(backend)
        .await
        .map_err(|e| {
            error!("❌ 저장소 초기화 실패: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    // 서비스 및 스키마 조립
    let user_service = Arc::new(UserService::new(user_repo));
    let schema = build_schema(user_service);

    let schema_file = SchemaConfig::schema_file();
    if let Err(e) = write_sdl(&schema, &schema_file) {
        warn!("⚠️ GraphQL 스키마 파일 기록 실패 ({}): {}", schema_file, e);
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(schema, environment, backend).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    schema: AppSchema,
    environment: Environment,
    backend: StoreBackend,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 GraphQL: http://{}/graphql", bind_address);
    if environment.exposes_graphiql() {
        info!("🧭 GraphiQL: http://{}/graphql (GET)", bind_address);
    }

    let schema = web::Data::new(schema);
    let environment = web::Data::new(environment);
    let backend = web::Data::new(backend);
    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            .app_data(schema.clone())
            .app_data(environment.clone())
            .app_data(backend.clone())

            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = ProfileConfig::current();
    let env_file = ProfileConfig::env_file(profile.as_deref());

    info!("Current profile: {}", profile.as_deref().unwrap_or("default"));

    match dotenv::from_filename(env_file) {
        Ok(_) => info!("{} 파일 로드 됨", env_file),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_profile_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소 종류에 맞는 사용자 리포지토리를 생성합니다
///
/// MongoDB 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_user_repository(
    backend: StoreBackend,
) -> Result<Arc<dyn UserRepository>, AppError> {
    match backend {
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(
                &DatabaseConfig::uri(),
                &DatabaseConfig::database_name(),
            )
            .await?;

            info!("✅ MongoDB 연결 성공");
            Ok(Arc::new(MongoUserRepository::new(&database)))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
