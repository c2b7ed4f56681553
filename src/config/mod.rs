//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 스키마 출력, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongo"            # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="chatbot-widget-demo"
//!
//! # GraphQL SDL 출력 경로
//! export SCHEMA_FILE="schema.gql"
//!
//! # dotenv 프로필 (dev → .env.dev, prod → .env.prod, 그 밖의 값 또는 미설정 → .env)
//! export PROFILE="dev"
//!
//! # 환경 설정
//! export ENVIRONMENT="development"        # development, test, staging, production
//! ```
//!
//! 숫자형 값의 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.

pub mod data_config;

pub use data_config::*;
