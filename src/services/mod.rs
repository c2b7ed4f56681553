//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 리포지토리를 주입받아 명시적으로 생성됩니다.

pub mod users;
