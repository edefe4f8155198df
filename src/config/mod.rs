//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 상태 없는 설정 구조체의 연관 함수로 노출합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 캐시, 즐겨찾기 동기화 관련 설정
//! - [`auth_config`] - 베어러 토큰(JWT) 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"   # development, test, staging, production
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="morocco_travel"
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="600"
//!
//! # 즐겨찾기
//! export FAVORITES_BACKEND="mongodb"          # mongodb | memory
//! export FAVORITES_WRITE_TIMEOUT_MS="10000"
//! export FAVORITES_SESSION_IDLE_SECS="1800"      # 유휴 세션 만료
//!
//! # 인증
//! export JWT_SECRET="shared-secret-with-identity-provider"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://visit-morocco.example"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, FavoritesConfig};
//!
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let timeout = FavoritesConfig::write_timeout();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
