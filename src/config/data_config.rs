//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 캐시 TTL, CORS, 즐겨찾기 동기화 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 환경을 결정합니다 (기본값: production)
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 여행지 / 장소 조회 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// 캐시 TTL (초). 0이면 캐시에 쓰지 않습니다.
    pub fn ttl_seconds() -> u64 {
        env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(600)
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string()),
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

/// 즐겨찾기 저장소 백엔드
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesBackend {
    /// `users` 컬렉션 + change stream
    MongoDb,
    /// 프로세스 메모리 (개발용)
    Memory,
}

impl FavoritesBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => FavoritesBackend::Memory,
            _ => FavoritesBackend::MongoDb,
        }
    }
}

/// 즐겨찾기 동기화 설정
pub struct FavoritesConfig;

impl FavoritesConfig {
    pub fn backend() -> FavoritesBackend {
        FavoritesBackend::from_str(
            &env::var("FAVORITES_BACKEND").unwrap_or_else(|_| "mongodb".to_string()),
        )
    }

    /// 원격 쓰기 한 건에 허용하는 최대 시간. 초과하면 쓰기 실패로 보고 롤백합니다.
    pub fn write_timeout() -> Duration {
        let millis = env::var("FAVORITES_WRITE_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|millis| *millis > 0)
            .unwrap_or(10_000);

        Duration::from_millis(millis)
    }

    /// 이 시간 동안 쓰이지 않은 로그인 세션은 닫히고 구독도 끊깁니다.
    pub fn session_idle_ttl() -> Duration {
        let secs = env::var("FAVORITES_SESSION_IDLE_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(1_800);

        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("unknown").is_production());
    }

    #[test]
    fn test_favorites_backend_from_string() {
        assert_eq!(FavoritesBackend::from_str("memory"), FavoritesBackend::Memory);
        assert_eq!(FavoritesBackend::from_str("In-Memory"), FavoritesBackend::Memory);
        assert_eq!(FavoritesBackend::from_str("mongodb"), FavoritesBackend::MongoDb);
        assert_eq!(FavoritesBackend::from_str("anything"), FavoritesBackend::MongoDb);
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = CorsConfig::parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_write_timeout_default() {
        if env::var("FAVORITES_WRITE_TIMEOUT_MS").is_err() {
            assert_eq!(FavoritesConfig::write_timeout(), Duration::from_secs(10));
        }
    }
}
