//! # Authentication Configuration Module
//!
//! 사이트 로그인은 외부 ID 제공자가 담당하고, 이 서비스는 그쪽에서 발급한
//! HS256 베어러 토큰을 검증만 합니다. 토큰의 `sub` 클레임이 사용자 ID이며,
//! 즐겨찾기 문서(`users/{sub}`)의 키로 쓰입니다.
//!
//! ```bash
//! export JWT_SECRET="shared-secret-with-identity-provider"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// JWT 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 이 서비스가 직접 발급하는 토큰(개발/테스트용)의 유효 시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_is_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
