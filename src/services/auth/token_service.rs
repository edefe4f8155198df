//! 베어러 토큰 검증 서비스
//!
//! 외부 ID 제공자가 발급한 HS256 JWT를 검증하고 요청 사용자 정보를 만듭니다.
//! 발급 함수는 개발 환경과 테스트에서 토큰을 만들 때만 씁니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::models::{auth::AuthenticatedUser, token::TokenClaims},
};

/// JWT 토큰 서비스
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// `JWT_SECRET` 환경 변수로 만듭니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret())
    }

    /// 액세스 토큰을 발급합니다.
    pub fn issue_access_token(&self, user_id: &str, name: Option<&str>) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            name: name.map(str::to_string),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }

    /// `Authorization` 헤더 값으로 요청 사용자를 만듭니다.
    pub fn authenticate(&self, auth_header: &str) -> Result<AuthenticatedUser, AppError> {
        let token = self.extract_bearer_token(auth_header)?;
        let claims = self.verify_token(token)?;

        if claims.sub.trim().is_empty() {
            return Err(AppError::AuthenticationError("Token has no subject".to_string()));
        }

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            display_name: claims.name,
        })
    }
}
