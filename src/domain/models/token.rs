//! 베어러 토큰 클레임
//!
//! 외부 ID 제공자가 발급한 HS256 JWT의 페이로드입니다.
//! 즐겨찾기 기능에 필요한 것은 사용자 ID(`sub`)뿐이므로 최소한의 클레임만 읽습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID, `users` 컬렉션의 `_id`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `name`: 표시 이름 (선택사항)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
