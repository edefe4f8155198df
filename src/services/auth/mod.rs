//! 인증 관련 서비스
//!
//! - [`TokenService`] - 베어러 토큰(HS256 JWT) 검증

pub mod token_service;

pub use token_service::*;
