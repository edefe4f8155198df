//! 인증 관련 도메인 모델
//!
//! 인증 미들웨어가 요청 extension에 넣는 사용자 정보와 인증 모드를 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use authentication_request::AuthMode;
