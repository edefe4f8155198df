//! 도메인 값 객체 모듈
//!
//! - [`localized`] - 언어 코드 → 문자열 매핑과 대체(fallback) 조회
//! - [`geo`] - 좌표
//! - [`timestamp`] - 정규화된 타임스탬프
//! - [`auth`] - 요청에 부착되는 인증 사용자 정보
//! - [`token`] - 베어러 토큰 클레임

pub mod localized;
pub mod geo;
pub mod timestamp;
pub mod auth;
pub mod token;

pub use localized::LocalizedText;
pub use geo::Coordinates;
pub use timestamp::PlainTimestamp;
