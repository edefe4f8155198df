//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`normalize`] - 저장소 고유 값(DateTime, Timestamp, ObjectId)을 평범한 값으로 변환
//! - [`string_utils`] - slug / 장소 ID / 쿼리 문자열 검증
//! - [`display_terminal`] - 부팅 과정 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::normalize::normalize_document;
//! use crate::utils::string_utils::validate_slug;
//!
//! let slug = validate_slug("Merzouga")?;          // "merzouga"
//! let plain = normalize_document(raw_document);   // DateTime → { seconds, nanoseconds, iso }
//! ```

pub mod normalize;
pub mod string_utils;
pub mod display_terminal;
