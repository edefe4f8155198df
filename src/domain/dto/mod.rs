//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 객체들을 정의합니다.
//! 엔티티는 모든 번역을 담고 있지만, 응답 DTO는 요청 언어 하나로 풀린 문자열만 담습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── content/        # 공통 쿼리 (?lang=, ?image=, ?category=)
//! ├── destinations/   # 여행지 목록 / 상세
//! ├── places/         # 장소 목록 / 상세 / 지도
//! └── favorites/      # 세션, 즐겨찾기 상태, 토글 결과
//! ```
//!
//! ## 변환 패턴
//!
//! - **Entity → Response**: `Response::localize(entity, lang, ...)`
//! - **Query 검증**: `validator` crate (`query.validate()`)

pub mod content;
pub mod destinations;
pub mod places;
pub mod favorites;

pub use content::*;
pub use destinations::*;
pub use places::*;
pub use favorites::*;
