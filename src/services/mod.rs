//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스 인스턴스는 부팅 시 의존 순서대로 만들어
//! [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록합니다.
//!
//! # Modules
//!
//! - [`destinations`] - 여행지 목록 / 상세
//! - [`places`] - 장소 목록 / 상세 / 지도
//! - [`favorites`] - 세션 단위 낙관적 즐겨찾기 동기화
//! - [`auth`] - 베어러 토큰 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::places::PlaceService;
//!
//! let service = ServiceLocator::resolve::<PlaceService>()?;
//! let map = service.map("essaouira", "fr").await?;
//! ```

pub mod destinations;
pub mod places;
pub mod favorites;
pub mod auth;
