//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 조회 캐싱을 지원합니다.
//! 리포지토리 인스턴스는 부팅 시 한 번 만들어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록합니다.
//!
//! # Modules
//!
//! - [`destinations`] - 여행지 (slug 조회, 캐시)
//! - [`places`] - 장소 (여행지별 목록, ID 조회, 캐시)
//! - [`favorites`] - 사용자 즐겨찾기 배열 쓰기와 실시간 구독
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::places::PlaceRepository;
//!
//! let repo = ServiceLocator::resolve::<PlaceRepository>()?;
//! let places = repo.find_by_destination("chefchaouen").await?;
//! ```

pub mod destinations;
pub mod places;
pub mod favorites;
