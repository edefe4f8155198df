//! 문서 저장소 엔티티 모듈
//!
//! 필드 이름은 저장소 문서의 camelCase 이름을 그대로 따릅니다.
//! 모든 엔티티는 [정규화](crate::utils::normalize)가 끝난 문서에서 역직렬화됩니다.
//!
//! - [`destination`] - 여행지 (`destinations` 컬렉션, slug로 라우팅)
//! - [`place`] - 여행지에 속한 장소 (`places` 컬렉션)
//! - [`user_favorites`] - 사용자 즐겨찾기 배열 (`users` 컬렉션)

pub mod destination;
pub mod place;
pub mod user_favorites;

pub use destination::Destination;
pub use place::Place;
pub use user_favorites::UserFavorites;
