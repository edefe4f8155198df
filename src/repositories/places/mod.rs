//! 장소 데이터 액세스 계층

pub mod place_repo;

pub use place_repo::PlaceRepository;
