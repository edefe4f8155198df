//! 즐겨찾기 저장소 구현
//!
//! - [`MongoFavoritesStore`] - `users` 컬렉션 + change stream
//! - [`InMemoryFavoritesStore`] - 프로세스 메모리 (개발용, 테스트용)

pub mod mongo_store;
pub mod memory_store;

pub use mongo_store::MongoFavoritesStore;
pub use memory_store::InMemoryFavoritesStore;
