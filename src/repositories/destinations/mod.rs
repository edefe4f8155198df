//! 여행지 데이터 액세스 계층
//!
//! ```rust,ignore
//! let repo = DestinationRepository::new(database, redis);
//! let merzouga = repo.find_by_slug("merzouga").await?;
//! ```

pub mod destination_repo;

pub use destination_repo::DestinationRepository;
