//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 여행지와 장소 문서는 클라이언트 입장에서 읽기 전용이므로, 정규화가 끝난
//! 엔티티를 TTL과 함께 캐시합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("destination:merzouga", &destination, 600).await?;
//!
//! let cached: Option<Destination> = cache.get("destination:merzouga").await?;
//! cache.invalidate_pattern("destination:*").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
