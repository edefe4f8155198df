//! # 여행지 리포지토리 구현
//!
//! `destinations` 컬렉션을 slug로 조회합니다. MongoDB가 주 저장소이고
//! Redis는 조회 결과 캐시입니다.
//!
//! ## 캐싱 전략
//!
//! - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
//! - **키 패턴**:
//!   - 전체 목록: `destination:all`
//!   - 개별 여행지: `destination:{slug}`
//! - 캐시 에러는 무시하고 MongoDB 조회로 진행합니다.
//!
//! 모든 문서는 [`normalize_document`]를 거친 뒤 엔티티로 역직렬화되므로
//! 캐시에 들어가는 값에도 BSON 전용 타입이 남지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    Collection,
};

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::errors::{AppError, ErrorContext},
    db::Database,
    domain::entities::Destination,
    utils::normalize::normalize_document,
};

const COLLECTION: &str = "destinations";
const CACHE_PREFIX: &str = "destination";

/// 여행지 데이터 액세스 리포지토리
pub struct DestinationRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl DestinationRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection::<Document>(COLLECTION)
    }

    fn cache_key(&self, suffix: &str) -> String {
        format!("{}:{}", CACHE_PREFIX, suffix)
    }

    /// 모든 여행지를 slug 순으로 조회합니다.
    ///
    /// 형식이 맞지 않는 문서는 경고 로그를 남기고 건너뜁니다.
    pub async fn find_all(&self) -> Result<Vec<Destination>, AppError> {
        let cache_key = self.cache_key("all");

        if let Ok(Some(cached)) = self.redis.get::<Vec<Destination>>(&cache_key).await {
            return Ok(cached);
        }

        let documents: Vec<Document> = self
            .collection()
            .find(doc! {})
            .sort(doc! { "slug": 1 })
            .await?
            .try_collect()
            .await?;

        let destinations: Vec<Destination> = documents
            .into_iter()
            .filter_map(|document| match from_document::<Destination>(normalize_document(document)) {
                Ok(destination) => Some(destination),
                Err(e) => {
                    log::warn!("⚠️ 여행지 문서 형식 오류, 건너뜀: {}", e);
                    None
                }
            })
            .collect();

        let _ = self
            .redis
            .set_with_expiry(&cache_key, &destinations, CacheConfig::ttl_seconds())
            .await;

        Ok(destinations)
    }

    /// slug로 여행지를 조회합니다.
    ///
    /// * `Ok(None)` - 해당 slug의 여행지가 없음
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Destination>, AppError> {
        let cache_key = self.cache_key(slug);

        if let Ok(Some(cached)) = self.redis.get::<Destination>(&cache_key).await {
            return Ok(Some(cached));
        }

        let Some(document) = self.collection().find_one(doc! { "slug": slug }).await? else {
            return Ok(None);
        };

        let destination = from_document::<Destination>(normalize_document(document))
            .with_context(|| format!("destination '{}' is malformed", slug))?;

        let _ = self
            .redis
            .set_with_expiry(&cache_key, &destination, CacheConfig::ttl_seconds())
            .await;

        Ok(Some(destination))
    }

    /// 여행지 캐시를 모두 비우고 삭제한 키 수를 반환합니다.
    pub async fn invalidate_cache(&self) -> Result<usize, AppError> {
        self.redis
            .invalidate_pattern(&self.cache_key("*"))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
