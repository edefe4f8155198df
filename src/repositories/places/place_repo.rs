//! # 장소 리포지토리 구현
//!
//! `places` 컬렉션에서 여행지 slug에 속한 장소를 조회합니다.
//!
//! - **캐시 키**: `places:{slug}` (여행지별 목록), `places:{slug}:{place_id}` (개별 장소)
//! - **문서 ID**: 문자열 ID와 ObjectId가 섞여 있으므로 두 형식 모두로 조회합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, oid::ObjectId, Document},
    Collection,
};

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::errors::{AppError, ErrorContext},
    db::Database,
    domain::entities::Place,
    utils::normalize::normalize_document,
};

const COLLECTION: &str = "places";
const CACHE_PREFIX: &str = "places";

/// 장소 데이터 액세스 리포지토리
pub struct PlaceRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

/// 문자열 ID와, ObjectId 형식이면 ObjectId로도 맞춰 보는 `_id` 조건
fn id_filter(place_id: &str) -> Document {
    match ObjectId::parse_str(place_id) {
        Ok(object_id) => doc! { "$or": [ { "_id": place_id }, { "_id": object_id } ] },
        Err(_) => doc! { "_id": place_id },
    }
}

impl PlaceRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection::<Document>(COLLECTION)
    }

    /// 여행지에 속한 모든 장소를 조회합니다.
    pub async fn find_by_destination(&self, slug: &str) -> Result<Vec<Place>, AppError> {
        let cache_key = format!("{}:{}", CACHE_PREFIX, slug);

        if let Ok(Some(cached)) = self.redis.get::<Vec<Place>>(&cache_key).await {
            return Ok(cached);
        }

        let documents: Vec<Document> = self
            .collection()
            .find(doc! { "destinationSlug": slug })
            .sort(doc! { "category": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;

        let places: Vec<Place> = documents
            .into_iter()
            .filter_map(|document| match from_document::<Place>(normalize_document(document)) {
                Ok(place) => Some(place),
                Err(e) => {
                    log::warn!("⚠️ 장소 문서 형식 오류 ({}), 건너뜀: {}", slug, e);
                    None
                }
            })
            .collect();

        let _ = self
            .redis
            .set_with_expiry(&cache_key, &places, CacheConfig::ttl_seconds())
            .await;

        Ok(places)
    }

    /// 여행지 안에서 장소 하나를 조회합니다.
    ///
    /// 다른 여행지에 속한 장소 ID로는 찾을 수 없습니다.
    pub async fn find_by_id(&self, slug: &str, place_id: &str) -> Result<Option<Place>, AppError> {
        let cache_key = format!("{}:{}:{}", CACHE_PREFIX, slug, place_id);

        if let Ok(Some(cached)) = self.redis.get::<Place>(&cache_key).await {
            return Ok(Some(cached));
        }

        let mut filter = id_filter(place_id);
        filter.insert("destinationSlug", slug);

        let Some(document) = self.collection().find_one(filter).await? else {
            return Ok(None);
        };

        let place = from_document::<Place>(normalize_document(document))
            .with_context(|| format!("place '{}' is malformed", place_id))?;

        let _ = self
            .redis
            .set_with_expiry(&cache_key, &place, CacheConfig::ttl_seconds())
            .await;

        Ok(Some(place))
    }

    /// 장소 캐시를 모두 비우고 삭제한 키 수를 반환합니다.
    pub async fn invalidate_cache(&self) -> Result<usize, AppError> {
        self.redis
            .invalidate_pattern(&format!("{}:*", CACHE_PREFIX))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_plain_string() {
        assert_eq!(id_filter("majorelle"), doc! { "_id": "majorelle" });
    }

    #[test]
    fn test_id_filter_matches_object_id_form_too() {
        let hex = "507f1f77bcf86cd799439011";
        let filter = id_filter(hex);
        let alternatives = filter.get_array("$or").unwrap();

        assert_eq!(alternatives.len(), 2);
        assert_eq!(
            alternatives[1].as_document().unwrap().get_object_id("_id").unwrap().to_hex(),
            hex
        );
    }
}
