//! MongoDB 즐겨찾기 저장소
//!
//! `users/{user_id}` 문서의 `favoritesPlaces` 배열을 다룹니다.
//!
//! - 추가: `$addToSet` (문서가 없으면 upsert)
//! - 제거: `$pull`
//! - 구독: change stream (`fullDocument: updateLookup`)
//!
//! change stream은 replica set에서만 열립니다. 단일 노드 개발 환경에서는
//! `FAVORITES_BACKEND=memory`를 쓰거나 단일 노드 replica set을 구성하세요.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future;
use futures_util::stream::{self, StreamExt};
use mongodb::{
    bson::doc,
    change_stream::event::OperationType,
    options::FullDocumentType,
    Collection,
};

use crate::{
    db::Database,
    domain::entities::UserFavorites,
    services::favorites::{FavoritesError, FavoritesStore, FavoritesStream},
};

const USERS_COLLECTION: &str = "users";
const FAVORITES_FIELD: &str = "favoritesPlaces";

pub struct MongoFavoritesStore {
    db: Arc<Database>,
}

impl MongoFavoritesStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserFavorites> {
        self.db.collection::<UserFavorites>(USERS_COLLECTION)
    }
}

fn write_failure(err: mongodb::error::Error) -> FavoritesError {
    FavoritesError::WriteFailure(err.to_string())
}

fn subscription_failure(err: mongodb::error::Error) -> FavoritesError {
    FavoritesError::SubscriptionFailure(err.to_string())
}

#[async_trait]
impl FavoritesStore for MongoFavoritesStore {
    async fn add(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError> {
        self.collection()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$addToSet": { FAVORITES_FIELD: place_id } },
            )
            .upsert(true)
            .await
            .map_err(write_failure)?;

        log::debug!("즐겨찾기 추가: {} → {}", user_id, place_id);
        Ok(())
    }

    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError> {
        self.collection()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$pull": { FAVORITES_FIELD: place_id } },
            )
            .await
            .map_err(write_failure)?;

        log::debug!("즐겨찾기 제거: {} → {}", user_id, place_id);
        Ok(())
    }

    async fn subscribe(&self, user_id: &str) -> Result<FavoritesStream, FavoritesError> {
        let collection = self.collection();

        // 현재 문서를 읽기 전에 스트림을 열어 두어야 그 사이의 변경을 놓치지 않습니다.
        let changes = collection
            .watch()
            .pipeline([doc! { "$match": { "documentKey._id": user_id } }])
            .full_document(FullDocumentType::UpdateLookup)
            .await
            .map_err(subscription_failure)?;

        let initial = collection
            .find_one(doc! { "_id": user_id })
            .await
            .map_err(subscription_failure)?
            .map(|user| user.favorites_places)
            .unwrap_or_default();

        let updates = changes.filter_map(|event| {
            future::ready(match event {
                Ok(event) => match event.operation_type {
                    OperationType::Delete => Some(Ok(Vec::new())),
                    _ => event.full_document.map(|user| Ok(user.favorites_places)),
                },
                Err(err) => Some(Err(subscription_failure(err))),
            })
        });

        Ok(stream::once(future::ready(Ok(initial))).chain(updates).boxed())
    }
}
