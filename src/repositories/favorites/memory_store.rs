//! 프로세스 메모리 즐겨찾기 저장소
//!
//! `FAVORITES_BACKEND=memory`일 때와 테스트에서 사용합니다.
//! 사용자마다 `watch` 채널 하나를 두고, 채널 값이 곧 `favoritesPlaces` 배열입니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use tokio::sync::watch;

use crate::services::favorites::{FavoritesError, FavoritesStore, FavoritesStream};

#[derive(Default)]
pub struct InMemoryFavoritesStore {
    users: Mutex<HashMap<String, Arc<watch::Sender<Vec<String>>>>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self, user_id: &str) -> Arc<watch::Sender<Vec<String>>> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        users
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(watch::channel(Vec::new()).0))
            .clone()
    }

    /// 저장된 배열을 정렬해 반환합니다.
    pub fn favorites_of(&self, user_id: &str) -> Vec<String> {
        let mut ids = self.document(user_id).borrow().clone();
        ids.sort();
        ids
    }

    /// 배열 전체를 바꿉니다. 다른 기기에서 일어난 변경을 흉내 낼 때 씁니다.
    pub fn replace(&self, user_id: &str, ids: Vec<String>) {
        self.document(user_id).send_replace(ids);
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavoritesStore {
    async fn add(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError> {
        self.document(user_id).send_if_modified(|ids| {
            if ids.iter().any(|id| id == place_id) {
                return false;
            }
            ids.push(place_id.to_string());
            true
        });
        Ok(())
    }

    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError> {
        self.document(user_id).send_if_modified(|ids| {
            let before = ids.len();
            ids.retain(|id| id != place_id);
            ids.len() != before
        });
        Ok(())
    }

    async fn subscribe(&self, user_id: &str) -> Result<FavoritesStream, FavoritesError> {
        let receiver = self.document(user_id).subscribe();

        let snapshots = stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let ids = receiver.borrow_and_update().clone();
            Some((Ok(ids), (receiver, false)))
        });

        Ok(snapshots.boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_remove_are_idempotent() {
        let store = InMemoryFavoritesStore::new();

        store.add("amina", "majorelle").await.unwrap();
        store.add("amina", "majorelle").await.unwrap();
        assert_eq!(store.favorites_of("amina"), vec!["majorelle".to_string()]);

        store.remove("amina", "majorelle").await.unwrap();
        store.remove("amina", "majorelle").await.unwrap();
        assert!(store.favorites_of("amina").is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_emits_current_value_then_changes() {
        let store = InMemoryFavoritesStore::new();
        store.replace("amina", vec!["a".to_string()]);

        let mut snapshots = store.subscribe("amina").await.unwrap();
        assert_eq!(snapshots.next().await, Some(Ok(vec!["a".to_string()])));

        store.add("amina", "b").await.unwrap();
        assert_eq!(
            snapshots.next().await,
            Some(Ok(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = InMemoryFavoritesStore::new();
        store.add("amina", "a").await.unwrap();

        assert!(store.favorites_of("youssef").is_empty());
    }
}
