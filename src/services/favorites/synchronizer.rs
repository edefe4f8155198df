//! 세션 단위 낙관적 즐겨찾기 동기화
//!
//! 즐겨찾기 집합은 `tokio::sync::watch` 셀 하나에 들어 있고, 모든 변경은
//! `send_modify` 계열로 한 번에 적용됩니다. 읽는 쪽은 언제나 완전한 상태만 봅니다.
//!
//! 세대(generation) 번호는 로그인/로그아웃마다 증가합니다. 이전 세대의
//! 구독 스냅샷이나 늦게 끝난 쓰기는 현재 상태를 건드리지 않습니다.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::StreamExt;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{FavoritesError, FavoritesStore};

/// 장소 하나의 즐겨찾기 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// 첫 스냅샷을 받기 전
    Unknown,
    Favorited,
    NotFavorited,
}

/// 반응형 셀에 담기는 즐겨찾기 상태
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesState {
    user_id: Option<String>,
    favorites: HashSet<String>,
    /// 쓰기가 끝나지 않은 ID와 진행 중인 쓰기 수
    pending: HashMap<String, usize>,
    snapshot_received: bool,
    generation: u64,
}

impl FavoritesState {
    fn signed_in(user_id: &str, generation: u64) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            generation,
            ..Self::default()
        }
    }

    fn signed_out(generation: u64) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// 구독에서 첫 스냅샷을 받았는지 여부
    pub fn is_loaded(&self) -> bool {
        self.snapshot_received
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.favorites.contains(place_id)
    }

    /// 원격 쓰기가 아직 확정되지 않은(잠정) ID인지 여부
    pub fn is_pending(&self, place_id: &str) -> bool {
        self.pending.contains_key(place_id)
    }

    pub fn membership(&self, place_id: &str) -> Membership {
        if self.favorites.contains(place_id) {
            Membership::Favorited
        } else if self.snapshot_received || self.is_pending(place_id) {
            Membership::NotFavorited
        } else {
            Membership::Unknown
        }
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// 응답용으로 정렬한 즐겨찾기 ID 목록
    pub fn sorted_favorites(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.favorites.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn sorted_pending(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.pending.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn set_membership(&mut self, place_id: &str, favorited: bool) {
        if favorited {
            self.favorites.insert(place_id.to_string());
        } else {
            self.favorites.remove(place_id);
        }
    }

    fn begin_write(&mut self, place_id: &str) {
        *self.pending.entry(place_id.to_string()).or_insert(0) += 1;
    }

    fn finish_write(&mut self, place_id: &str) {
        if let Some(count) = self.pending.get_mut(place_id) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(place_id);
            }
        }
    }

    /// 서버 배열로 로컬 집합을 통째로 교체합니다. 중복은 집합으로 합쳐집니다.
    fn apply_snapshot(&mut self, ids: Vec<String>) {
        self.favorites = ids.into_iter().collect();
        self.snapshot_received = true;
    }
}

/// 낙관적으로 적용된 토글과 진행 중인 원격 쓰기
///
/// 로컬 집합은 [`FavoritesSync::toggle`]이 반환되는 시점에 이미 바뀌어 있고,
/// 원격 쓰기는 별도 태스크로 이미 시작되어 있습니다. 이 값을 버려도 쓰기는
/// 끝까지 진행되고, 실패하면 롤백됩니다.
pub struct PendingToggle {
    place_id: String,
    favorited: bool,
    write: JoinHandle<Result<bool, FavoritesError>>,
}

impl PendingToggle {
    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    /// 낙관적으로 적용된 새 상태
    pub fn favorited(&self) -> bool {
        self.favorited
    }

    /// 원격 쓰기가 끝날 때까지 기다립니다.
    ///
    /// 성공하면 확정된 새 상태를, 실패하면 해당 ID를 되돌린 뒤 `WriteFailure`를 반환합니다.
    pub async fn settle(self) -> Result<bool, FavoritesError> {
        self.write
            .await
            .map_err(|e| FavoritesError::WriteFailure(format!("write task ended: {}", e)))?
    }
}

struct Subscription {
    user_id: String,
    task: JoinHandle<()>,
}

/// 세션 하나의 즐겨찾기 동기화기
///
/// 로그인하면 사용자 문서 구독을 시작하고, 로그아웃하거나 값이 drop되면
/// 구독을 끊고 집합을 비웁니다. 프로세스 전역이 아니라 세션마다 하나씩 만듭니다.
pub struct FavoritesSync {
    store: Arc<dyn FavoritesStore>,
    cell: Arc<watch::Sender<FavoritesState>>,
    subscription: Mutex<Option<Subscription>>,
    write_timeout: Duration,
}

impl FavoritesSync {
    pub fn new(store: Arc<dyn FavoritesStore>, write_timeout: Duration) -> Self {
        let (cell, _) = watch::channel(FavoritesState::default());

        Self {
            store,
            cell: Arc::new(cell),
            subscription: Mutex::new(None),
            write_timeout,
        }
    }

    /// 사용자 문서 구독을 시작합니다.
    ///
    /// 같은 사용자로 이미 구독 중이면 아무 일도 하지 않습니다.
    /// 다른 사용자였다면 이전 구독을 끊고 상태를 새로 시작합니다.
    pub fn sign_in(&self, user_id: &str) {
        let mut subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(current) = subscription.as_ref() {
            if current.user_id == user_id && !current.task.is_finished() {
                return;
            }
        }

        if let Some(previous) = subscription.take() {
            previous.task.abort();
        }

        let generation = self.cell.borrow().generation + 1;
        self.cell.send_replace(FavoritesState::signed_in(user_id, generation));

        let task = tokio::spawn(run_subscription(
            Arc::clone(&self.store),
            Arc::clone(&self.cell),
            user_id.to_string(),
            generation,
        ));

        *subscription = Some(Subscription {
            user_id: user_id.to_string(),
            task,
        });

        log::info!("⭐ 즐겨찾기 구독 시작: {}", user_id);
    }

    /// 구독을 끊고 로컬 집합을 비웁니다.
    pub fn sign_out(&self) {
        let previous = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(previous) = previous {
            previous.task.abort();
            log::info!("👋 즐겨찾기 구독 종료: {}", previous.user_id);
        }

        let generation = self.cell.borrow().generation + 1;
        self.cell.send_replace(FavoritesState::signed_out(generation));
    }

    /// 즐겨찾기를 뒤집습니다.
    ///
    /// 로그인 상태가 아니면 아무것도 바꾸지 않고 `Unauthenticated`를 반환합니다.
    /// 그렇지 않으면 반환 전에 로컬 집합을 뒤집고 원격 쓰기 태스크를 시작합니다.
    /// 쓰기 결과는 반환된 [`PendingToggle`]로 기다릴 수 있습니다.
    pub fn toggle(&self, place_id: &str) -> Result<PendingToggle, FavoritesError> {
        let mut applied = None;

        self.cell.send_if_modified(|state| {
            let Some(user_id) = state.user_id.clone() else {
                return false;
            };

            let was_favorited = state.contains(place_id);
            state.set_membership(place_id, !was_favorited);
            state.begin_write(place_id);
            applied = Some((user_id, was_favorited, state.generation));
            true
        });

        let (user_id, was_favorited, generation) = applied.ok_or(FavoritesError::Unauthenticated)?;

        let store = Arc::clone(&self.store);
        let cell = Arc::clone(&self.cell);
        let write_timeout = self.write_timeout;
        let place = place_id.to_string();

        let write = tokio::spawn(async move {
            let request = async {
                if was_favorited {
                    store.remove(&user_id, &place).await
                } else {
                    store.add(&user_id, &place).await
                }
            };

            let result = match tokio::time::timeout(write_timeout, request).await {
                Ok(result) => result,
                Err(_) => Err(FavoritesError::WriteFailure(format!(
                    "no response within {} ms",
                    write_timeout.as_millis()
                ))),
            };

            cell.send_modify(|state| {
                if state.generation != generation {
                    return;
                }
                state.finish_write(&place);
                if result.is_err() {
                    state.set_membership(&place, was_favorited);
                }
            });

            if let Err(err) = &result {
                log::warn!("↩️ 즐겨찾기 롤백: {} ({})", place, err);
            }

            result.map(|()| !was_favorited)
        });

        Ok(PendingToggle {
            place_id: place_id.to_string(),
            favorited: !was_favorited,
            write,
        })
    }

    /// 현재 상태의 복사본
    pub fn state(&self) -> FavoritesState {
        self.cell.borrow().clone()
    }

    pub fn is_favorited(&self, place_id: &str) -> bool {
        self.cell.borrow().contains(place_id)
    }

    pub fn membership(&self, place_id: &str) -> Membership {
        self.cell.borrow().membership(place_id)
    }

    pub fn user_id(&self) -> Option<String> {
        self.cell.borrow().user_id.clone()
    }

    /// 상태 변경을 받아볼 수 있는 수신자
    pub fn watch(&self) -> watch::Receiver<FavoritesState> {
        self.cell.subscribe()
    }

    /// 첫 스냅샷을 받을 때까지 기다립니다. 그 전에 로그아웃되면 `false`.
    pub async fn loaded(&self) -> bool {
        let mut receiver = self.cell.subscribe();
        receiver
            .wait_for(|state| state.is_loaded() || !state.is_signed_in())
            .await
            .map(|state| state.is_loaded())
            .unwrap_or(false)
    }
}

impl Drop for FavoritesSync {
    fn drop(&mut self) {
        let subscription = self
            .subscription
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(subscription) = subscription {
            subscription.task.abort();
        }
    }
}

async fn run_subscription(
    store: Arc<dyn FavoritesStore>,
    cell: Arc<watch::Sender<FavoritesState>>,
    user_id: String,
    generation: u64,
) {
    let mut snapshots = match store.subscribe(&user_id).await {
        Ok(stream) => stream,
        Err(err) => {
            log::error!("❌ 즐겨찾기 구독 실패 ({}): {}", user_id, err);
            return;
        }
    };

    while let Some(snapshot) = snapshots.next().await {
        match snapshot {
            Ok(ids) => {
                let current = cell.send_if_modified(|state| {
                    if state.generation != generation {
                        return false;
                    }
                    state.apply_snapshot(ids);
                    true
                });

                if !current {
                    break;
                }
            }
            Err(err) => {
                log::warn!("⚠️ 즐겨찾기 구독 오류, 마지막 상태 유지 ({}): {}", user_id, err);
            }
        }
    }

    log::debug!("즐겨찾기 구독 스트림 종료: {}", user_id);
}
