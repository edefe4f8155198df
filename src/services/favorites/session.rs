//! 로그인 세션 관리
//!
//! HTTP 요청은 상태가 없으므로, 로그인 세션마다 [`FavoritesSync`] 하나를 만들어
//! 세션 ID(UUID v4)로 찾아 쓰게 합니다. 세션은 발급받은 사용자만 사용할 수 있습니다.
//!
//! 세션마다 구독(change stream)이 하나씩 열려 있으므로, 유휴 시간이 `idle_ttl`을
//! 넘긴 세션은 [`SessionManager::evict_idle`]로 닫습니다. 새 세션을 열 때와
//! 부팅 시 띄운 주기 작업에서 호출됩니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use uuid::Uuid;

use super::{FavoritesStore, FavoritesSync};

struct Session {
    user_id: String,
    favorites: Arc<FavoritesSync>,
    last_used: Mutex<Instant>,
}

impl Session {
    fn touch(&self) {
        *self.last_used.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_used
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
    }
}

/// 세션 ID → 즐겨찾기 동기화기
pub struct SessionManager {
    store: Arc<dyn FavoritesStore>,
    write_timeout: Duration,
    idle_ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn FavoritesStore>, write_timeout: Duration, idle_ttl: Duration) -> Self {
        Self {
            store,
            write_timeout,
            idle_ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// 새 세션을 열고 사용자 문서 구독을 시작합니다.
    pub fn sign_in(&self, user_id: &str) -> (Uuid, Arc<FavoritesSync>) {
        self.evict_idle();

        let favorites = Arc::new(FavoritesSync::new(
            Arc::clone(&self.store),
            self.write_timeout,
        ));
        favorites.sign_in(user_id);

        let session_id = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                session_id,
                Session {
                    user_id: user_id.to_string(),
                    favorites: Arc::clone(&favorites),
                    last_used: Mutex::new(Instant::now()),
                },
            );

        log::info!("🔑 세션 시작: {} ({})", session_id, user_id);
        (session_id, favorites)
    }

    /// 세션이 해당 사용자의 것일 때만 동기화기를 반환합니다.
    ///
    /// 찾은 세션은 마지막 사용 시각이 갱신됩니다. 유휴 시간을 넘긴 세션은 찾지 않습니다.
    pub fn find(&self, session_id: &Uuid, user_id: &str) -> Option<Arc<FavoritesSync>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .filter(|session| session.user_id == user_id && session.idle_for() <= self.idle_ttl)
            .map(|session| {
                session.touch();
                Arc::clone(&session.favorites)
            })
    }

    /// 세션을 닫습니다. 구독을 끊고 로컬 집합을 비웁니다.
    ///
    /// 세션이 없거나 다른 사용자의 것이면 `false`.
    pub fn sign_out(&self, session_id: &Uuid, user_id: &str) -> bool {
        let removed = {
            let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
            match sessions.get(session_id) {
                Some(session) if session.user_id == user_id => sessions.remove(session_id),
                _ => None,
            }
        };

        match removed {
            Some(session) => {
                session.favorites.sign_out();
                log::info!("🔒 세션 종료: {} ({})", session_id, user_id);
                true
            }
            None => false,
        }
    }

    /// 유휴 시간을 넘긴 세션을 모두 닫고, 닫은 개수를 반환합니다.
    pub fn evict_idle(&self) -> usize {
        let expired: Vec<(Uuid, Session)> = {
            let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
            let ids: Vec<Uuid> = sessions
                .iter()
                .filter(|(_, session)| session.idle_for() > self.idle_ttl)
                .map(|(id, _)| *id)
                .collect();

            ids.into_iter()
                .filter_map(|id| sessions.remove(&id).map(|session| (id, session)))
                .collect()
        };

        for (session_id, session) in &expired {
            session.favorites.sign_out();
            log::info!("⌛ 유휴 세션 만료: {} ({})", session_id, session.user_id);
        }

        expired.len()
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
