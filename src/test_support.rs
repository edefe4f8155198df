//! 테스트 공용 컴포넌트
//!
//! [`ServiceLocator`]는 프로세스 전역이므로, 병렬로 도는 테스트들이 같은
//! 인스턴스를 쓰도록 한 번만 등록합니다. 사용자 ID를 테스트마다 다르게 쓰면
//! 서로 간섭하지 않습니다.

use std::sync::{Arc, Once};
use std::time::Duration;

use crate::core::registry::ServiceLocator;
use crate::repositories::favorites::InMemoryFavoritesStore;
use crate::services::auth::TokenService;
use crate::services::favorites::SessionManager;

const TEST_SECRET: &str = "morocco-travel-test-secret";

static REGISTER: Once = Once::new();

fn register() {
    REGISTER.call_once(|| {
        let store = Arc::new(InMemoryFavoritesStore::new());
        ServiceLocator::set(store.clone());
        ServiceLocator::set(Arc::new(TokenService::new(TEST_SECRET)));
        ServiceLocator::set(Arc::new(SessionManager::new(
            store,
            Duration::from_secs(2),
            Duration::from_secs(600),
        )));
    });
}

pub fn token_service() -> Arc<TokenService> {
    register();
    ServiceLocator::try_get::<TokenService>().expect("token service registered")
}

pub fn session_manager() -> Arc<SessionManager> {
    register();
    ServiceLocator::try_get::<SessionManager>().expect("session manager registered")
}

pub fn favorites_store() -> Arc<InMemoryFavoritesStore> {
    register();
    ServiceLocator::try_get::<InMemoryFavoritesStore>().expect("favorites store registered")
}

/// `Authorization` 헤더 값
pub fn bearer(user_id: &str) -> String {
    let token = token_service()
        .issue_access_token(user_id, None)
        .expect("token issued");
    format!("Bearer {}", token)
}
