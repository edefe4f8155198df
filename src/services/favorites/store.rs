//! 즐겨찾기 원격 저장소 경계
//!
//! 구현체는 [`repositories::favorites`](crate::repositories::favorites)에 있습니다.

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use super::FavoritesError;

/// 사용자 문서의 `favoritesPlaces` 배열 스냅샷 스트림
///
/// 구독 직후 현재 배열을 한 번 내보내고, 이후 문서가 바뀔 때마다 새 배열을 내보냅니다.
pub type FavoritesStream = BoxStream<'static, Result<Vec<String>, FavoritesError>>;

/// 사용자별 즐겨찾기 배열을 보관하는 원격 저장소
///
/// `add` / `remove`는 멱등이어야 합니다. 이미 있는 ID를 추가하거나
/// 없는 ID를 제거해도 성공입니다.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// 배열에 ID를 추가합니다 (`$addToSet`). 사용자 문서가 없으면 만듭니다.
    async fn add(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError>;

    /// 배열에서 ID를 제거합니다 (`$pull`).
    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), FavoritesError>;

    /// 사용자 문서의 실시간 구독을 엽니다.
    async fn subscribe(&self, user_id: &str) -> Result<FavoritesStream, FavoritesError>;
}
