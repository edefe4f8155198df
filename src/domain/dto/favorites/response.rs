use serde::Serialize;
use uuid::Uuid;

use crate::presentation::i18n;
use crate::services::favorites::FavoritesState;

/// 세션의 즐겨찾기 상태
///
/// 로그아웃 상태이면 `signedIn: false`와 빈 목록입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub signed_in: bool,
    /// 구독에서 첫 스냅샷을 받았는지 여부
    pub loaded: bool,
    pub favorites: Vec<String>,
    /// 원격 쓰기가 끝나지 않은 ID
    pub pending: Vec<String>,
}

impl FavoritesResponse {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            loaded: false,
            favorites: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl From<&FavoritesState> for FavoritesResponse {
    fn from(state: &FavoritesState) -> Self {
        Self {
            signed_in: state.is_signed_in(),
            loaded: state.is_loaded(),
            favorites: state.sorted_favorites(),
            pending: state.sorted_pending(),
        }
    }
}

/// 토글 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub place_id: String,
    pub favorited: bool,
    /// 다음 동작 버튼 문구 (즐겨찾기면 "제거", 아니면 "추가")
    pub action_label: String,
}

impl ToggleResponse {
    pub fn new(place_id: &str, favorited: bool, lang: &str) -> Self {
        let key = if favorited {
            "remove_from_favorites"
        } else {
            "add_to_favorites"
        };

        Self {
            place_id: place_id.to_string(),
            favorited,
            action_label: i18n::label(lang, key).to_string(),
        }
    }
}

/// 로그인 세션 발급 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub user_id: String,
    pub favorites: FavoritesResponse,
}
