use serde::{Deserialize, Serialize};

/// 사용자 문서 중 즐겨찾기 부분
///
/// 권위 있는 즐겨찾기 집합은 `users/{user_id}` 문서의 `favoritesPlaces` 배열입니다.
/// 배열 순서와 중복은 의미가 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFavorites {
    #[serde(rename = "_id")]
    pub user_id: String,

    #[serde(rename = "favoritesPlaces", default)]
    pub favorites_places: Vec<String>,
}
