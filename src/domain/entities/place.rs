use serde::{Deserialize, Serialize};

use crate::domain::models::{Coordinates, LocalizedText, PlainTimestamp};

/// 장소 문서
///
/// 명소, 숙소, 교통편 등 여행지에 속한 모든 장소를 나타냅니다.
/// `category`로 종류를, `type`으로 세부 유형을 구분합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "_id")]
    pub id: String,

    /// 소속 여행지의 slug
    pub destination_slug: String,

    #[serde(default)]
    pub name: LocalizedText,

    #[serde(default)]
    pub description: LocalizedText,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub review_count: Option<u32>,

    #[serde(default)]
    pub entrance_fee: Option<LocalizedText>,

    #[serde(default)]
    pub tips: Vec<LocalizedText>,

    #[serde(default)]
    pub best_time_to_visit: Option<LocalizedText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<PlainTimestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<PlainTimestamp>,
}

impl Place {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// 지도에 표시할 수 있는 좌표 (없거나 범위를 벗어나면 `None`)
    pub fn map_position(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_valid)
    }
}
