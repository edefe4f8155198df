use serde::{Deserialize, Serialize};

use crate::domain::models::{LocalizedText, PlainTimestamp};

/// 여행지 문서
///
/// 클라이언트 입장에서는 읽기 전용이며 외부 저장소가 소유합니다.
/// `slug`는 라우팅 키로 컬렉션 전체에서 유일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(rename = "_id")]
    pub id: String,

    pub slug: String,

    #[serde(default)]
    pub name: LocalizedText,

    #[serde(default)]
    pub description: LocalizedText,

    #[serde(default)]
    pub region: LocalizedText,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub activities: Vec<LocalizedText>,

    #[serde(default)]
    pub best_season: Option<LocalizedText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<PlainTimestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<PlainTimestamp>,
}

impl Destination {
    /// 대표 이미지 (첫 번째 이미지)
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
