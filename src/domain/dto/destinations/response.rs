use serde::Serialize;

use crate::domain::entities::Destination;
use crate::domain::models::PlainTimestamp;
use crate::presentation::carousel::GalleryView;
use crate::presentation::map::destination_path;

/// 여행지 목록 카드
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    pub slug: String,
    pub name: String,
    pub region: String,
    pub cover_image: Option<String>,
    pub href: String,
}

impl DestinationSummary {
    pub fn localize(destination: &Destination, lang: &str) -> Self {
        Self {
            slug: destination.slug.clone(),
            name: destination.name.resolve(lang).to_string(),
            region: destination.region.resolve(lang).to_string(),
            cover_image: destination.cover_image().map(str::to_string),
            href: destination_path(&destination.slug),
        }
    }
}

/// 여행지 상세 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDetail {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub region: String,
    pub activities: Vec<String>,
    pub best_season: Option<String>,
    pub gallery: GalleryView,
    pub places_href: String,
    pub map_href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<PlainTimestamp>,
}

impl DestinationDetail {
    pub fn localize(destination: Destination, lang: &str, image: Option<usize>) -> Self {
        let href = destination_path(&destination.slug);

        Self {
            name: destination.name.resolve(lang).to_string(),
            description: destination.description.resolve(lang).to_string(),
            region: destination.region.resolve(lang).to_string(),
            activities: destination
                .activities
                .iter()
                .map(|activity| activity.resolve(lang).to_string())
                .filter(|activity| !activity.is_empty())
                .collect(),
            best_season: destination
                .best_season
                .as_ref()
                .map(|season| season.resolve(lang).to_string()),
            gallery: GalleryView::new(destination.images, image),
            places_href: format!("{}/places", href),
            map_href: format!("{}/map", href),
            updated_at: destination.updated_at,
            slug: destination.slug,
        }
    }
}
