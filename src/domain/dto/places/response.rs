use serde::Serialize;

use crate::domain::entities::{Destination, Place};
use crate::domain::models::Coordinates;
use crate::presentation::carousel::GalleryView;
use crate::presentation::map::{destination_path, place_path, MapView};

/// 장소 목록 카드
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cover_image: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub position: Option<Coordinates>,
    pub href: String,
}

impl PlaceSummary {
    pub fn localize(place: &Place, lang: &str) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.resolve(lang).to_string(),
            category: place.category.clone(),
            kind: place.kind.clone(),
            cover_image: place.cover_image().map(str::to_string),
            rating: place.rating,
            review_count: place.review_count,
            position: place.map_position(),
            href: place_path(&place.destination_slug, &place.id),
        }
    }
}

/// 여행지의 장소 목록
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceListResponse {
    pub destination_slug: String,
    pub destination_name: String,
    pub category: Option<String>,
    pub places: Vec<PlaceSummary>,
}

/// 장소 상세 페이지
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetail {
    pub id: String,
    pub destination_slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gallery: GalleryView,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub entrance_fee: Option<String>,
    pub tips: Vec<String>,
    pub best_time_to_visit: Option<String>,
    pub position: Option<Coordinates>,
    pub href: String,
    pub destination_href: String,
}

impl PlaceDetail {
    pub fn localize(place: Place, lang: &str, image: Option<usize>) -> Self {
        Self {
            name: place.name.resolve(lang).to_string(),
            description: place.description.resolve(lang).to_string(),
            entrance_fee: place
                .entrance_fee
                .as_ref()
                .map(|fee| fee.resolve(lang).to_string()),
            tips: place
                .tips
                .iter()
                .map(|tip| tip.resolve(lang).to_string())
                .filter(|tip| !tip.is_empty())
                .collect(),
            best_time_to_visit: place
                .best_time_to_visit
                .as_ref()
                .map(|time| time.resolve(lang).to_string()),
            position: place.map_position(),
            href: place_path(&place.destination_slug, &place.id),
            destination_href: destination_path(&place.destination_slug),
            gallery: GalleryView::new(place.images, image),
            rating: place.rating,
            review_count: place.review_count,
            category: place.category,
            kind: place.kind,
            destination_slug: place.destination_slug,
            id: place.id,
        }
    }
}

/// 여행지 지도 화면
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationMapResponse {
    pub destination_slug: String,
    pub destination_name: String,
    #[serde(flatten)]
    pub map: MapView,
}

impl DestinationMapResponse {
    pub fn localize(destination: &Destination, places: &[Place], lang: &str) -> Self {
        Self {
            destination_slug: destination.slug.clone(),
            destination_name: destination.name.resolve(lang).to_string(),
            map: MapView::for_places(&destination.slug, places, lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LocalizedText;

    fn majorelle() -> Place {
        Place {
            id: "majorelle".to_string(),
            destination_slug: "marrakech".to_string(),
            name: LocalizedText::single("en", "Majorelle Garden").with("fr", "Jardin Majorelle"),
            description: LocalizedText::single("en", "Blue garden"),
            category: "attraction".to_string(),
            kind: "garden".to_string(),
            coordinates: Some(Coordinates::new(31.6417, -8.0033)),
            images: vec!["blue.jpg".to_string(), "cactus.jpg".to_string()],
            rating: Some(4.7),
            review_count: Some(5120),
            entrance_fee: Some(LocalizedText::single("en", "150 MAD")),
            tips: vec![LocalizedText::single("en", "Go early"), LocalizedText::default()],
            best_time_to_visit: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_summary_links_to_place_path() {
        let summary = PlaceSummary::localize(&majorelle(), "fr");

        assert_eq!(summary.name, "Jardin Majorelle");
        assert_eq!(summary.href, "/destinations/marrakech/places/majorelle");
        assert_eq!(summary.cover_image.as_deref(), Some("blue.jpg"));
    }

    #[test]
    fn test_detail_drops_empty_tips_and_wraps_gallery() {
        let detail = PlaceDetail::localize(majorelle(), "ar", Some(5));

        assert_eq!(detail.name, "Majorelle Garden");
        assert_eq!(detail.tips, vec!["Go early".to_string()]);
        assert_eq!(detail.gallery.current, 1);
        assert_eq!(detail.gallery.next, 0);
        assert_eq!(detail.destination_href, "/destinations/marrakech");
    }

    #[test]
    fn test_detail_serializes_type_field() {
        let json = serde_json::to_value(PlaceDetail::localize(majorelle(), "en", None)).unwrap();

        assert_eq!(json["type"], "garden");
        assert_eq!(json["entranceFee"], "150 MAD");
    }
}
