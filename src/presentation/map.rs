//! 지도 마커와 뷰포트 계산
//!
//! 지도 SDK에는 좌표 목록과 그 좌표를 모두 담는 뷰포트를 넘깁니다.
//! 마커를 선택하면 클라이언트는 마커의 `href`로 이동합니다.

use serde::Serialize;

use crate::domain::entities::Place;
use crate::domain::models::Coordinates;

/// 좌표가 하나도 없을 때 보여줄 모로코 전체 영역
const MOROCCO_SOUTH_WEST: Coordinates = Coordinates { lat: 27.6, lng: -13.2 };
const MOROCCO_NORTH_EAST: Coordinates = Coordinates { lat: 35.95, lng: -0.99 };

/// 지점이 하나뿐이거나 모두 같은 위치일 때 주는 최소 여백 (도)
const MIN_PADDING_DEGREES: f64 = 0.01;
const PADDING_RATIO: f64 = 0.1;

/// 여행지 상세 경로
pub fn destination_path(slug: &str) -> String {
    format!("/destinations/{}", urlencoding::encode(slug))
}

/// 장소 상세 경로: `/destinations/{slug}/places/{placeId}`
pub fn place_path(slug: &str, place_id: &str) -> String {
    format!(
        "{}/places/{}",
        destination_path(slug),
        urlencoding::encode(place_id)
    )
}

/// 지도에 맞출 영역
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewport {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
    pub center: Coordinates,
}

impl MapViewport {
    /// 모든 지점을 담는 뷰포트를 계산합니다.
    ///
    /// 경계 상자에 범위의 10%(최소 0.01도) 여백을 더합니다.
    /// 지점이 없으면 모로코 전체 영역을 반환합니다.
    pub fn fit(points: &[Coordinates]) -> Self {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return Self::from_bounds(MOROCCO_SOUTH_WEST, MOROCCO_NORTH_EAST);
        };

        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);

        for point in iter {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
        }

        let lat_pad = ((max_lat - min_lat) * PADDING_RATIO).max(MIN_PADDING_DEGREES);
        let lng_pad = ((max_lng - min_lng) * PADDING_RATIO).max(MIN_PADDING_DEGREES);

        Self::from_bounds(
            Coordinates::new((min_lat - lat_pad).max(-90.0), (min_lng - lng_pad).max(-180.0)),
            Coordinates::new((max_lat + lat_pad).min(90.0), (max_lng + lng_pad).min(180.0)),
        )
    }

    fn from_bounds(south_west: Coordinates, north_east: Coordinates) -> Self {
        Self {
            center: Coordinates::new(
                (south_west.lat + north_east.lat) / 2.0,
                (south_west.lng + north_east.lng) / 2.0,
            ),
            south_west,
            north_east,
        }
    }

    pub fn contains(&self, point: &Coordinates) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}

/// 장소 마커
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub place_id: String,
    pub name: String,
    pub category: String,
    pub position: Coordinates,
    pub href: String,
}

/// 여행지 지도 화면
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub viewport: MapViewport,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// 좌표가 있는 장소만 마커로 만들고, 그 마커들에 맞춰 뷰포트를 계산합니다.
    pub fn for_places(slug: &str, places: &[Place], lang: &str) -> Self {
        let markers: Vec<MapMarker> = places
            .iter()
            .filter_map(|place| {
                place.map_position().map(|position| MapMarker {
                    place_id: place.id.clone(),
                    name: place.name.resolve(lang).to_string(),
                    category: place.category.clone(),
                    position,
                    href: place_path(slug, &place.id),
                })
            })
            .collect();

        let points: Vec<Coordinates> = markers.iter().map(|marker| marker.position).collect();

        Self {
            viewport: MapViewport::fit(&points),
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LocalizedText;

    fn place(id: &str, coordinates: Option<Coordinates>) -> Place {
        Place {
            id: id.to_string(),
            destination_slug: "marrakech".to_string(),
            name: LocalizedText::single("en", format!("Place {}", id)).with("fr", format!("Lieu {}", id)),
            description: LocalizedText::default(),
            category: "attraction".to_string(),
            kind: "garden".to_string(),
            coordinates,
            images: vec![],
            rating: None,
            review_count: None,
            entrance_fee: None,
            tips: vec![],
            best_time_to_visit: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_place_path_scheme() {
        assert_eq!(place_path("marrakech", "majorelle"), "/destinations/marrakech/places/majorelle");
    }

    #[test]
    fn test_place_path_encodes_segments() {
        assert_eq!(place_path("a b", "x/y"), "/destinations/a%20b/places/x%2Fy");
    }

    #[test]
    fn test_fit_contains_every_point() {
        let points = [
            Coordinates::new(31.6295, -7.9811),
            Coordinates::new(34.0209, -6.8416),
            Coordinates::new(30.4278, -9.5981),
        ];
        let viewport = MapViewport::fit(&points);

        for point in &points {
            assert!(viewport.contains(point));
        }
        assert!(viewport.south_west.lat < 30.4278);
        assert!(viewport.north_east.lng > -6.8416);
    }

    #[test]
    fn test_fit_single_point_has_minimum_padding() {
        let point = Coordinates::new(31.0, -4.0);
        let viewport = MapViewport::fit(&[point]);

        assert!(viewport.contains(&point));
        assert!(viewport.north_east.lat - viewport.south_west.lat >= 2.0 * MIN_PADDING_DEGREES - 1e-9);
        assert_eq!(viewport.center, point);
    }

    #[test]
    fn test_fit_empty_shows_morocco() {
        let viewport = MapViewport::fit(&[]);
        assert!(viewport.contains(&Coordinates::new(31.7917, -7.0926)));
    }

    #[test]
    fn test_map_view_skips_places_without_coordinates() {
        let places = vec![
            place("majorelle", Some(Coordinates::new(31.6417, -8.0033))),
            place("hidden", None),
            place("broken", Some(Coordinates::new(120.0, 0.0))),
        ];

        let view = MapView::for_places("marrakech", &places, "fr");

        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].name, "Lieu majorelle");
        assert_eq!(view.markers[0].href, "/destinations/marrakech/places/majorelle");
        assert!(view.viewport.contains(&view.markers[0].position));
    }
}
