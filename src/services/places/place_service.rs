//! # 장소 서비스 구현
//!
//! 여행지에 속한 장소 목록, 장소 상세, 지도 화면을 만듭니다.
//! 모든 요청은 먼저 여행지 slug를 확인하므로, 없는 여행지는 `NotFound`입니다.

use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::{
        dto::{DestinationMapResponse, PlaceDetail, PlaceListResponse, PlaceSummary},
        entities::Place,
    },
    repositories::places::PlaceRepository,
    services::destinations::DestinationService,
    utils::string_utils::validate_place_id,
};

/// 카테고리가 일치하는 장소만 남깁니다 (대소문자 무시). 필터가 없으면 전부.
pub fn filter_by_category(places: Vec<Place>, category: Option<&str>) -> Vec<Place> {
    match category {
        Some(category) => places
            .into_iter()
            .filter(|place| place.category.eq_ignore_ascii_case(category))
            .collect(),
        None => places,
    }
}

/// 장소 비즈니스 로직 서비스
pub struct PlaceService {
    destination_service: Arc<DestinationService>,
    place_repo: Arc<PlaceRepository>,
}

impl PlaceService {
    pub fn new(destination_service: Arc<DestinationService>, place_repo: Arc<PlaceRepository>) -> Self {
        Self {
            destination_service,
            place_repo,
        }
    }

    /// 여행지의 장소 목록
    ///
    /// * `category` - `attraction`, `accommodation`, `transportation` 등
    pub async fn list(
        &self,
        slug: &str,
        lang: &str,
        category: Option<String>,
    ) -> Result<PlaceListResponse, AppError> {
        let destination = self.destination_service.require(slug).await?;
        let places = self.place_repo.find_by_destination(&destination.slug).await?;
        let places = filter_by_category(places, category.as_deref());

        Ok(PlaceListResponse {
            destination_name: destination.name.resolve(lang).to_string(),
            places: places
                .iter()
                .map(|place| PlaceSummary::localize(place, lang))
                .collect(),
            destination_slug: destination.slug,
            category,
        })
    }

    /// 장소 상세 페이지
    pub async fn detail(
        &self,
        slug: &str,
        place_id: &str,
        lang: &str,
        image: Option<usize>,
    ) -> Result<PlaceDetail, AppError> {
        let destination = self.destination_service.require(slug).await?;
        let place_id = validate_place_id(place_id)?;

        let place = self
            .place_repo
            .find_by_id(&destination.slug, &place_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("place '{}' in '{}'", place_id, destination.slug))
            })?;

        Ok(PlaceDetail::localize(place, lang, image))
    }

    /// 여행지 지도: 좌표가 있는 장소의 마커와 그 마커를 모두 담는 뷰포트
    pub async fn map(&self, slug: &str, lang: &str) -> Result<DestinationMapResponse, AppError> {
        let destination = self.destination_service.require(slug).await?;
        let places = self.place_repo.find_by_destination(&destination.slug).await?;

        let response = DestinationMapResponse::localize(&destination, &places, lang);
        log::debug!(
            "지도 마커 {}개 / 장소 {}개 ({})",
            response.map.markers.len(),
            places.len(),
            destination.slug
        );

        Ok(response)
    }

    pub async fn refresh_cache(&self) -> Result<usize, AppError> {
        self.place_repo.invalidate_cache().await
    }
}
