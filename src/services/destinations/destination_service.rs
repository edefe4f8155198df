//! # 여행지 서비스 구현
//!
//! 여행지 문서를 요청 언어로 풀어 목록 카드와 상세 페이지 뷰 모델을 만듭니다.
//!
//! ```text
//! Handler ──▶ DestinationService ──▶ DestinationRepository ──▶ Redis / MongoDB
//!                  │
//!                  └─ LocalizedText::resolve, GalleryView
//! ```

use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::{
        dto::{DestinationDetail, DestinationSummary},
        entities::Destination,
    },
    repositories::destinations::DestinationRepository,
    utils::string_utils::validate_slug,
};

/// 여행지 비즈니스 로직 서비스
pub struct DestinationService {
    destination_repo: Arc<DestinationRepository>,
}

impl DestinationService {
    pub fn new(destination_repo: Arc<DestinationRepository>) -> Self {
        Self { destination_repo }
    }

    /// 모든 여행지의 목록 카드
    pub async fn list(&self, lang: &str) -> Result<Vec<DestinationSummary>, AppError> {
        let destinations = self.destination_repo.find_all().await?;

        log::debug!("여행지 {}개 조회 ({})", destinations.len(), lang);

        Ok(destinations
            .iter()
            .map(|destination| DestinationSummary::localize(destination, lang))
            .collect())
    }

    /// slug로 여행지를 찾습니다. 없으면 `NotFound`.
    ///
    /// 페이지 렌더링은 이 에러로 "찾을 수 없음" 응답을 만듭니다.
    pub async fn require(&self, slug: &str) -> Result<Destination, AppError> {
        let slug = validate_slug(slug)?;

        self.destination_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("destination '{}'", slug)))
    }

    /// 여행지 상세 페이지
    ///
    /// * `image` - 갤러리에서 보여줄 이미지 인덱스 (범위를 벗어나면 순환)
    pub async fn detail(
        &self,
        slug: &str,
        lang: &str,
        image: Option<usize>,
    ) -> Result<DestinationDetail, AppError> {
        let destination = self.require(slug).await?;
        Ok(DestinationDetail::localize(destination, lang, image))
    }

    /// 캐시를 비웁니다. 콘텐츠가 외부에서 바뀐 뒤 부팅할 때 호출합니다.
    pub async fn refresh_cache(&self) -> Result<usize, AppError> {
        self.destination_repo.invalidate_cache().await
    }
}
