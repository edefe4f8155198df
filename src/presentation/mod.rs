//! # Presentation Helpers
//!
//! 정규화된 데이터를 화면용 뷰 모델로 바꿀 때 쓰는 작은 알고리즘들입니다.
//!
//! - [`carousel`] - 이미지 갤러리의 순환 인덱스 계산
//! - [`i18n`] - 요청 언어 결정과 정적 UI 번역 테이블
//! - [`map`] - 지도 마커, 모든 지점을 담는 뷰포트, 장소 상세 경로

pub mod carousel;
pub mod i18n;
pub mod map;
