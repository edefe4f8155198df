//! 모로코 여행 콘텐츠 서비스 백엔드
//!
//! 여행지와 장소 문서를 요청 언어로 풀어 제공하고, 로그인한 사용자의
//! 즐겨찾기를 낙관적으로 토글하는 서비스입니다.
//!
//! # Features
//!
//! - **콘텐츠**: 여행지 목록/상세, 장소 목록/상세, 카테고리 필터
//! - **다국어**: `?lang=` 또는 `Accept-Language`, 번역이 없으면 영어로 대체
//! - **갤러리 / 지도**: 순환 이미지 인덱스, 마커와 뷰포트 계산
//! - **즐겨찾기**: 로컬 상태를 먼저 뒤집고 원격 쓰기가 실패하면 롤백
//! - **MongoDB**: 콘텐츠와 즐겨찾기 문서 저장, change stream 구독
//! - **Redis**: 콘텐츠 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────┐
//! │    Services     │ ──▶ │ Presentation │ ← 갤러리, 지도, 번역
//! └─────────────────┘     └──────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, FavoritesStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use morocco_travel_service::core::registry::ServiceLocator;
//! use morocco_travel_service::services::favorites::SessionManager;
//!
//! let sessions = ServiceLocator::resolve::<SessionManager>()?;
//! let (session_id, favorites) = sessions.sign_in("amina");
//!
//! let pending = favorites.toggle("riad-42")?;   // 로컬 상태는 이미 뒤집힘
//! let favorited = pending.settle().await?;     // 실패하면 롤백 후 에러
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod presentation;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
