//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 경로/쿼리를 검증하고, 서비스를 [`ServiceLocator`]에서 꺼내 호출한 뒤
//! DTO를 JSON으로 돌려줍니다. 에러는 `?`로 전파하면 [`AppError`]가 응답으로 바꿉니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (브라우저, 모바일 앱)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services / FavoritesSync                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / FavoritesStore               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`destinations`] | `/api/v1/destinations`, `/api/v1/destinations/{slug}` |
//! | [`places`] | `/api/v1/destinations/{slug}/places[/{place_id}]`, `/api/v1/destinations/{slug}/map` |
//! | [`i18n`] | `/api/v1/i18n/{lang}` |
//! | [`sessions`] | `/api/v1/session` |
//! | [`favorites`] | `/api/v1/favorites`, `/api/v1/favorites/{place_id}/toggle` |
//!
//! ## 요청 언어
//!
//! `?lang=` → `Accept-Language` 첫 태그 → `en` 순으로 정합니다.
//!
//! [`ServiceLocator`]: crate::core::registry::ServiceLocator
//! [`AppError`]: crate::core::errors::AppError

use actix_web::http::header::ACCEPT_LANGUAGE;
use actix_web::HttpRequest;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::ContentQuery;

pub mod destinations;
pub mod places;
pub mod i18n;
pub mod sessions;
pub mod favorites;

/// 쿼리를 검증하고 요청 언어를 정합니다.
pub(crate) fn resolve_request(req: &HttpRequest, query: &ContentQuery) -> Result<String, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let accept_language = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    Ok(crate::presentation::i18n::resolve_language(query.lang.as_deref(), accept_language))
}
