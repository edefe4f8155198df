//! 여행지 핸들러
//!
//! - `GET /api/v1/destinations` - 여행지 목록 카드
//! - `GET /api/v1/destinations/{slug}` - 여행지 상세 (갤러리 포함)

use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::ContentQuery;
use crate::handlers::resolve_request;
use crate::services::destinations::DestinationService;

#[get("")]
pub async fn list_destinations(
    req: HttpRequest,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;

    let service = ServiceLocator::resolve::<DestinationService>()?;
    let destinations = service.list(&lang).await?;

    Ok(HttpResponse::Ok().json(destinations))
}

/// 여행지 상세
///
/// `?image=n`으로 갤러리의 현재 이미지를 고릅니다. 범위를 벗어나면 순환합니다.
#[get("/{slug}")]
pub async fn get_destination(
    req: HttpRequest,
    slug: web::Path<String>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;

    let service = ServiceLocator::resolve::<DestinationService>()?;
    let destination = service.detail(&slug, &lang, query.image_index()).await?;

    Ok(HttpResponse::Ok().json(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_malformed_language_is_rejected_before_lookup() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1/destinations").service(get_destination)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/api/v1/destinations/essaouira?lang=fr%3Bdrop")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
