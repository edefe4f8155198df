//! 장소 핸들러
//!
//! 여행지 scope(`/api/v1/destinations`) 아래에 등록됩니다.
//!
//! - `GET /{slug}/places?category=` - 장소 목록
//! - `GET /{slug}/places/{place_id}` - 장소 상세
//! - `GET /{slug}/map` - 지도 마커와 뷰포트

use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::ContentQuery;
use crate::handlers::resolve_request;
use crate::services::places::PlaceService;

#[get("/{slug}/places")]
pub async fn list_places(
    req: HttpRequest,
    slug: web::Path<String>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;

    let service = ServiceLocator::resolve::<PlaceService>()?;
    let places = service.list(&slug, &lang, query.category_filter()).await?;

    Ok(HttpResponse::Ok().json(places))
}

#[get("/{slug}/places/{place_id}")]
pub async fn get_place(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;
    let (slug, place_id) = path.into_inner();

    let service = ServiceLocator::resolve::<PlaceService>()?;
    let place = service
        .detail(&slug, &place_id, &lang, query.image_index())
        .await?;

    Ok(HttpResponse::Ok().json(place))
}

/// 좌표가 없는 장소는 마커에서 빠집니다. 마커가 없으면 모로코 전체 뷰포트입니다.
#[get("/{slug}/map")]
pub async fn get_destination_map(
    req: HttpRequest,
    slug: web::Path<String>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;

    let service = ServiceLocator::resolve::<PlaceService>()?;
    let map = service.map(&slug, &lang).await?;

    Ok(HttpResponse::Ok().json(map))
}
