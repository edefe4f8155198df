//! 즐겨찾기 핸들러
//!
//! 로그아웃 상태에서도 호출할 수 있도록 `AuthMiddleware::optional()` 아래에 등록됩니다.
//! 세션은 `X-Session-Id` 헤더로 지정하며, 토큰의 사용자와 세션의 사용자가 같아야 합니다.
//!
//! - `GET /api/v1/favorites` - 세션의 즐겨찾기 상태
//! - `POST /api/v1/favorites/{place_id}/toggle` - 즐겨찾기 뒤집기

use std::sync::Arc;

use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::{ContentQuery, FavoritesResponse, ToggleResponse};
use crate::domain::models::auth::OptionalUser;
use crate::handlers::{resolve_request, sessions::session_id};
use crate::services::favorites::{FavoritesError, FavoritesSync, SessionManager};
use crate::utils::string_utils::validate_place_id;

/// 요청의 사용자와 세션으로 동기화기를 찾습니다. 어느 쪽이든 없으면 `None`.
fn find_session(req: &HttpRequest, user: &OptionalUser) -> Result<Option<Arc<FavoritesSync>>, AppError> {
    let (Some(user), Some(session_id)) = (user.0.as_ref(), session_id(req)?) else {
        return Ok(None);
    };

    let sessions = ServiceLocator::resolve::<SessionManager>()?;
    Ok(sessions.find(&session_id, &user.user_id))
}

#[get("")]
pub async fn get_favorites(req: HttpRequest, user: OptionalUser) -> Result<HttpResponse, AppError> {
    let response = match find_session(&req, &user)? {
        Some(favorites) => FavoritesResponse::from(&favorites.state()),
        None => FavoritesResponse::signed_out(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// 즐겨찾기를 뒤집고 원격 쓰기가 끝날 때까지 기다립니다.
///
/// 로그인 세션이 없으면 401, 쓰기가 실패하거나 시간을 넘기면 로컬 상태를
/// 되돌린 뒤 503을 반환합니다.
#[post("/{place_id}/toggle")]
pub async fn toggle_favorite(
    req: HttpRequest,
    user: OptionalUser,
    place_id: web::Path<String>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let lang = resolve_request(&req, &query)?;
    let place_id = validate_place_id(&place_id)?;

    let favorites = find_session(&req, &user)?.ok_or(FavoritesError::Unauthenticated)?;

    let pending = favorites.toggle(&place_id)?;
    log::debug!(
        "⭐ 즐겨찾기 {} → {}",
        pending.place_id(),
        if pending.favorited() { "추가" } else { "제거" }
    );
    let favorited = pending.settle().await?;

    Ok(HttpResponse::Ok().json(ToggleResponse::new(&place_id, favorited, &lang)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::sessions::{self, SESSION_HEADER};
    use crate::middlewares::AuthMiddleware;
    use crate::test_support;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    macro_rules! favorites_app {
        () => {
            test::init_service(
                App::new()
                    .service(
                        web::scope("/api/v1/session")
                            .wrap(AuthMiddleware::required())
                            .service(sessions::sign_in)
                            .service(sessions::sign_out),
                    )
                    .service(
                        web::scope("/api/v1/favorites")
                            .wrap(AuthMiddleware::optional())
                            .service(get_favorites)
                            .service(toggle_favorite),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_guest_sees_signed_out_state() {
        test_support::token_service();
        let app = favorites_app!();

        let request = test::TestRequest::get().uri("/api/v1/favorites").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["signedIn"], false);
        assert_eq!(body["favorites"].as_array().map(Vec::len), Some(0));
    }

    #[actix_web::test]
    async fn test_guest_toggle_is_unauthorized() {
        test_support::token_service();
        let app = favorites_app!();

        let request = test::TestRequest::post()
            .uri("/api/v1/favorites/p1/toggle")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_toggle_flow_writes_through_and_stops_after_sign_out() {
        let store = test_support::favorites_store();
        let user = "toggle-youssef";
        let app = favorites_app!();

        let request = test::TestRequest::post()
            .uri("/api/v1/session")
            .insert_header(("Authorization", test_support::bearer(user)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        let session = body["sessionId"].as_str().unwrap().to_string();

        let request = test::TestRequest::post()
            .uri("/api/v1/favorites/riad-42/toggle?lang=fr")
            .insert_header(("Authorization", test_support::bearer(user)))
            .insert_header((SESSION_HEADER, session.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["placeId"], "riad-42");
        assert_eq!(body["favorited"], true);
        assert_eq!(body["actionLabel"], "Retirer des favoris");
        assert_eq!(store.favorites_of(user), vec!["riad-42".to_string()]);

        let request = test::TestRequest::post()
            .uri("/api/v1/favorites/riad-42/toggle")
            .insert_header(("Authorization", test_support::bearer(user)))
            .insert_header((SESSION_HEADER, session.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["favorited"], false);
        assert!(store.favorites_of(user).is_empty());

        let request = test::TestRequest::delete()
            .uri("/api/v1/session")
            .insert_header(("Authorization", test_support::bearer(user)))
            .insert_header((SESSION_HEADER, session.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, request).await.status(), StatusCode::NO_CONTENT);

        let request = test::TestRequest::post()
            .uri("/api/v1/favorites/riad-42/toggle")
            .insert_header(("Authorization", test_support::bearer(user)))
            .insert_header((SESSION_HEADER, session))
            .to_request();
        assert_eq!(test::call_service(&app, request).await.status(), StatusCode::UNAUTHORIZED);
        assert!(store.favorites_of(user).is_empty());
    }

    #[actix_web::test]
    async fn test_session_of_another_user_is_not_usable() {
        test_support::token_service();
        let (session_id, _) = test_support::session_manager().sign_in("owner-hamza");
        let app = favorites_app!();

        let request = test::TestRequest::post()
            .uri("/api/v1/favorites/p9/toggle")
            .insert_header(("Authorization", test_support::bearer("intruder-sara")))
            .insert_header((SESSION_HEADER, session_id.to_string()))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(test_support::favorites_store().favorites_of("owner-hamza").is_empty());
    }
}
