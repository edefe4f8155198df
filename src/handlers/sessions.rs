//! 로그인 세션 핸들러
//!
//! 베어러 토큰으로 인증된 사용자가 세션을 열면 서버는 그 사용자의 즐겨찾기
//! 문서 구독을 시작합니다. 이후 즐겨찾기 요청은 `X-Session-Id` 헤더로 세션을 지정합니다.
//!
//! - `POST /api/v1/session` - 세션 열기 (201)
//! - `DELETE /api/v1/session` - 세션 닫기 (204)

use std::time::Duration;

use actix_web::{delete, post, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::{FavoritesResponse, SessionResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::favorites::SessionManager;

/// 세션 ID 헤더
pub const SESSION_HEADER: &str = "X-Session-Id";

/// 첫 스냅샷을 기다리는 최대 시간. 지나면 `loaded: false`로 응답합니다.
const FIRST_SNAPSHOT_WAIT: Duration = Duration::from_millis(500);

/// `X-Session-Id` 헤더를 읽습니다. 헤더가 없으면 `None`, 형식이 틀리면 400.
pub(crate) fn session_id(req: &HttpRequest) -> Result<Option<Uuid>, AppError> {
    let Some(value) = req.headers().get(SESSION_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .map(Some)
        .ok_or_else(|| AppError::ValidationError(format!("{} must be a UUID", SESSION_HEADER)))
}

#[post("")]
pub async fn sign_in(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let sessions = ServiceLocator::resolve::<SessionManager>()?;
    let (session_id, favorites) = sessions.sign_in(&user.user_id);

    if tokio::time::timeout(FIRST_SNAPSHOT_WAIT, favorites.loaded())
        .await
        .is_err()
    {
        log::debug!("첫 스냅샷 대기 시간 초과: {}", user.user_id);
    }

    Ok(HttpResponse::Created().json(SessionResponse {
        session_id,
        user_id: user.user_id,
        favorites: FavoritesResponse::from(&favorites.state()),
    }))
}

#[delete("")]
pub async fn sign_out(req: HttpRequest, user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let session_id = session_id(&req)?
        .ok_or_else(|| AppError::ValidationError(format!("{} header is required", SESSION_HEADER)))?;

    let sessions = ServiceLocator::resolve::<SessionManager>()?;
    if !sessions.sign_out(&session_id, &user.user_id) {
        return Err(AppError::NotFound(format!("session '{}'", session_id)));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::AuthMiddleware;
    use crate::test_support;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_sign_in_returns_session_with_current_favorites() {
        test_support::favorites_store().replace("session-amina", vec!["p1".to_string()]);
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1/session")
                    .wrap(AuthMiddleware::required())
                    .service(sign_in)
                    .service(sign_out),
            ),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/v1/session")
            .insert_header(("Authorization", test_support::bearer("session-amina")))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["userId"], "session-amina");
        assert_eq!(body["favorites"]["signedIn"], true);
        assert_eq!(body["favorites"]["favorites"][0], "p1");

        let session = body["sessionId"].as_str().unwrap().to_string();
        let request = test::TestRequest::delete()
            .uri("/api/v1/session")
            .insert_header(("Authorization", test_support::bearer("session-amina")))
            .insert_header((SESSION_HEADER, session.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, request).await.status(), StatusCode::NO_CONTENT);

        let request = test::TestRequest::delete()
            .uri("/api/v1/session")
            .insert_header(("Authorization", test_support::bearer("session-amina")))
            .insert_header((SESSION_HEADER, session))
            .to_request();
        assert_eq!(test::call_service(&app, request).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_sign_in_requires_token() {
        test_support::token_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/api/v1/session")
                    .wrap(AuthMiddleware::required())
                    .service(sign_in),
            ),
        )
        .await;

        let request = test::TestRequest::post().uri("/api/v1/session").to_request();
        assert_eq!(test::call_service(&app, request).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_malformed_session_header_is_rejected() {
        let req = test::TestRequest::default()
            .insert_header((SESSION_HEADER, "not-a-uuid"))
            .to_http_request();
        assert!(matches!(session_id(&req), Err(AppError::ValidationError(_))));

        let req = test::TestRequest::default().to_http_request();
        assert!(matches!(session_id(&req), Ok(None)));
    }
}
