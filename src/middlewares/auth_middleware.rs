//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 베어러 토큰을 검증하고 사용자 정보를
//! 요청 extension에 넣습니다. 핸들러는 [`AuthenticatedUser`] 또는
//! [`OptionalUser`] 추출자로 꺼내 씁니다.
//!
//! | 모드 | 토큰 없음/잘못됨 | 토큰 정상 |
//! |------|------------------|-----------|
//! | `Required` | 401 응답, 핸들러 호출 안 함 | 사용자 정보 저장 |
//! | `Optional` | 그대로 진행 | 사용자 정보 저장 |
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/session")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::sessions::sign_in)
//! );
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser
//! [`OptionalUser`]: crate::domain::models::auth::OptionalUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어 팩토리
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 유효한 토큰이 없으면 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 있으면 검증하고, 없거나 잘못되었어도 요청을 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::services::auth::TokenService;
    use crate::test_support;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use std::sync::Arc;

    fn register_token_service() -> Arc<TokenService> {
        test_support::token_service()
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.0.map(|u| u.user_id).unwrap_or_else(|| "guest".to_string()))
    }

    #[actix_web::test]
    async fn test_factory_modes() {
        assert_eq!(AuthMiddleware::required().mode, AuthMode::Required);
        assert_eq!(AuthMiddleware::optional().mode, AuthMode::Optional);
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        register_token_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let tokens = register_token_service();
        let token = tokens.issue_access_token("amina", None).unwrap();
        let app = test::init_service(
            App::new().service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, request).await;

        assert_eq!(body, "amina");
    }

    #[actix_web::test]
    async fn test_optional_lets_guests_through() {
        register_token_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/maybe")
                    .wrap(AuthMiddleware::optional())
                    .route("", web::get().to(maybe)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/maybe")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let body = test::call_and_read_body(&app, request).await;

        assert_eq!(body, "guest");
    }
}
