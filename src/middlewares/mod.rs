//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <JWT>` 헤더 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/favorites")
//!             .wrap(AuthMiddleware::optional())   // 로그아웃 상태도 허용
//!             .service(handlers::favorites::get_favorites)
//!     )
//!     .service(
//!         web::scope("/api/v1/session")
//!             .wrap(AuthMiddleware::required())   // 토큰 필수
//!             .service(handlers::sessions::sign_in)
//!     );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
