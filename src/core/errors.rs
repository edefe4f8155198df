//! # Application Error Handling System
//!
//! 여행 콘텐츠 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 계층의 에러를 [`AppError`] 하나로 모으고, `actix_web::ResponseError`
//! 구현을 통해 일관된 JSON 에러 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 slug, 장소 ID, 쿼리 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인하지 않은 즐겨찾기 요청, 잘못된 토큰 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 여행지 / 장소 |
//! | `WriteFailure` | 503 Service Unavailable | 즐겨찾기 쓰기 실패 (로컬 롤백 후) |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! pub async fn get_by_slug(&self, slug: &str) -> Result<Destination, AppError> {
//!     self.destination_repo
//!         .find_by_slug(slug)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("destination '{}'", slug)))
//! }
//! ```

use thiserror::Error;

use crate::services::favorites::FavoritesError;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파하면 자동으로 HTTP 응답이 됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 오류
/// - `RedisError`: Redis 캐시 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `NotFound`: 요청한 여행지 / 장소가 없음
/// - `WriteFailure`: 즐겨찾기 원격 쓰기 실패
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 로그인 필요, 토큰 만료 등
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 중 발생한 오류
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 서버와의 통신 오류
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 클라이언트 입력이 형식 요구사항을 만족하지 않음
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스가 존재하지 않음
    ///
    /// 여행지 slug에 해당하는 문서가 없으면 페이지 렌더링이 이 에러로 끝납니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패
    ///
    /// 로그인하지 않은 상태에서 즐겨찾기를 토글하면 이 에러가 되고,
    /// 클라이언트는 로그인 안내를 표시합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 즐겨찾기 쓰기 실패
    ///
    /// 로컬 상태는 이미 롤백된 뒤이므로 사용자에게는 일반적인 실패 안내만 보여줍니다.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::WriteFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        match err {
            FavoritesError::Unauthenticated => {
                AppError::AuthenticationError("Sign in to save favorites".to_string())
            }
            FavoritesError::WriteFailure(reason) => {
                log::warn!("즐겨찾기 쓰기 실패: {}", reason);
                AppError::WriteFailure("Could not update favorites, please try again".to_string())
            }
            FavoritesError::SubscriptionFailure(reason) => AppError::DatabaseError(reason),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 애플리케이션 결과 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 에러에 컨텍스트를 덧붙이는 확장 trait
///
/// ```rust,ignore
/// let doc = mongodb::bson::from_document::<Place>(raw)
///     .context("place document is malformed")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
