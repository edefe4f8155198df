//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceLocator**: 애플리케이션 수명 동안 공유되는 인스턴스 보관소
//! - **명시적 등록**: `main`에서 생성한 `Arc<T>`를 타입 기준으로 등록
//! - **타입 기반 조회**: 핸들러에서 `ServiceLocator::get::<T>()`로 조회
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## 레지스트리에 들어가지 않는 것
//!
//! 즐겨찾기 상태는 세션 단위로 소유됩니다. 레지스트리에는 세션을 관리하는
//! [`SessionManager`](crate::services::favorites::SessionManager)만 등록되고,
//! 사용자별 즐겨찾기 셀은 로그인/로그아웃과 함께 생성되고 폐기됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // main.rs
//! let database = Arc::new(Database::new().await?);
//! let destination_repo = Arc::new(DestinationRepository::new(database.clone(), redis.clone()));
//! ServiceLocator::set(Arc::new(DestinationService::new(destination_repo)));
//!
//! // handlers
//! let service = ServiceLocator::get::<DestinationService>();
//! let destination = service.get_by_slug("merzouga").await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
