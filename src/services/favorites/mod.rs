//! # 즐겨찾기 동기화 서비스
//!
//! 로그인한 사용자의 즐겨찾기 집합을 세션 단위로 보관하고,
//! 원격 문서 저장소와 낙관적(optimistic)으로 동기화합니다.
//!
//! ## 구성
//!
//! | 타입 | 역할 |
//! |------|------|
//! | [`FavoritesStore`] | 원격 저장소 경계 (`add`, `remove`, `subscribe`) |
//! | [`FavoritesSync`] | 세션 하나의 반응형 즐겨찾기 셀 + 실시간 구독 |
//! | [`FavoritesState`] | 셀에 담기는 값 (집합, 대기 중인 ID, 첫 스냅샷 수신 여부) |
//! | [`SessionManager`] | 세션 ID → `FavoritesSync` 매핑 |
//!
//! ## 토글 흐름
//!
//! ```text
//! toggle(p) ──▶ 로컬 집합에서 p 뒤집기 (즉시 보임, p는 pending)
//!     │
//!     └──▶ $addToSet / $pull ──┬── 성공: pending 해제
//!                              └── 실패/타임아웃: p만 이전 상태로 복원, WriteFailure
//!
//! 구독 스냅샷 ──▶ 로컬 집합 전체 교체 (항상 최종 기준)
//! ```

pub mod store;
pub mod synchronizer;
pub mod session;

pub use store::{FavoritesStore, FavoritesStream};
pub use synchronizer::{FavoritesState, FavoritesSync, Membership, PendingToggle};
pub use session::SessionManager;

use thiserror::Error;

/// 즐겨찾기 동기화 에러
///
/// HTTP 경계에서 [`AppError`](crate::core::errors::AppError)로 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FavoritesError {
    /// 로그인하지 않은 상태에서 토글을 시도함. 로컬 상태는 바뀌지 않습니다.
    #[error("not signed in")]
    Unauthenticated,

    /// 원격 쓰기가 거부되었거나 시간 안에 끝나지 않음. 로컬 상태는 복원된 뒤입니다.
    #[error("favorites write failed: {0}")]
    WriteFailure(String),

    /// 실시간 구독을 열지 못했거나 구독 중 오류가 발생함
    #[error("favorites subscription failed: {0}")]
    SubscriptionFailure(String),
}
