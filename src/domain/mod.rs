//! # Domain Layer Module
//!
//! 여행 콘텐츠 서비스의 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 문서 저장소가 소유하는 문서 (Destination, Place, UserFavorites)
//! ├── Models    - 값 객체 (LocalizedText, Coordinates, PlainTimestamp, 인증 정보)
//! └── DTOs      - 언어가 결정된 응답 뷰 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 데이터 흐름
//!
//! 1. 리포지토리가 MongoDB에서 원시 `Document`를 읽습니다.
//! 2. [`normalize`](crate::utils::normalize)가 저장소 고유 래퍼(`DateTime`, `ObjectId` 등)를
//!    평범한 값으로 바꿉니다.
//! 3. 정규화된 문서를 [`entities`]로 역직렬화합니다.
//! 4. 서비스가 요청 언어로 [`dto`] 뷰 모델을 만들어 응답합니다.

pub mod entities;
pub mod models;
pub mod dto;

pub use entities::*;
pub use models::*;
