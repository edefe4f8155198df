use serde::{Deserialize, Serialize};

/// 정규화된 타임스탬프
///
/// [`normalize`](crate::utils::normalize::normalize)가 BSON `DateTime` / `Timestamp`를
/// 이 형태(`{ seconds, nanoseconds, iso }`)의 문서로 바꿉니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainTimestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
    #[serde(default)]
    pub iso: Option<String>,
}
