//! # 문자열 유틸리티
//!
//! 경로 파라미터(slug, 장소 ID)와 쿼리 문자열 검증에 쓰는 공통 함수들입니다.

use crate::core::errors::AppError;

const MAX_SLUG_LENGTH: usize = 120;
const MAX_ID_LENGTH: usize = 128;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Fes  ", "name").unwrap(), "Fes");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// `None`이거나 공백뿐이면 `None`, 아니면 앞뒤 공백을 제거한 값을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 여행지 slug 검증
///
/// 소문자로 정규화한 뒤 `[a-z0-9-]`만 허용합니다.
pub fn validate_slug(value: &str) -> Result<String, AppError> {
    let slug = validate_required_string(value, "slug")?.to_lowercase();

    if slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::ValidationError(format!(
            "slug must be at most {} characters",
            MAX_SLUG_LENGTH
        )));
    }

    if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::ValidationError(
            "slug may only contain letters, digits and '-'".to_string(),
        ));
    }

    Ok(slug)
}

/// 장소 ID 검증
///
/// 문서 ID는 대소문자를 구분하므로 그대로 두고, 영숫자와 `-`, `_`만 허용합니다.
pub fn validate_place_id(value: &str) -> Result<String, AppError> {
    let id = validate_required_string(value, "place id")?;

    if id.len() > MAX_ID_LENGTH {
        return Err(AppError::ValidationError(format!(
            "place id must be at most {} characters",
            MAX_ID_LENGTH
        )));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(AppError::ValidationError(
            "place id may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  Fes  ", "name").unwrap(), "Fes");
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  riad ".to_string())), Some("riad".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_validate_slug_normalizes_case() {
        assert_eq!(validate_slug(" Merzouga-Dunes ").unwrap(), "merzouga-dunes");
    }

    #[test]
    fn test_validate_slug_rejects_bad_characters() {
        assert!(validate_slug("fes/medina").is_err());
        assert!(validate_slug("fès").is_err());
        assert!(validate_slug("").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_place_id() {
        assert_eq!(validate_place_id("Jardin_Majorelle-01").unwrap(), "Jardin_Majorelle-01");
        assert!(validate_place_id("a b").is_err());
        assert!(validate_place_id("../etc").is_err());
        assert!(validate_place_id(" ").is_err());
    }
}
