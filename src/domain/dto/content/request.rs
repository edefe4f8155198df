//! 콘텐츠 조회 쿼리 DTO
//!
//! 여행지/장소 엔드포인트가 공통으로 받는 쿼리 문자열입니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 갤러리에 둘 수 있는 최대 이미지 인덱스
const MAX_IMAGE_INDEX: usize = 500;

/// `?lang=fr&image=2&category=accommodation`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContentQuery {
    /// 언어 태그 (`en`, `fr-CA` ...). 없으면 `Accept-Language` 헤더를 봅니다.
    #[validate(length(min = 2, max = 35, message = "lang must be a language tag"))]
    #[validate(custom(function = "validate_language_tag"))]
    pub lang: Option<String>,

    /// 갤러리에서 보여줄 이미지 인덱스 (범위를 벗어나면 순환)
    #[validate(range(max = 500, message = "image index is too large"))]
    pub image: Option<usize>,

    /// 장소 목록 필터 (`attraction`, `accommodation`, `transportation` ...)
    #[validate(length(min = 1, max = 40, message = "category must be 1-40 characters"))]
    pub category: Option<String>,
}

impl ContentQuery {
    pub fn image_index(&self) -> Option<usize> {
        self.image.filter(|index| *index <= MAX_IMAGE_INDEX)
    }

    /// 공백을 제거하고 소문자로 맞춘 카테고리
    pub fn category_filter(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .map(str::to_lowercase)
    }
}

/// 언어 태그 형식 검증 (영문자, 숫자, `-`, `_`)
fn validate_language_tag(tag: &str) -> Result<(), ValidationError> {
    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::new("invalid_language_tag")
            .with_message("lang may only contain letters, digits, '-' and '_'".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_valid() {
        assert!(ContentQuery::default().validate().is_ok());
    }

    #[test]
    fn test_language_tag_validation() {
        let query = ContentQuery {
            lang: Some("fr-CA".to_string()),
            ..ContentQuery::default()
        };
        assert!(query.validate().is_ok());

        let query = ContentQuery {
            lang: Some("fr;drop".to_string()),
            ..ContentQuery::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_image_index_limit() {
        let query = ContentQuery {
            image: Some(10_000),
            ..ContentQuery::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_category_filter_is_normalized() {
        let query = ContentQuery {
            category: Some(" Accommodation ".to_string()),
            ..ContentQuery::default()
        };
        assert_eq!(query.category_filter().as_deref(), Some("accommodation"));
    }
}
