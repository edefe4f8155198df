//! 고정 UI 문구 번역 핸들러

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::presentation::i18n::{supported_language, translation_table, SUPPORTED_LANGUAGES};

/// `GET /api/v1/i18n/{lang}`
///
/// 지원하지 않는 언어는 영어 테이블을 돌려줍니다. 빠진 키도 영어로 채웁니다.
#[get("/api/v1/i18n/{lang}")]
pub async fn get_translations(lang: web::Path<String>) -> Result<HttpResponse, AppError> {
    if lang.len() > 35 {
        return Err(AppError::ValidationError("lang must be a language tag".to_string()));
    }

    let language = supported_language(&lang);

    Ok(HttpResponse::Ok().json(json!({
        "language": language,
        "supported": SUPPORTED_LANGUAGES,
        "labels": translation_table(language),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_regional_tag_maps_to_supported_language() {
        let app = test::init_service(App::new().service(get_translations)).await;

        let request = test::TestRequest::get().uri("/api/v1/i18n/fr-CA").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["language"], "fr");
        assert_eq!(body["labels"]["add_to_favorites"], "Ajouter aux favoris");
    }

    #[actix_web::test]
    async fn test_unknown_language_falls_back_to_english() {
        let app = test::init_service(App::new().service(get_translations)).await;

        let request = test::TestRequest::get().uri("/api/v1/i18n/de").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["language"], "en");
        assert_eq!(body["supported"].as_array().map(Vec::len), Some(3));
    }
}
