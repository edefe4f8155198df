//! 다국어(i18n) 모듈
//!
//! 요청 언어 결정과 화면 고정 문구 번역 테이블.
//! 문서 내용(여행지 이름 등)의 번역은 [`LocalizedText`](crate::domain::models::LocalizedText)가
//! 담당하고, 여기에는 버튼, 제목, 안내 문구처럼 코드에 고정된 문구만 둡니다.

use std::collections::BTreeMap;

use crate::domain::models::localized::DEFAULT_LANGUAGE;

/// UI 번역 테이블이 있는 언어
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "fr", "ar"];

const EN: &[(&str, &str)] = &[
    ("destinations", "Destinations"),
    ("places", "Places"),
    ("attractions", "Attractions"),
    ("accommodations", "Accommodations"),
    ("transportation", "Transportation"),
    ("favorites", "Favorites"),
    ("add_to_favorites", "Add to favorites"),
    ("remove_from_favorites", "Remove from favorites"),
    ("sign_in_to_favorite", "Sign in to save your favorite places"),
    ("favorite_failed", "Something went wrong, please try again"),
    ("activities", "Activities"),
    ("best_season", "Best season"),
    ("best_time_to_visit", "Best time to visit"),
    ("entrance_fee", "Entrance fee"),
    ("tips", "Tips"),
    ("rating", "Rating"),
    ("reviews", "reviews"),
    ("view_on_map", "View on map"),
    ("previous", "Previous"),
    ("next", "Next"),
    ("not_found", "We couldn't find this destination"),
];

const FR: &[(&str, &str)] = &[
    ("destinations", "Destinations"),
    ("places", "Lieux"),
    ("attractions", "Attractions"),
    ("accommodations", "Hébergements"),
    ("transportation", "Transports"),
    ("favorites", "Favoris"),
    ("add_to_favorites", "Ajouter aux favoris"),
    ("remove_from_favorites", "Retirer des favoris"),
    ("sign_in_to_favorite", "Connectez-vous pour enregistrer vos lieux favoris"),
    ("favorite_failed", "Une erreur est survenue, veuillez réessayer"),
    ("activities", "Activités"),
    ("best_season", "Meilleure saison"),
    ("best_time_to_visit", "Meilleur moment pour visiter"),
    ("entrance_fee", "Droit d'entrée"),
    ("tips", "Conseils"),
    ("rating", "Note"),
    ("reviews", "avis"),
    ("view_on_map", "Voir sur la carte"),
    ("previous", "Précédent"),
    ("next", "Suivant"),
    ("not_found", "Nous n'avons pas trouvé cette destination"),
];

const AR: &[(&str, &str)] = &[
    ("destinations", "الوجهات"),
    ("places", "الأماكن"),
    ("attractions", "المعالم"),
    ("accommodations", "أماكن الإقامة"),
    ("transportation", "النقل"),
    ("favorites", "المفضلة"),
    ("add_to_favorites", "أضف إلى المفضلة"),
    ("remove_from_favorites", "إزالة من المفضلة"),
    ("sign_in_to_favorite", "سجّل الدخول لحفظ أماكنك المفضلة"),
    ("favorite_failed", "حدث خطأ، يرجى المحاولة مرة أخرى"),
    ("activities", "الأنشطة"),
    ("best_season", "أفضل موسم"),
    ("best_time_to_visit", "أفضل وقت للزيارة"),
    ("entrance_fee", "رسوم الدخول"),
    ("tips", "نصائح"),
    ("rating", "التقييم"),
    ("reviews", "مراجعات"),
    ("view_on_map", "عرض على الخريطة"),
    ("previous", "السابق"),
    ("next", "التالي"),
];

fn table_for(lang: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match lang {
        "en" => Some(EN),
        "fr" => Some(FR),
        "ar" => Some(AR),
        _ => None,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// 언어 태그를 지원 언어로 맞춥니다 (`fr-FR` → `fr`). 지원하지 않으면 `en`.
pub fn supported_language(tag: &str) -> &'static str {
    let tag = tag.trim().to_lowercase();
    let primary = tag.split(['-', '_']).next().unwrap_or_default();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == primary)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// 요청 언어를 결정합니다.
///
/// `?lang=` 쿼리 → `Accept-Language` 헤더의 첫 번째 태그 → `en`.
/// 반환값은 문서 번역 조회에 그대로 쓰이므로 지원 언어로 좁히지 않습니다.
pub fn resolve_language(query: Option<&str>, accept_language: Option<&str>) -> String {
    let from_query = query.map(str::trim).filter(|lang| !lang.is_empty());

    let from_header = accept_language.and_then(|header| {
        header
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != "*")
    });

    from_query
        .or(from_header)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_lowercase()
}

/// 고정 문구 하나를 번역합니다.
///
/// 요청 언어 테이블 → `en` 테이블 → 키 자체 순으로 찾습니다.
pub fn label<'a>(lang: &str, key: &'a str) -> &'a str {
    table_for(supported_language(lang))
        .and_then(|table| lookup(table, key))
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

/// 요청 언어의 전체 번역 테이블을 만듭니다. 빠진 키는 영어로 채웁니다.
pub fn translation_table(lang: &str) -> BTreeMap<&'static str, &'static str> {
    let mut table: BTreeMap<&'static str, &'static str> = EN.iter().copied().collect();

    if let Some(localized) = table_for(supported_language(lang)) {
        table.extend(localized.iter().copied());
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_prefers_query() {
        assert_eq!(resolve_language(Some("FR"), Some("ar,en;q=0.8")), "fr");
    }

    #[test]
    fn test_resolve_language_uses_first_header_tag() {
        assert_eq!(resolve_language(None, Some("ar-MA;q=0.9, en;q=0.8")), "ar-ma");
        assert_eq!(resolve_language(Some("  "), Some("fr")), "fr");
    }

    #[test]
    fn test_resolve_language_defaults_to_english() {
        assert_eq!(resolve_language(None, None), "en");
        assert_eq!(resolve_language(None, Some("*")), "en");
    }

    #[test]
    fn test_supported_language() {
        assert_eq!(supported_language("fr-CA"), "fr");
        assert_eq!(supported_language("es"), "en");
    }

    #[test]
    fn test_label_fallback_chain() {
        assert_eq!(label("fr", "favorites"), "Favoris");
        // 아랍어 테이블에는 not_found가 없으므로 영어
        assert_eq!(label("ar", "not_found"), "We couldn't find this destination");
        assert_eq!(label("es", "next"), "Next");
        assert_eq!(label("en", "unknown_key"), "unknown_key");
    }

    #[test]
    fn test_translation_table_is_complete_for_every_language() {
        let english = translation_table("en");
        for lang in SUPPORTED_LANGUAGES {
            let table = translation_table(lang);
            assert_eq!(table.len(), english.len(), "{} table is missing keys", lang);
        }
        assert_eq!(translation_table("fr")["places"], "Lieux");
    }
}
