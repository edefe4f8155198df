//! 다국어 텍스트 값 객체
//!
//! 여행지와 장소 문서의 이름, 설명, 지역 등은 `{ "en": "...", "fr": "...", "ar": "..." }`
//! 형태로 저장됩니다. 오래된 문서는 평범한 문자열을 담고 있기도 하므로
//! 역직렬화 시 문자열은 `{ "en": <문자열> }`로 읽습니다.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// 모든 번역이 비어 있을 때의 기본 언어
pub const DEFAULT_LANGUAGE: &str = "en";

/// 언어 코드 → 문자열 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedRepr {
    Plain(String),
    Map(BTreeMap<String, String>),
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match LocalizedRepr::deserialize(deserializer)? {
            LocalizedRepr::Plain(text) => LocalizedText::single(DEFAULT_LANGUAGE, text),
            LocalizedRepr::Map(map) => LocalizedText(
                map.into_iter()
                    .map(|(lang, text)| (lang.to_lowercase(), text))
                    .collect(),
            ),
        })
    }
}

impl LocalizedText {
    pub fn single(lang: &str, text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(lang.to_lowercase(), text.into());
        Self(map)
    }

    pub fn with(mut self, lang: &str, text: impl Into<String>) -> Self {
        self.0.insert(lang.to_lowercase(), text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 요청 언어에 맞는 문자열을 반환합니다.
    ///
    /// 조회 순서: 요청 언어 → 요청 언어의 기본 태그(`fr-CA` → `fr`) → `en` → 첫 번째 값 → `""`.
    /// 어떤 입력에도 에러가 나지 않습니다.
    pub fn resolve(&self, lang: &str) -> &str {
        let lang = lang.trim().to_lowercase();
        let primary = lang.split(['-', '_']).next().unwrap_or_default();

        self.0
            .get(lang.as_str())
            .or_else(|| self.0.get(primary))
            .or_else(|| self.0.get(DEFAULT_LANGUAGE))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or_default()
    }
}
