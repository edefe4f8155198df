//! # 저장소 값 정규화
//!
//! MongoDB 문서에 들어 있는 저장소 고유 래퍼 값을 평범한 값으로 바꿉니다.
//! 프레젠테이션 계층과 캐시는 정규화된 값만 다룹니다.
//!
//! | 입력 | 출력 |
//! |------|------|
//! | `DateTime` | `{ seconds, nanoseconds, iso }` |
//! | `Timestamp { time, increment }` | `{ seconds: time, nanoseconds: 0, iso }` |
//! | `ObjectId` | 24자리 16진수 문자열 |
//! | `Document`, `Array` | 구조를 유지한 채 재귀 변환 |
//! | 그 밖의 값 | 그대로 |
//!
//! 변환은 순수하고 전역적(total)이며 멱등입니다. 출력에는 래퍼 값이 남지 않으므로
//! 두 번 적용해도 결과가 같습니다.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{Bson, Document, doc};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// 값 하나를 재귀적으로 정규화합니다.
pub fn normalize(value: Bson) -> Bson {
    match value {
        Bson::DateTime(date_time) => timestamp_document(date_time.timestamp_millis()),
        Bson::Timestamp(ts) => {
            let millis = i64::from(ts.time) * 1_000;
            timestamp_document(millis)
        }
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        Bson::Document(document) => Bson::Document(normalize_document(document)),
        Bson::Array(items) => Bson::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

/// 문서의 모든 필드를 정규화합니다. 필드 순서는 유지됩니다.
pub fn normalize_document(document: Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, normalize(value)))
        .collect()
}

fn timestamp_document(millis: i64) -> Bson {
    let seconds = millis.div_euclid(1_000);
    let nanoseconds = (millis.rem_euclid(1_000) * NANOS_PER_MILLI) as i32;

    let iso = DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| Bson::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)))
        .unwrap_or(Bson::Null);

    Bson::Document(doc! {
        "seconds": seconds,
        "nanoseconds": nanoseconds,
        "iso": iso,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime as BsonDateTime, Timestamp, oid::ObjectId};

    use crate::domain::models::PlainTimestamp;

    fn sample_document() -> Document {
        doc! {
            "_id": ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap(),
            "slug": "merzouga",
            "createdAt": BsonDateTime::from_millis(1_700_000_000_123),
            "rating": 4.7,
            "images": ["a.jpg", "b.jpg"],
            "history": [
                { "at": BsonDateTime::from_millis(0), "by": "editor" },
                { "nested": { "syncedAt": Timestamp { time: 1_700_000_000, increment: 3 } } },
            ],
        }
    }

    #[test]
    fn test_datetime_becomes_plain_timestamp() {
        let normalized = normalize(Bson::DateTime(BsonDateTime::from_millis(1_700_000_000_123)));

        assert_eq!(
            normalized,
            Bson::Document(doc! {
                "seconds": 1_700_000_000_i64,
                "nanoseconds": 123_000_000_i32,
                "iso": "2023-11-14T22:13:20.123Z",
            })
        );
    }

    #[test]
    fn test_pre_epoch_datetime_keeps_positive_nanoseconds() {
        let normalized = normalize(Bson::DateTime(BsonDateTime::from_millis(-1)));
        let Bson::Document(fields) = normalized else {
            panic!("expected document");
        };

        assert_eq!(fields.get_i64("seconds").unwrap(), -1);
        assert_eq!(fields.get_i32("nanoseconds").unwrap(), 999_000_000);
        assert_eq!(fields.get_str("iso").unwrap(), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_bson_timestamp_uses_seconds() {
        let normalized = normalize(Bson::Timestamp(Timestamp { time: 10, increment: 99 }));

        assert_eq!(
            normalized,
            Bson::Document(doc! {
                "seconds": 10_i64,
                "nanoseconds": 0_i32,
                "iso": "1970-01-01T00:00:10.000Z",
            })
        );
    }

    #[test]
    fn test_object_id_becomes_hex_string() {
        let oid = ObjectId::parse_str("65f1a2b3c4d5e6f708192a3b").unwrap();
        assert_eq!(normalize(Bson::ObjectId(oid)), Bson::String("65f1a2b3c4d5e6f708192a3b".to_string()));
    }

    #[test]
    fn test_nested_structures_are_converted() {
        let normalized = normalize_document(sample_document());

        assert_eq!(normalized.get_str("_id").unwrap(), "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(normalized.get_str("slug").unwrap(), "merzouga");

        let history = normalized.get_array("history").unwrap();
        let first = history[0].as_document().unwrap();
        assert_eq!(first.get_document("at").unwrap().get_i64("seconds").unwrap(), 0);
        assert_eq!(first.get_str("by").unwrap(), "editor");

        let synced = history[1]
            .as_document()
            .and_then(|d| d.get_document("nested").ok())
            .and_then(|d| d.get_document("syncedAt").ok())
            .unwrap();
        assert_eq!(synced.get_i64("seconds").unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_document(sample_document());
        let twice = normalize_document(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_wrapper_free_value_is_unchanged() {
        let plain = doc! {
            "name": { "en": "Desert", "fr": "Désert" },
            "rating": 4.5,
            "reviewCount": 12,
            "tags": ["dunes", 3_i64, true, Bson::Null],
        };
        assert_eq!(normalize_document(plain.clone()), plain);
    }

    #[test]
    fn test_normalized_timestamp_deserializes_into_plain_timestamp() {
        let normalized = normalize(Bson::DateTime(BsonDateTime::from_millis(1_500)));
        let ts: PlainTimestamp = mongodb::bson::from_bson(normalized).unwrap();

        assert_eq!(ts.seconds, 1);
        assert_eq!(ts.nanoseconds, 500_000_000);
        assert_eq!(ts.iso.as_deref(), Some("1970-01-01T00:00:01.500Z"));
    }
}
