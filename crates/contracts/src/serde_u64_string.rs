//! Entity ids travel as decimal strings so JSON consumers never lose precision.
//! Input also accepts bare numbers and the `uid:N` form used in log output.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UidInput {
        Text(String),
        Number(u64),
    }

    match UidInput::deserialize(deserializer)? {
        UidInput::Text(raw) => parse_uid(&raw).map_err(D::Error::custom),
        UidInput::Number(value) => Ok(value),
    }
}

fn parse_uid(raw: &str) -> Result<u64, String> {
    let raw = raw.trim();
    let digits = raw.strip_prefix("uid:").unwrap_or(raw);
    digits
        .parse::<u64>()
        .map_err(|err| format!("invalid entity uid {raw:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use crate::EntityUid;

    #[test]
    fn uid_accepts_string_and_number() {
        let from_text: EntityUid = serde_json::from_str(r#""42""#).expect("string uid");
        let from_number: EntityUid = serde_json::from_str("42").expect("numeric uid");
        assert_eq!(from_text, EntityUid(42));
        assert_eq!(from_number, EntityUid(42));
    }

    #[test]
    fn uid_serializes_as_string() {
        let encoded = serde_json::to_string(&EntityUid(u64::MAX)).expect("serialize");
        assert_eq!(encoded, format!("\"{}\"", u64::MAX));
    }

    #[test]
    fn uid_accepts_its_display_form() {
        let uid = EntityUid(17);
        let parsed: EntityUid =
            serde_json::from_str(&format!("\"{uid}\"")).expect("display form");
        assert_eq!(parsed, uid);
    }

    #[test]
    fn uid_rejects_non_numeric_text() {
        let err = serde_json::from_str::<EntityUid>(r#""captain""#).expect_err("not a uid");
        assert!(err.to_string().contains("invalid entity uid"));
        assert!(serde_json::from_str::<EntityUid>(r#""uid:""#).is_err());
    }
}
