//! Deserializers for request fields that clients send in more than one shape

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error};

/// A calendar date given as `2005-08-20` or as a timestamp such as
/// `2005-08-20T00:00:00.000Z`. Timestamps keep the date of their own offset.
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(i64),
}

/// Free text that some clients send as a bare number (`"1977"` or `1977`).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "date")]
        day: NaiveDate,
        #[serde(deserialize_with = "text")]
        year: String,
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_accept_plain_and_timestamp_forms() {
        assert_eq!(parse_date("2005-08-20"), Some(day(2005, 8, 20)));
        assert_eq!(parse_date("2005-08-20T00:00:00.000Z"), Some(day(2005, 8, 20)));
        assert_eq!(parse_date("2005-08-20T22:30:00-03:00"), Some(day(2005, 8, 20)));
        assert_eq!(parse_date("2005-08-20T10:15:00"), Some(day(2005, 8, 20)));
        assert_eq!(parse_date("20/08/2005"), None);
        assert_eq!(parse_date("amanhã"), None);
    }

    #[test]
    fn year_accepts_string_or_number() {
        let parsed: Payload =
            serde_json::from_str(r#"{"day": "2024-10-01", "year": "1977"}"#).unwrap();
        assert_eq!(parsed.year, "1977");

        let parsed: Payload = serde_json::from_str(r#"{"day": "2024-10-01", "year": 1977}"#).unwrap();
        assert_eq!(parsed.year, "1977");
        assert_eq!(parsed.day, day(2024, 10, 1));

        assert!(serde_json::from_str::<Payload>(r#"{"day": "x", "year": 1977}"#).is_err());
    }
}
