use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ChatId, Interaction};

/// Naive layouts tried after RFC 3339; read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Layout of JavaScript's `Date.prototype.toString()`, minus the zone name
const JS_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse a chat timestamp from the textual forms found in exported chat files:
/// RFC 3339, naive ISO-like date-times, bare dates, JavaScript date strings, or epoch millis
pub fn parse_chat_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = s.parse::<DateTime<Utc>>() {
        return Some(ts);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    // "Tue Jan 02 2024 10:00:00 GMT+0100 (Central European Standard Time)"
    let without_zone_name = s.split(" (").next().unwrap_or(s);
    if let Ok(ts) = DateTime::parse_from_str(without_zone_name, JS_DATE_FORMAT) {
        return Some(ts.with_timezone(&Utc));
    }

    s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Chat ids accept epoch milliseconds or any string [`parse_chat_timestamp`] understands.
/// Anything else still yields an id, just one without a timestamp.
pub fn deserialize_chat_id<'de, D>(deserializer: D) -> Result<ChatId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match value {
        Value::String(s) => ChatId::parse(&s),
        Value::Number(n) => match n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)) {
            Some(ms) => ChatId::from_millis(ms),
            None => ChatId::parse(&n.to_string()),
        },
        Value::Null => ChatId::default(),
        other => ChatId::parse(&other.to_string()),
    };
    Ok(id)
}

/// Interactions that are absent or not an array count as zero interactions.
/// Elements that fail to decode are kept as empty interactions so counts match the file.
pub fn deserialize_interactions<'de, D>(deserializer: D) -> Result<Vec<Interaction>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value::<Interaction>(item).unwrap_or_default())
        .collect())
}

/// Decode an optional field, mapping any type mismatch to `None` instead of failing the record
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
