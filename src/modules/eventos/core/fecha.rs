// Parsing for the `fecha` field of an evento and the `desde`/`hasta` query bounds.
//
// Accepted inputs
// - A full local date-time: `2025-05-10T18:30:00` or `2025-05-10 18:30:00` (fractional seconds allowed).
// - An RFC 3339 timestamp with `Z` or an offset, normalized to UTC: `2025-05-10T18:30:00+02:00` is 16:30.
// - A bare date: `2025-05-10`, read as midnight.
//
// Serialization always goes through chrono's own NaiveDateTime format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, de};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid fecha: {0}")]
pub struct InvalidFecha(pub String);

pub fn parse_fecha(raw: &str) -> Result<NaiveDateTime, InvalidFecha> {
    let raw = raw.trim();
    if let Ok(fecha) = raw.parse::<NaiveDateTime>() {
        return Ok(fecha);
    }
    if let Ok(fecha) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(fecha);
    }
    if let Ok(fecha) = DateTime::parse_from_rfc3339(raw) {
        return Ok(fecha.naive_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| InvalidFecha(raw.to_string()))
}

pub fn deserialize_fecha<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_fecha(&raw).map_err(de::Error::custom)
}
