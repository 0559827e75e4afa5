use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static HOUR_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("regex compiles"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Time '{0}' is not a valid HH:MM value")]
    Malformed(String),
}

/// Converts an `HH:MM` string into minutes since midnight.
///
/// Stored schedule bounds and queried times both go through this function,
/// so they compare as plain integers. Hours are not capped, so `24:00`
/// encodes the end of the day as 1440.
pub fn to_minutes(time: &str) -> Result<u32, TimeError> {
    let malformed = || TimeError::Malformed(time.to_string());
    let caps = HOUR_MINUTE.captures(time).ok_or_else(malformed)?;

    let hours = caps[1].parse::<u32>().map_err(|_| malformed())?;
    let minutes = caps[2].parse::<u32>().map_err(|_| malformed())?;
    if minutes > 59 {
        return Err(malformed());
    }

    Ok(hours * 60 + minutes)
}
