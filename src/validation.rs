//! Request validation for airline and airport bodies.

use crate::error::AppError;
use crate::models::{AirlineChanges, CreateAirline, CreateAirport, NewAirline, UpdateAirline, UpdateAirport};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

pub const FOUNDING_DATE_IN_FUTURE: &str = "founding date must be in the past";
pub const AIRPORT_CODE_LENGTH: &str = "The airport code must be exactly 3 characters";

/// Optional http, https or ftp scheme; a dotted host name or an IPv4 address; optional port;
/// then a path, query or fragment.
const WEBSITE_PATTERN: &str = r"^((https?|ftp)://)?(([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}|(25[0-5]|2[0-4]\d|1?\d?\d)(\.(25[0-5]|2[0-4]\d|1?\d?\d)){3})(:\d{1,5})?([/?#]\S*)?$";

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full airline body. `now` is the instant the founding date must precede.
    pub fn airline(body: CreateAirline, now: DateTime<Utc>) -> Result<NewAirline, AppError> {
        let founding_date = founding_date(&body.founding_date, now)?;
        website(&body.website)?;
        Ok(NewAirline {
            name: body.name,
            description: body.description,
            founding_date,
            website: body.website,
        })
    }

    /// Validate only the fields present in an airline update.
    pub fn airline_partial(body: UpdateAirline, now: DateTime<Utc>) -> Result<AirlineChanges, AppError> {
        let founding_date = match body.founding_date.as_deref() {
            Some(raw) => Some(founding_date(raw, now)?),
            None => None,
        };
        if let Some(ref w) = body.website {
            website(w)?;
        }
        Ok(AirlineChanges {
            name: body.name,
            description: body.description,
            founding_date,
            website: body.website,
        })
    }

    pub fn airport(body: &CreateAirport) -> Result<(), AppError> {
        airport_code(&body.code)
    }

    pub fn airport_partial(body: &UpdateAirport) -> Result<(), AppError> {
        match body.code.as_deref() {
            Some(code) => airport_code(code),
            None => Ok(()),
        }
    }
}

/// Parse an ISO 8601 date or date-time. Naive values are read as UTC; a bare date is UTC midnight.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let s = raw.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Ok(d.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(d.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = d.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(AppError::Validation(
        "foundingDate must be a valid ISO 8601 date string".into(),
    ))
}

/// Founding date strictly before `now`, compared as full timestamps.
pub fn founding_date(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let date = parse_date(raw)?;
    if date >= now {
        return Err(AppError::Validation(FOUNDING_DATE_IN_FUTURE.into()));
    }
    Ok(date)
}

pub fn airport_code(code: &str) -> Result<(), AppError> {
    if code.chars().count() != 3 {
        return Err(AppError::Validation(AIRPORT_CODE_LENGTH.into()));
    }
    Ok(())
}

pub fn website(url: &str) -> Result<(), AppError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(WEBSITE_PATTERN).expect("website pattern compiles"));
    if !re.is_match(url) {
        return Err(AppError::Validation("website must be a URL address".into()));
    }
    Ok(())
}
