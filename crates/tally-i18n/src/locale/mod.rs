//! Locale-aware date formatting.
//!
//! Stateless: every function takes the language explicitly. Values are
//! normalized to a UTC instant before formatting. A value that cannot be
//! normalized is logged and returned as plain text, never an error.

mod names;


use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt;
use tally_core::language::LanguageCode;
use thiserror::Error;
use tracing::warn;

/// Locale identifier for a raw language code. Unknown codes get the default locale.
pub fn locale_of(code: &str) -> &'static str {
    LanguageCode::parse_or_default(code).locale()
}

/// Anything the formatter accepts as a point in time.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// ISO-8601 / RFC 3339 text, a bare `YYYY-MM-DD`, or epoch millis as digits.
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Millis(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Millis(ms) => write!(f, "{ms}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Why a value could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatFailure {
    #[error("unparseable date '{0}'")]
    Unparseable(String),
    #[error("timestamp {0} out of range")]
    OutOfRange(i64),
}

/// How the month is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    Short,
    Long,
}

/// Which fields to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOptions {
    pub weekday: bool,
    pub day: bool,
    pub month: Option<MonthStyle>,
    pub year: bool,
    pub hour_minute: bool,
}

impl DateOptions {
    /// Numeric day, month, and year.
    pub const SHORT: DateOptions = DateOptions {
        weekday: false,
        day: true,
        month: Some(MonthStyle::Numeric),
        year: true,
        hour_minute: false,
    };

    /// Numeric day and year with the long month name.
    pub const LONG: DateOptions = DateOptions {
        weekday: false,
        day: true,
        month: Some(MonthStyle::Long),
        year: true,
        hour_minute: false,
    };

    /// Numeric date plus hour:minute.
    pub const DATE_TIME: DateOptions = DateOptions {
        weekday: false,
        day: true,
        month: Some(MonthStyle::Numeric),
        year: true,
        hour_minute: true,
    };
}

impl Default for DateOptions {
    fn default() -> Self {
        Self::SHORT
    }
}

/// Normalize any accepted input to a UTC instant.
pub fn normalize(value: &DateInput) -> Result<DateTime<Utc>, FormatFailure> {
    match value {
        DateInput::Instant(dt) => Ok(*dt),
        DateInput::Millis(ms) => from_millis(*ms),
        DateInput::Text(text) => parse_text(text),
    }
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, FormatFailure> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or(FormatFailure::OutOfRange(ms))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, FormatFailure> {
    let trimmed = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || c == '-') {
        if let Ok(ms) = trimmed.parse::<i64>() {
            return from_millis(ms);
        }
    }
    Err(FormatFailure::Unparseable(text.to_string()))
}

/// Format `value` for `lang` with explicit options.
///
/// Malformed input comes back as its plain string form.
pub fn format_date(value: impl Into<DateInput>, lang: LanguageCode, options: &DateOptions) -> String {
    let value = value.into();
    match normalize(&value) {
        Ok(dt) => render(&dt, lang, options),
        Err(failure) => {
            warn!("format_date: {failure}, returning input unformatted");
            value.to_string()
        }
    }
}

/// `1/5/2024` (en), `5/1/2024` (es), `05/01/2024` (pt).
pub fn format_short_date(value: impl Into<DateInput>, lang: LanguageCode) -> String {
    format_date(value, lang, &DateOptions::SHORT)
}

/// `January 5, 2024`, `5 de enero de 2024`, `5 de janeiro de 2024`.
pub fn format_long_date(value: impl Into<DateInput>, lang: LanguageCode) -> String {
    format_date(value, lang, &DateOptions::LONG)
}

/// Numeric date followed by hour and minute.
pub fn format_date_time(value: impl Into<DateInput>, lang: LanguageCode) -> String {
    format_date(value, lang, &DateOptions::DATE_TIME)
}

fn render(dt: &DateTime<Utc>, lang: LanguageCode, options: &DateOptions) -> String {
    let date = match options.month {
        Some(MonthStyle::Numeric) | None => numeric_date(dt, lang, options),
        Some(style) => named_month_date(dt, lang, options, style),
    };
    let date = if options.weekday {
        let name = names::weekday(lang, dt.weekday().num_days_from_monday());
        if date.is_empty() {
            name.to_string()
        } else {
            format!("{name}, {date}")
        }
    } else {
        date
    };
    if !options.hour_minute {
        return date;
    }
    let time = clock(dt, lang);
    if date.is_empty() {
        time
    } else {
        format!("{date}, {time}")
    }
}

fn numeric_date(dt: &DateTime<Utc>, lang: LanguageCode, options: &DateOptions) -> String {
    let pad = lang == LanguageCode::Pt;
    let day = options
        .day
        .then(|| if pad { format!("{:02}", dt.day()) } else { dt.day().to_string() });
    let month = options
        .month
        .map(|_| if pad { format!("{:02}", dt.month()) } else { dt.month().to_string() });
    let year = options.year.then(|| dt.year().to_string());
    let ordered = match lang {
        LanguageCode::En => [month, day, year],
        LanguageCode::Es | LanguageCode::Pt => [day, month, year],
    };
    ordered.into_iter().flatten().collect::<Vec<_>>().join("/")
}

fn named_month_date(
    dt: &DateTime<Utc>,
    lang: LanguageCode,
    options: &DateOptions,
    style: MonthStyle,
) -> String {
    let month = match style {
        MonthStyle::Short => names::month_short(lang, dt.month0()),
        _ => names::month_long(lang, dt.month0()).to_string(),
    };
    let day = dt.day();
    let year = dt.year();
    match (lang, options.day, options.year) {
        (LanguageCode::En, true, true) => format!("{month} {day}, {year}"),
        (LanguageCode::En, true, false) => format!("{month} {day}"),
        (LanguageCode::En, false, true) => format!("{month} {year}"),
        (_, true, true) => format!("{day} de {month} de {year}"),
        (_, true, false) => format!("{day} de {month}"),
        (_, false, true) => format!("{month} de {year}"),
        (_, false, false) => month,
    }
}

fn clock(dt: &DateTime<Utc>, lang: LanguageCode) -> String {
    match lang {
        LanguageCode::En => {
            let (pm, hour12) = dt.hour12();
            let suffix = if pm { "PM" } else { "AM" };
            format!("{hour12}:{:02} {suffix}", dt.minute())
        }
        LanguageCode::Es | LanguageCode::Pt => format!("{:02}:{:02}", dt.hour(), dt.minute()),
    }
}

/// Unit picked for a relative-time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Pick the unit and floored count for an elapsed magnitude.
///
/// Thresholds are checked in order: under an hour → minutes, under a day →
/// hours, under a week → days, under 30 days → weeks, under 365 days →
/// months (days / 30), otherwise years (days / 365).
pub fn select_unit(elapsed: chrono::Duration) -> (i64, RelativeUnit) {
    let secs = elapsed.num_seconds().abs();
    let days = secs / 86_400;
    if secs < 3_600 {
        (secs / 60, RelativeUnit::Minute)
    } else if secs < 86_400 {
        (secs / 3_600, RelativeUnit::Hour)
    } else if days < 7 {
        (days, RelativeUnit::Day)
    } else if days < 30 {
        (days / 7, RelativeUnit::Week)
    } else if days < 365 {
        (days / 30, RelativeUnit::Month)
    } else {
        (days / 365, RelativeUnit::Year)
    }
}

/// "3 hours ago" / "in 2 weeks", relative to the current time.
pub fn format_relative_date(value: impl Into<DateInput>, lang: LanguageCode) -> String {
    format_relative_date_at(value, lang, Utc::now())
}

/// Relative phrasing against an explicit `now`. Falls back to the short date.
pub fn format_relative_date_at(
    value: impl Into<DateInput>,
    lang: LanguageCode,
    now: DateTime<Utc>,
) -> String {
    let value = value.into();
    let dt = match normalize(&value) {
        Ok(dt) => dt,
        Err(failure) => {
            warn!("format_relative_date: {failure}, falling back to short date");
            return format_short_date(value, lang);
        }
    };
    let elapsed = now.signed_duration_since(dt);
    let (count, unit) = select_unit(elapsed);
    let amount = format!("{count} {}", names::unit_word(lang, unit, count));
    names::relative_phrase(lang, &amount, elapsed.num_seconds() >= 0)
}
