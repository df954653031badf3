//! Shared helpers for the PayPal Unified connector crates.

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod loose;
pub mod types;

pub use errors::{CustomResult, ParsingError};
pub use types::{LocaleNumber, StringMajorUnit};

pub mod date_time {
    use time::{macros::format_description, Date, Duration, OffsetDateTime};

    use crate::{errors::ParsingError, CustomResult};

    const SECONDS_PER_DAY: i64 = 86_400;

    /// Current calendar date in the local time zone, UTC when the local offset
    /// cannot be determined.
    pub fn today() -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }

    /// `date + days`, `None` when the result leaves the supported calendar range.
    pub fn add_days(date: Date, days: i64) -> Option<Date> {
        let seconds = days.checked_mul(SECONDS_PER_DAY)?;
        date.checked_add(Duration::seconds(seconds))
    }

    /// Formats a date as `YYYY-MM-DD`.
    pub fn format_iso_date(date: Date) -> CustomResult<String, ParsingError> {
        date.format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| error_stack::report!(ParsingError::DateTimeFormattingFailure))
    }
}
