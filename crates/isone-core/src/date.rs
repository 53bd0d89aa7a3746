use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::Error;

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

/// Validates that `value` is a real calendar date in strict `YYYYMMDD` form.
///
/// A lenient parser accepts several superficially different spellings of the
/// same date, so a successful parse is re-rendered and compared byte-for-byte
/// against the input as the canonicalization tie-break.
pub fn validate_day(value: &str) -> Result<(), Error> {
    let parsed = Date::parse(value, &DAY_FORMAT).map_err(|_| invalid(value))?;
    let rendered = parsed.format(&DAY_FORMAT).map_err(|_| invalid(value))?;
    if rendered != value {
        return Err(invalid(value));
    }
    Ok(())
}

fn invalid(value: &str) -> Error {
    Error::InvalidDateFormat {
        value: value.to_owned(),
    }
}
