//! Weekend-only business-day arithmetic.
//!
//! Exchange holidays are not modelled: a holiday counts as a business day,
//! and a fetch for it simply comes back empty.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// `true` for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The business day before `today` (`today - 1 business day`).
///
/// Saturday, Sunday and Monday all map to the preceding Friday.
pub fn previous_business_day(today: NaiveDate) -> NaiveDate {
    let back = match today.weekday() {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    };
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}
