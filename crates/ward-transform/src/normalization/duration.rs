//! Stay duration in whole days.
//!
//! Duration is `departure - arrival` counted in calendar days. Same-day
//! discharge is 0. Inverted ranges are not given a duration; the removal
//! stage deletes them before durations are computed.

use chrono::NaiveDate;

/// Whole days between arrival and departure.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use ward_transform::normalization::duration::stay_duration_days;
///
/// let arrival = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(stay_duration_days(arrival, departure), 4);
/// ```
pub fn stay_duration_days(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    (departure - arrival).num_days()
}

/// True when both dates are known and departure precedes arrival.
///
/// Unknown dates never make a stay invalid.
pub fn is_inverted_stay(arrival: Option<NaiveDate>, departure: Option<NaiveDate>) -> bool {
    matches!((arrival, departure), (Some(arrival), Some(departure)) if departure < arrival)
}
