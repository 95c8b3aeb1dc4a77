//! Time conversions for the sunrise equation.
//!
//! The equation works on Julian dates derived directly from Unix timestamps
//! (UTC seconds). Leap seconds are ignored, as they are by Unix time itself.

#![allow(clippy::unreadable_literal)]

use crate::math::ceil;
#[cfg(feature = "chrono")]
use crate::math::floor;
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Seconds per day (86,400)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Fractional-day offset used by the equation around J2000 and mean solar time.
pub const LEAP_SECOND_OFFSET: f64 = 0.0009;

/// TT - TAI offset plus the accumulated leap seconds, in seconds.
pub const TERRESTRIAL_TIME_CORRECTION: f64 = 69.184;

/// A Julian date (continuous count of days, referenced to UTC).
///
/// # Example
/// ```
/// # use sunrise_equation::time::JulianDate;
/// let jd = JulianDate::from_timestamp(0);
/// assert_eq!(jd.julian_date(), 2_440_587.5);
/// assert_eq!(jd.to_timestamp(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Wraps a raw Julian date value.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self(julian_date)
    }

    /// Converts a Unix timestamp in whole seconds.
    #[must_use]
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self::from_timestamp_f64(timestamp as f64)
    }

    /// Converts a Unix timestamp in (possibly fractional) seconds.
    #[must_use]
    pub fn from_timestamp_f64(timestamp: f64) -> Self {
        Self(timestamp / SECONDS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Converts a timezone-aware `DateTime`, truncating sub-second precision.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_timestamp(datetime.timestamp())
    }

    /// Gets the raw Julian date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.0
    }

    /// Converts back to Unix seconds (fractional).
    #[must_use]
    pub fn to_timestamp(&self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY
    }

    /// Whole days since J2000, rounded up (step 2 of the equation).
    ///
    /// `n = ceil(jd - 2451545.0009 + 69.184 / 86400)`
    #[must_use]
    pub fn day_number(&self) -> f64 {
        let since_j2000 = self.0 - (J2000_JD + LEAP_SECOND_OFFSET);
        ceil(since_j2000 + TERRESTRIAL_TIME_CORRECTION / SECONDS_PER_DAY)
    }

    /// Returns a Julian date shifted by `days`.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Unix timestamp of 00:00:00 UTC on the day containing `timestamp`.
#[must_use]
pub const fn utc_day_start(timestamp: i64) -> i64 {
    timestamp.div_euclid(86_400) * 86_400
}

/// Converts fractional Unix seconds into a UTC `DateTime`.
///
/// Sub-second precision is kept down to whole nanoseconds.
///
/// # Errors
/// Returns `InvalidTimestamp` if the value is not finite or out of chrono's range.
#[cfg(feature = "chrono")]
pub fn timestamp_to_datetime(timestamp: f64) -> Result<DateTime<Utc>> {
    if !timestamp.is_finite() || timestamp.abs() > i64::MAX as f64 {
        return Err(Error::invalid_timestamp(timestamp));
    }
    let seconds = floor(timestamp);
    let nanos = ((timestamp - seconds) * 1e9) as u32;
    // rounding can land exactly on 1e9
    let (seconds, nanos) = if nanos >= 1_000_000_000 {
        (seconds + 1.0, 0)
    } else {
        (seconds, nanos)
    };
    DateTime::from_timestamp(seconds as i64, nanos)
        .ok_or_else(|| Error::invalid_timestamp(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_epoch() {
        let jd = JulianDate::from_timestamp(0);
        assert_eq!(jd.julian_date(), UNIX_EPOCH_JD);
        assert_eq!(jd.to_timestamp(), 0.0);
    }

    #[test]
    fn test_noon_julian_date() {
        // 2024-06-21 12:00:00 UTC
        let jd = JulianDate::from_timestamp(1_718_971_200);
        assert_eq!(jd.julian_date(), 2_460_483.0);

        // 2000-01-01 12:00:00 UTC is J2000 in UTC terms
        let jd = JulianDate::from_timestamp(946_728_000);
        assert_eq!(jd.julian_date(), J2000_JD);
    }

    #[test]
    fn test_day_number() {
        let jd = JulianDate::from_timestamp(1_718_971_200);
        assert_eq!(jd.day_number(), 8938.0);

        // Just after midnight still belongs to the same day number
        let jd = JulianDate::from_timestamp(1_718_928_060);
        assert_eq!(jd.day_number(), 8938.0);

        // A full day later advances by exactly one
        let jd = JulianDate::from_timestamp(1_718_971_200 + 86_400);
        assert_eq!(jd.day_number(), 8939.0);
    }

    #[test]
    fn test_timestamp_round_trip_precision() {
        let jd = JulianDate::from_timestamp(1_718_990_534);
        assert!((jd.to_timestamp() - 1_718_990_534.0).abs() < 1e-3);
        assert!((jd.add_days(0.5).to_timestamp() - 1_719_033_734.0).abs() < 1e-3);
    }

    #[test]
    fn test_utc_day_start() {
        assert_eq!(utc_day_start(1_718_971_200), 1_718_928_000);
        assert_eq!(utc_day_start(1_718_928_000), 1_718_928_000);
        assert_eq!(utc_day_start(-1), -86_400);
        assert_eq!(utc_day_start(0), 0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_timestamp_to_datetime() {
        use chrono::{TimeZone, Timelike};

        let datetime = timestamp_to_datetime(1_718_962_824.505_658_4).unwrap();
        assert_eq!(
            datetime.with_nanosecond(0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 21, 9, 40, 24).unwrap()
        );
        assert!(datetime.nanosecond() > 505_000_000 && datetime.nanosecond() < 506_000_000);

        let before_epoch = timestamp_to_datetime(-0.25).unwrap();
        assert_eq!(before_epoch.timestamp(), -1);
        assert_eq!(before_epoch.nanosecond(), 750_000_000);

        assert!(timestamp_to_datetime(f64::NAN).is_err());
        assert!(timestamp_to_datetime(1e300).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_truncates_subseconds() {
        use chrono::{FixedOffset, TimeZone};

        let offset = FixedOffset::west_opt(4 * 3600).unwrap();
        let datetime = offset.with_ymd_and_hms(2024, 6, 21, 8, 0, 0).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(
            JulianDate::from_datetime(&datetime),
            JulianDate::from_timestamp(1_718_971_200)
        );
    }
}
