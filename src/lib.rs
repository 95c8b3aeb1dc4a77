//! # Sunrise Equation
//!
//! Sunrise and sunset times from the closed-form Sunrise Equation.
//!
//! Given a moment, an observer location (latitude, longitude, elevation) and
//! optionally a display time zone, the crate returns sunrise, solar transit and
//! sunset, or reports that the sun stays up (polar day) or down (polar night)
//! for the whole day.
//!
//! The approximation keeps only the leading orbital terms. Expect agreement with
//! almanacs within a few minutes at mid latitudes; for arc-second accuracy use a
//! full ephemeris such as NREL's SPA.
//!
//! ## Features
//!
//! - Numeric API on Unix timestamps that works without `chrono` and in `no_std`
//! - `DateTime<Tz>` API with results in any display time zone
//! - Every intermediate quantity is logged at debug level through an injectable
//!   [`diagnostics::Logger`]
//! - Polar day and polar night are distinct, regular results; never errors
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli`: Build the `sunrise` command-line tool
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunrise_equation::equation;
//! use chrono::{DateTime, FixedOffset, Utc};
//!
//! let moment = "2024-12-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let toronto_winter = FixedOffset::west_opt(5 * 3600).unwrap();
//!
//! let times = equation::sunrise_sunset_in(
//!     moment,
//!     43.268_399,  // Hamilton, Ontario latitude
//!     -79.774_549, // Hamilton, Ontario longitude
//!     74.0,       // elevation (meters)
//!     &toronto_winter,
//! ).unwrap();
//!
//! if times.is_regular_day() {
//!     println!("Sunrise: {}", times.sunrise());
//!     println!("Sunset: {}", times.sunset());
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sunrise_equation::{equation, DayKind};
//!
//! // 2023-06-21 12:00:00 UTC, Longyearbyen
//! let times = equation::sunrise_sunset_timestamp(1_687_348_800, 78.22, 15.65, 0.0).unwrap();
//! assert_eq!(times.kind(), DayKind::AllDay);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of Julian dates in tests
)]

// Public API exports
pub use crate::equation::{horizon_altitude, SunriseEquation};
pub use crate::error::{Error, Result};
pub use crate::types::{DayKind, Observer, SunTimes};

// Algorithm modules
pub mod equation;

// Core modules
pub mod diagnostics;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_offsets_do_not_change_instants() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let times1 = equation::sunrise_sunset(datetime_fixed, 37.7749, -122.4194, 0.0).unwrap();
        let times2 = equation::sunrise_sunset(datetime_utc, 37.7749, -122.4194, 0.0).unwrap();

        assert_eq!(times1, times2);
        assert!(times1.sunrise() < times1.transit());
        assert!(times1.transit() < times1.sunset());
    }

    #[test]
    fn test_san_francisco_midsummer() {
        let moment = Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap();
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();

        let times =
            equation::sunrise_sunset_in(moment, 37.7749, -122.4194, 0.0, &pacific).unwrap();

        // 05:49 and 20:36 PDT
        assert_eq!(times.sunrise().format("%H:%M").to_string(), "05:49");
        assert_eq!(times.sunset().format("%H:%M").to_string(), "20:36");
    }
}
