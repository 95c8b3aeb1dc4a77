//! Core data types for sunrise/sunset calculations.

use crate::error::{check_coordinates, check_elevation};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Observer location on the Earth's surface.
///
/// Latitude and longitude follow the usual geographic sign convention
/// (north and east positive). Elevation is in meters above the horizon
/// the observer looks at, typically sea level.
///
/// # Example
/// ```
/// # use sunrise_equation::Observer;
/// let hamilton = Observer::new(43.268_399, -79.774_549, 74.0).unwrap();
/// assert_eq!(hamilton.elevation(), 74.0);
///
/// assert!(Observer::new(43.0, -79.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Observer {
    /// Creates a validated observer.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Creates an observer at sea level.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn at_sea_level(latitude: f64, longitude: f64) -> Result<Self> {
        Self::new(latitude, longitude, 0.0)
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Kind of day the sun produces at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// The sun rises and sets.
    Regular,
    /// Polar day: the sun stays above the horizon all day.
    AllDay,
    /// Polar night: the sun stays below the horizon all day.
    AllNight,
}

/// Sunrise, solar transit and sunset for one day.
///
/// For [`DayKind::Regular`] days `sunset - sunrise` is the daylight duration.
/// For polar days and nights there is no real sunrise or sunset: `sunrise`
/// holds the start of the UTC day containing the transit and `sunset` the start
/// of the following UTC day, so their difference is not a day length.
/// `transit` is always the computed solar noon.
///
/// The numeric API uses `f64` Unix seconds for `T`; the chrono API uses `DateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes<T> {
    sunrise: T,
    transit: T,
    sunset: T,
    kind: DayKind,
}

impl<T> SunTimes<T> {
    /// Assembles a result from its parts.
    pub const fn new(sunrise: T, transit: T, sunset: T, kind: DayKind) -> Self {
        Self {
            sunrise,
            transit,
            sunset,
            kind,
        }
    }

    /// Gets the sunrise time, or the start of the day when polar.
    pub const fn sunrise(&self) -> &T {
        &self.sunrise
    }

    /// Gets the solar transit (solar noon).
    pub const fn transit(&self) -> &T {
        &self.transit
    }

    /// Gets the sunset time, or the start of the next day when polar.
    pub const fn sunset(&self) -> &T {
        &self.sunset
    }

    /// Gets the kind of day.
    pub const fn kind(&self) -> DayKind {
        self.kind
    }

    /// Checks if the sun rises and sets.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self.kind, DayKind::Regular)
    }

    /// Checks for either polar condition (the "no sunrise/sunset" flag).
    pub const fn is_polar(&self) -> bool {
        !self.is_regular_day()
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self.kind, DayKind::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self.kind, DayKind::AllNight)
    }

    /// Converts all three instants, keeping the day kind.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunTimes<U> {
        SunTimes {
            sunrise: f(self.sunrise),
            transit: f(self.transit),
            sunset: f(self.sunset),
            kind: self.kind,
        }
    }

    /// Like [`SunTimes::map`], stopping at the first conversion error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F: FnMut(T) -> core::result::Result<U, E>>(
        self,
        mut f: F,
    ) -> core::result::Result<SunTimes<U>, E> {
        Ok(SunTimes {
            sunrise: f(self.sunrise)?,
            transit: f(self.transit)?,
            sunset: f(self.sunset)?,
            kind: self.kind,
        })
    }
}

impl SunTimes<f64> {
    /// Daylight duration in seconds, `None` for polar days and nights.
    #[must_use]
    pub fn day_length_seconds(&self) -> Option<f64> {
        self.is_regular_day().then_some(self.sunset - self.sunrise)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> SunTimes<DateTime<Tz>> {
    /// Daylight duration, `None` for polar days and nights.
    #[must_use]
    pub fn day_length(&self) -> Option<chrono::Duration> {
        self.is_regular_day()
            .then(|| self.sunset.clone().signed_duration_since(self.sunrise.clone()))
    }

    /// Expresses the same instants in another time zone.
    ///
    /// Only the rendering changes; the absolute instants are identical.
    #[must_use]
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> SunTimes<DateTime<Tz2>> {
        self.clone().map(|instant| instant.with_timezone(tz))
    }
}
