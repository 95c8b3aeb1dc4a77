//! The Sunrise Equation.
//!
//! Closed-form approximation of sunrise, solar transit and sunset times.
//! Accuracy is in the order of a minute for mid latitudes, which is what the
//! simplified orbital terms allow.
//!
//! Reference: <https://en.wikipedia.org/wiki/Sunrise_equation#Complete_calculation_on_Earth>

#![allow(clippy::many_single_char_names)]

use crate::diagnostics::{Angle, DayLength, Instant, LogFacade, Logger, Silent};
use crate::math::{
    acos, asin, cos, degrees_to_radians, floor, mul_add, normalize_degrees_0_to_360,
    radians_to_degrees, sin, sqrt,
};
use crate::time::{utc_day_start, JulianDate, J2000_JD, LEAP_SECOND_OFFSET, SECONDS_PER_DAY};
use crate::types::{DayKind, Observer, SunTimes};
use crate::Result;

#[cfg(feature = "chrono")]
use crate::time::timestamp_to_datetime;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Obliquity of the ecliptic in degrees.
const OBLIQUITY_DEGREES: f64 = 23.4397;

/// Argument of perihelion in degrees.
const PERIHELION_DEGREES: f64 = 102.9372;

/// Standard altitude of the sun's upper limb at sunrise/sunset (refraction and radius).
pub const SUNRISE_SUNSET_ANGLE: f64 = -0.833;

/// Horizon dip coefficient, degrees per sqrt(meter) before dividing by 60.
const ELEVATION_DIP_COEFFICIENT: f64 = 2.076;

/// Sun altitude at which sunrise/sunset occur for an observer at `elevation` meters.
///
/// `h0 = -0.833° - 2.076° * sqrt(elevation) / 60`
///
/// # Example
/// ```
/// # use sunrise_equation::equation::horizon_altitude;
/// assert_eq!(horizon_altitude(0.0), -0.833);
/// assert!((horizon_altitude(100.0) - -1.179).abs() < 1e-12);
/// ```
#[must_use]
pub fn horizon_altitude(elevation: f64) -> f64 {
    mul_add(
        -ELEVATION_DIP_COEFFICIENT / 60.0,
        sqrt(elevation),
        SUNRISE_SUNSET_ANGLE,
    )
}

/// Intermediate values of one evaluation of the sunrise equation.
///
/// Everything is derived from a Julian date and an [`Observer`]. Angles are
/// stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseEquation {
    julian_date: JulianDate,
    day_number: f64,
    mean_solar_time: f64,
    mean_anomaly: f64,
    equation_of_center: f64,
    ecliptic_longitude: f64,
    transit: JulianDate,
    sin_declination: f64,
    hour_angle_cos: f64,
}

impl SunriseEquation {
    /// Evaluates the equation without logging.
    #[must_use]
    pub fn new(julian_date: JulianDate, observer: &Observer) -> Self {
        Self::with_logger(julian_date, observer, &Silent)
    }

    /// Evaluates the equation, reporting each step at debug level.
    #[must_use]
    pub fn with_logger<L: Logger + ?Sized>(
        julian_date: JulianDate,
        observer: &Observer,
        log: &L,
    ) -> Self {
        let latitude = observer.latitude();
        let longitude = observer.longitude();

        log.debug(format_args!(
            "Latitude               f       = {}",
            Angle(latitude)
        ));
        log.debug(format_args!(
            "Longitude              l_w     = {}",
            Angle(longitude)
        ));
        log.debug(format_args!(
            "Now                    ts      = {}",
            Instant(julian_date.to_timestamp())
        ));
        log.debug(format_args!(
            "Julian date            j_date  = {:.3} days",
            julian_date.julian_date()
        ));

        let day_number = julian_date.day_number();
        log.debug(format_args!(
            "Julian day             n       = {day_number:.3} days"
        ));

        let mean_solar_time = day_number + LEAP_SECOND_OFFSET - longitude / 360.0;
        log.debug(format_args!(
            "Mean solar time        J_      = {mean_solar_time:.9} days"
        ));

        let mean_anomaly =
            normalize_degrees_0_to_360(mul_add(0.985_600_28, mean_solar_time, 357.5291));
        let m = degrees_to_radians(mean_anomaly);
        log.debug(format_args!(
            "Solar mean anomaly     M       = {}",
            Angle(mean_anomaly)
        ));

        let equation_of_center = mul_add(
            1.9148,
            sin(m),
            mul_add(0.02, sin(2.0 * m), 0.0003 * sin(3.0 * m)),
        );
        log.debug(format_args!(
            "Equation of the center C       = {}",
            Angle(equation_of_center)
        ));

        let ecliptic_longitude = normalize_degrees_0_to_360(
            mean_anomaly + equation_of_center + 180.0 + PERIHELION_DEGREES,
        );
        let lambda = degrees_to_radians(ecliptic_longitude);
        log.debug(format_args!(
            "Ecliptic longitude     L       = {}",
            Angle(ecliptic_longitude)
        ));

        let transit = JulianDate::new(mul_add(
            0.0053,
            sin(m),
            mul_add(-0.0069, sin(2.0 * lambda), J2000_JD + mean_solar_time),
        ));
        log.debug(format_args!(
            "Solar transit time     J_trans = {}",
            Instant(transit.to_timestamp())
        ));

        let sin_declination = sin(lambda) * sin(degrees_to_radians(OBLIQUITY_DEGREES));
        let cos_declination = cos(asin(sin_declination));
        log.debug(format_args!(
            "Declination            d       = {}",
            Angle(radians_to_degrees(asin(sin_declination)))
        ));

        let phi = degrees_to_radians(latitude);
        let h0 = degrees_to_radians(horizon_altitude(observer.elevation()));
        let hour_angle_cos =
            mul_add(-sin(phi), sin_declination, sin(h0)) / (cos(phi) * cos_declination);
        log.debug(format_args!(
            "Hour angle cosine      cos_w0  = {hour_angle_cos:.9}"
        ));

        Self {
            julian_date,
            day_number,
            mean_solar_time,
            mean_anomaly,
            equation_of_center,
            ecliptic_longitude,
            transit,
            sin_declination,
            hour_angle_cos,
        }
    }

    /// Gets the Julian date the equation was evaluated for.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Gets the day number since J2000 (`n`).
    #[must_use]
    pub const fn day_number(&self) -> f64 {
        self.day_number
    }

    /// Gets the mean solar time (`J*`), in days since J2000.
    #[must_use]
    pub const fn mean_solar_time(&self) -> f64 {
        self.mean_solar_time
    }

    /// Gets the solar mean anomaly (`M`), degrees in [0, 360).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Gets the equation of the center (`C`), degrees.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// Gets the ecliptic longitude (`λ`), degrees in [0, 360).
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Gets the solar transit (solar noon).
    #[must_use]
    pub const fn transit(&self) -> JulianDate {
        self.transit
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub fn declination(&self) -> f64 {
        radians_to_degrees(asin(self.sin_declination))
    }

    /// Gets `cos(w0)`. Values outside [-1, 1] mean polar day or night.
    #[must_use]
    pub const fn hour_angle_cos(&self) -> f64 {
        self.hour_angle_cos
    }

    /// Classifies the day from the hour-angle cosine.
    ///
    /// `cos(w0) > 1`: the sun never climbs to the horizon. `cos(w0) < -1`: it never sinks below it.
    #[must_use]
    pub fn day_kind(&self) -> DayKind {
        if self.hour_angle_cos > 1.0 {
            DayKind::AllNight
        } else if self.hour_angle_cos < -1.0 {
            DayKind::AllDay
        } else {
            DayKind::Regular
        }
    }

    /// Gets the hour angle `w0` in degrees (0 to 180), `None` for polar days and nights.
    #[must_use]
    pub fn hour_angle(&self) -> Option<f64> {
        (self.day_kind() == DayKind::Regular)
            .then(|| radians_to_degrees(acos(self.hour_angle_cos)))
    }

    /// Julian dates of sunrise and sunset, `None` for polar days and nights.
    #[must_use]
    pub fn rise_and_set(&self) -> Option<(JulianDate, JulianDate)> {
        self.hour_angle().map(|w0| self.around_transit(w0))
    }

    fn around_transit(&self, w0: f64) -> (JulianDate, JulianDate) {
        (
            self.transit.add_days(-w0 / 360.0),
            self.transit.add_days(w0 / 360.0),
        )
    }

    /// Builds the result with instants as Unix seconds.
    ///
    /// Polar results carry the boundaries of the UTC day that contains the transit.
    #[must_use]
    pub fn sun_times(&self) -> SunTimes<f64> {
        self.sun_times_with_logger(&Silent)
    }

    /// Like [`SunriseEquation::sun_times`], logging the outcome.
    pub fn sun_times_with_logger<L: Logger + ?Sized>(&self, log: &L) -> SunTimes<f64> {
        let transit = self.transit.to_timestamp();
        if let Some(w0) = self.hour_angle() {
            let (rise, set) = self.around_transit(w0);
            let (rise, set) = (rise.to_timestamp(), set.to_timestamp());
            log.debug(format_args!(
                "Hour angle             w0      = {}",
                Angle(w0)
            ));
            log.debug(format_args!(
                "Sunrise                j_rise  = {}",
                Instant(rise)
            ));
            log.debug(format_args!(
                "Sunset                 j_set   = {}",
                Instant(set)
            ));
            log.info(format_args!(
                "Sunrise {}, sunset {}, day length {}",
                Instant(rise),
                Instant(set),
                DayLength(set - rise)
            ));
            return SunTimes::new(rise, transit, set, DayKind::Regular);
        }

        let kind = self.day_kind();
        // the evaluated day is the one holding the transit, not the one holding the input moment
        let day_start = utc_day_start(floor(transit) as i64) as f64;
        if kind == DayKind::AllNight {
            log.info(format_args!(
                "Polar night: the sun does not rise (cos_w0 = {:.6})",
                self.hour_angle_cos
            ));
        } else {
            log.info(format_args!(
                "Polar day: the sun does not set (cos_w0 = {:.6})",
                self.hour_angle_cos
            ));
        }
        SunTimes::new(day_start, transit, day_start + SECONDS_PER_DAY, kind)
    }
}

/// Calculates sunrise and sunset for a Unix timestamp.
///
/// Returned instants are Unix seconds (UTC). Logs through the `log` crate.
///
/// # Arguments
/// * `timestamp` - Moment of interest, Unix seconds
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `elevation` - Observer elevation in meters (>= 0)
///
/// # Errors
/// Returns error for invalid coordinates or a negative elevation.
///
/// # Example
/// ```
/// use sunrise_equation::equation;
///
/// // 2024-06-21 12:00:00 UTC, Hamilton, Ontario
/// let times = equation::sunrise_sunset_timestamp(1_718_971_200, 43.268_399, -79.774_549, 0.0)
///     .unwrap();
/// assert!(times.is_regular_day());
/// assert!((times.sunrise() - 1_718_962_824.5).abs() < 1.0);
/// ```
pub fn sunrise_sunset_timestamp(
    timestamp: i64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunTimes<f64>> {
    sunrise_sunset_timestamp_with_logger(
        timestamp,
        latitude,
        longitude,
        elevation,
        &LogFacade::default(),
    )
}

/// Calculates sunrise and sunset for a Unix timestamp with an injected logger.
///
/// # Errors
/// Returns error for invalid coordinates or a negative elevation.
pub fn sunrise_sunset_timestamp_with_logger<L: Logger + ?Sized>(
    timestamp: i64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    log: &L,
) -> Result<SunTimes<f64>> {
    let observer = Observer::new(latitude, longitude, elevation)?;
    let julian_date = JulianDate::from_timestamp(timestamp);
    let equation = SunriseEquation::with_logger(julian_date, &observer, log);
    Ok(equation.sun_times_with_logger(log))
}

/// Calculates sunrise and sunset for any timezone-aware moment, in UTC.
///
/// # Errors
/// Returns error for invalid coordinates or a negative elevation, and for
/// instants chrono cannot represent.
///
/// # Example
/// ```rust
/// use sunrise_equation::equation;
/// use chrono::{DateTime, FixedOffset};
///
/// // 00:00 UTC on 2024-12-21
/// let moment = "2024-12-20T19:00:00-05:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let times = equation::sunrise_sunset(moment, 43.268_399, -79.774_549, 74.0).unwrap();
///
/// println!("Sunrise: {}", times.sunrise());
/// println!("Sunset: {}", times.sunset());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset<Tz: TimeZone>(
    moment: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<SunTimes<DateTime<Utc>>> {
    sunrise_sunset_in(moment, latitude, longitude, elevation, &Utc)
}

/// Calculates sunrise and sunset, expressed in `display` time zone.
///
/// The display zone only changes how instants are rendered, never which
/// instants are returned.
///
/// # Errors
/// Returns error for invalid coordinates or a negative elevation, and for
/// instants chrono cannot represent.
///
/// # Example
/// ```rust
/// use sunrise_equation::equation;
/// use chrono::{DateTime, FixedOffset, Utc};
///
/// let moment = "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
/// let times =
///     equation::sunrise_sunset_in(moment, 43.268_399, -79.774_549, 0.0, &eastern).unwrap();
///
/// assert_eq!(times.sunrise().format("%H:%M").to_string(), "05:40");
/// assert_eq!(times.sunset().format("%H:%M").to_string(), "21:04");
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset_in<Tz: TimeZone, Z: TimeZone>(
    moment: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    display: &Z,
) -> Result<SunTimes<DateTime<Z>>> {
    sunrise_sunset_in_with_logger(
        moment,
        latitude,
        longitude,
        elevation,
        display,
        &LogFacade::default(),
    )
}

/// Calculates sunrise and sunset in `display` time zone with an injected logger.
///
/// # Errors
/// Returns error for invalid coordinates or a negative elevation, and for
/// instants chrono cannot represent.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset_in_with_logger<Tz: TimeZone, Z: TimeZone, L: Logger + ?Sized>(
    moment: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    display: &Z,
    log: &L,
) -> Result<SunTimes<DateTime<Z>>> {
    let times = sunrise_sunset_timestamp_with_logger(
        moment.timestamp(),
        latitude,
        longitude,
        elevation,
        log,
    )?;
    times.try_map(|timestamp| {
        timestamp_to_datetime(timestamp).map(|datetime| datetime.with_timezone(display))
    })
}
