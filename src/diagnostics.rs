//! Diagnostic logging for the sunrise equation.
//!
//! The calculation reports every intermediate quantity through a [`Logger`].
//! The default, [`LogFacade`], forwards to the [`log`] crate, so any logger
//! implementation (`env_logger`, `android_logger`, ...) picks the lines up.
//! Logging never influences the computed result.

use core::fmt;

use log::Level;

use crate::math::degrees_to_radians;

/// Default `log` target used by [`LogFacade`].
pub const DEFAULT_TARGET: &str = "sunrise_equation";

/// Leveled sink for diagnostic messages.
pub trait Logger {
    /// Verbose per-step diagnostics.
    fn debug(&self, message: fmt::Arguments<'_>);

    /// Summary lines and notable conditions such as polar day.
    fn info(&self, message: fmt::Arguments<'_>);
}

/// Forwards messages to the `log` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    /// Creates a facade logging under a custom target.
    #[must_use]
    pub const fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    /// Gets the `log` target.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }
}

impl Logger for LogFacade {
    fn debug(&self, message: fmt::Arguments<'_>) {
        log::debug!(target: self.target, "{message}");
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        log::info!(target: self.target, "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl Logger for Silent {
    fn debug(&self, _message: fmt::Arguments<'_>) {}

    fn info(&self, _message: fmt::Arguments<'_>) {}
}

/// Adapts a closure taking a [`log::Level`] and the formatted message.
///
/// # Example
/// ```
/// # use sunrise_equation::diagnostics::{FnLogger, Logger};
/// let logger = FnLogger(|level: log::Level, message: core::fmt::Arguments<'_>| {
///     eprintln!("[{level}] {message}");
/// });
/// logger.info(format_args!("hello"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnLogger<F>(pub F);

impl<F> Logger for FnLogger<F>
where
    F: Fn(Level, fmt::Arguments<'_>),
{
    fn debug(&self, message: fmt::Arguments<'_>) {
        (self.0)(Level::Debug, message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        (self.0)(Level::Info, message);
    }
}

/// An angle in degrees, rendered in radians, degrees-minutes-seconds and decimal degrees.
///
/// # Example
/// ```
/// # use sunrise_equation::diagnostics::Angle;
/// assert_eq!(
///     Angle(43.268_399).to_string(),
///     "∠0.755rad = ∠43°16′6″ = ∠43.268°"
/// );
/// assert_eq!(Angle(-79.774_549).to_string(), "∠-1.392rad = ∠-79°46′28″ = ∠-79.775°");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle(pub f64);

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.0;
        let arcseconds = (degrees.abs() * 3600.0) as u64;
        let sign = if degrees < 0.0 && arcseconds > 0 {
            "-"
        } else {
            ""
        };
        write!(
            f,
            "∠{:.3}rad = ∠{sign}{}°{}′{}″ = ∠{degrees:.3}°",
            degrees_to_radians(degrees),
            arcseconds / 3600,
            arcseconds / 60 % 60,
            arcseconds % 60,
        )
    }
}

/// A Unix timestamp in seconds, rendered with its UTC calendar time when available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant(pub f64);

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)?;
        #[cfg(feature = "chrono")]
        if let Ok(datetime) = crate::time::timestamp_to_datetime(self.0) {
            write!(f, " = {}", datetime.format("%Y-%m-%d %H:%M:%S%.3f UTC"))?;
        }
        Ok(())
    }
}

/// A duration in seconds, rendered in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayLength(pub f64);

impl fmt::Display for DayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} hours", self.0 / 3600.0)
    }
}
