//! Sunrise/sunset from plain Unix timestamps, without the chrono API.
//!
//! The numeric functions also work in `no_std` builds with the `libm` feature.

use sunrise_equation::diagnostics::FnLogger;
use sunrise_equation::time::{utc_day_start, JulianDate};
use sunrise_equation::{equation, Observer, SunriseEquation};

// 2023-06-21 00:00:00 UTC
const SOLSTICE: i64 = 1_687_305_600;

fn hours_into_day(timestamp: f64) -> f64 {
    (timestamp - utc_day_start(timestamp.floor() as i64) as f64) / 3600.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let times = equation::sunrise_sunset_timestamp(
        SOLSTICE,
        37.7749,   // San Francisco latitude
        -122.4194, // San Francisco longitude
        0.0,       // elevation (m)
    )?;

    println!("San Francisco, June 21, 2023 (UTC):");
    for (label, timestamp) in [
        ("Sunrise", times.sunrise()),
        ("Transit", times.transit()),
        ("Sunset", times.sunset()),
    ] {
        let hours = hours_into_day(*timestamp);
        println!("  {label:<8}  {timestamp:.0} ({hours:.2} h)");
    }
    if let Some(seconds) = times.day_length_seconds() {
        println!("  Daylight: {:.2} h", seconds / 3600.0);
    }

    // Polar results still carry a transit; sunrise and sunset mark its UTC day
    let arctic = equation::sunrise_sunset_timestamp(SOLSTICE, 78.22, 15.65, 0.0)?;
    println!("\nLongyearbyen, same day: {:?}", arctic.kind());
    println!("  Transit:  {:.2} h", hours_into_day(*arctic.transit()));
    println!("  Day spans {:.0} .. {:.0}", arctic.sunrise(), arctic.sunset());

    // Intermediates of the equation, with every step printed as it is computed
    println!("\nSan Francisco from 500 m, step by step:");
    let observer = Observer::new(37.7749, -122.4194, 500.0)?;
    let printer = FnLogger(|level: log::Level, message: core::fmt::Arguments<'_>| {
        println!("  [{level}] {message}");
    });
    let julian_date = JulianDate::from_timestamp(SOLSTICE);
    let eq = SunriseEquation::with_logger(julian_date, &observer, &printer);
    if let Some(w0) = eq.hour_angle() {
        println!("  Hour angle: {w0:.3}°");
    }

    Ok(())
}
