//! Sunrise and sunset at the winter solstice for cities around the world, in local time.

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use sunrise_equation::{equation, DayKind, SunTimes};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    tz: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            tz: Tz::Arctic__Longyearbyen,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216_667,
            longitude: -149.866_667,
            tz: Tz::America__Anchorage,
        },
        City {
            name: "Hamilton, Ontario",
            latitude: 43.268_399,
            longitude: -79.774_549,
            tz: Tz::America__Toronto,
        },
        City {
            name: "Singapore",
            latitude: 1.283_333,
            longitude: 103.833_333,
            tz: Tz::Asia__Singapore,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840_556,
            longitude: 174.74,
            tz: Tz::Pacific__Auckland,
        },
    ];

    // 00:00 UTC selects the transit of that calendar date at every longitude
    let date = Utc.with_ymd_and_hms(2023, 12, 21, 0, 0, 0).unwrap();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        println!("Date: December 21, 2023 (Winter Solstice)");

        let times =
            equation::sunrise_sunset_in(date, city.latitude, city.longitude, 0.0, &city.tz)?;
        print_times(&times);
        println!();
    }

    Ok(())
}

fn print_times(times: &SunTimes<chrono::DateTime<Tz>>) {
    const FORMAT: &str = "%H:%M:%S %Z";

    match times.kind() {
        DayKind::Regular => {
            println!("  Sunrise: {}", times.sunrise().format(FORMAT));
            println!("  Transit: {}", times.transit().format(FORMAT));
            println!("  Sunset:  {}", times.sunset().format(FORMAT));
            if let Some(length) = times.day_length() {
                println!("  Daylight: {} min", length.num_minutes());
            }
        }
        DayKind::AllDay => {
            println!("  Sun above the horizon all day");
            println!("  Transit: {}", times.transit().format(FORMAT));
        }
        DayKind::AllNight => {
            println!("  Sun below the horizon all day");
            println!("  Transit: {}", times.transit().format(FORMAT));
        }
    }
}
