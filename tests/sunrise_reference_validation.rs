#![cfg(feature = "chrono")]

//! Validation against reference values of the Sunrise Equation.

use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use sunrise_equation::diagnostics::Silent;
use sunrise_equation::{equation, DayKind};

/// Same formula, different float library: sub-millisecond agreement is expected.
const TOLERANCE_SECONDS: f64 = 0.01;

#[derive(Debug)]
struct ReferenceRecord {
    moment: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    kind: DayKind,
    sunrise: Option<f64>,
    sunset: Option<f64>,
}

impl ReferenceRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        let kind = match &record[4] {
            "regular" => DayKind::Regular,
            "polar_day" => DayKind::AllDay,
            "polar_night" => DayKind::AllNight,
            other => return Err(format!("unknown condition {other}").into()),
        };
        let optional = |field: &str| -> Result<Option<f64>, Box<dyn Error>> {
            if field.is_empty() {
                Ok(None)
            } else {
                Ok(Some(field.parse()?))
            }
        };
        Ok(Self {
            moment: record[0].parse()?,
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            elevation: record[3].parse()?,
            kind,
            sunrise: optional(&record[5])?,
            sunset: optional(&record[6])?,
        })
    }
}

fn load_records() -> Result<Vec<ReferenceRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/sunrise_equation_reference.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(ReferenceRecord::from_csv_record(&result?)?);
    }
    Ok(records)
}

#[test]
fn test_reference_data() -> Result<(), Box<dyn Error>> {
    let records = load_records()?;
    assert!(records.len() > 100, "expected the full reference table");

    let mut max_error = 0.0_f64;
    let mut polar_count = 0;

    for record in &records {
        let times = equation::sunrise_sunset_timestamp_with_logger(
            record.moment.timestamp(),
            record.latitude,
            record.longitude,
            record.elevation,
            &Silent,
        )?;

        assert_eq!(
            times.kind(),
            record.kind,
            "day kind mismatch for {record:?}"
        );

        if record.kind == DayKind::Regular {
            let sunrise_error = (times.sunrise() - record.sunrise.unwrap()).abs();
            let sunset_error = (times.sunset() - record.sunset.unwrap()).abs();
            assert!(
                sunrise_error < TOLERANCE_SECONDS && sunset_error < TOLERANCE_SECONDS,
                "sunrise error {sunrise_error:.6}s, sunset error {sunset_error:.6}s for {record:?}"
            );
            max_error = max_error.max(sunrise_error).max(sunset_error);
        } else {
            polar_count += 1;
        }
    }

    println!(
        "Validated {} records ({polar_count} polar), max error {max_error:.6}s",
        records.len()
    );
    assert!(polar_count > 0);
    Ok(())
}

#[test]
fn test_reference_data_through_chrono_api() -> Result<(), Box<dyn Error>> {
    for record in load_records()? {
        let times = equation::sunrise_sunset(
            record.moment,
            record.latitude,
            record.longitude,
            record.elevation,
        )?;

        assert_eq!(times.kind(), record.kind);
        if let (Some(sunrise), Some(sunset)) = (record.sunrise, record.sunset) {
            let actual_sunrise = times.sunrise().timestamp_micros() as f64 / 1e6;
            let actual_sunset = times.sunset().timestamp_micros() as f64 / 1e6;
            assert!((actual_sunrise - sunrise).abs() < TOLERANCE_SECONDS);
            assert!((actual_sunset - sunset).abs() < TOLERANCE_SECONDS);
        }
    }
    Ok(())
}
