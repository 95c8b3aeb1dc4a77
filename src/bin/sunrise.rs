//! Prints today's (or a given day's) sunrise and sunset for a location.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use log::LevelFilter;
use sunrise_equation::diagnostics::LogFacade;
use sunrise_equation::{equation, DayKind, SunTimes};

#[derive(Parser)]
#[command(name = "sunrise", about = "Sunrise and sunset from the Sunrise Equation")]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(long, default_value_t = 43.268_399, allow_hyphen_values = true)]
    latitude: f64,
    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = -79.774_549, allow_hyphen_values = true)]
    longitude: f64,
    /// Elevation in meters
    #[arg(long, default_value_t = 74.0)]
    elevation: f64,
    /// IANA time zone for the printed times
    #[arg(long, default_value = "America/Toronto")]
    timezone: String,
    /// Calendar date (YYYY-MM-DD); defaults to now
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Log every intermediate quantity
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let tz: Tz = cli
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("unknown time zone {:?}: {e}", cli.timezone))?;
    let moment = moment_for(cli.date);

    let times = equation::sunrise_sunset_in_with_logger(
        moment,
        cli.latitude,
        cli.longitude,
        cli.elevation,
        &tz,
        &LogFacade::default(),
    )
    .context("calculation failed")?;

    println!(
        "Location:    {:.6}°, {:.6}°, {} m",
        cli.latitude, cli.longitude, cli.elevation
    );
    println!("Date:        {} ({tz})", times.transit().date_naive());
    print_times(&times);
    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Start of `date` in UTC, or the current instant.
///
/// The day number rounds up, so UTC midnight selects the transit of that date.
fn moment_for(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.map_or_else(Utc::now, |date| date.and_time(NaiveTime::MIN).and_utc())
}

fn print_times(times: &SunTimes<DateTime<Tz>>) {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

    match times.kind() {
        DayKind::Regular => {
            println!("Sunrise:     {}", times.sunrise().format(FORMAT));
            println!("Solar noon:  {}", times.transit().format(FORMAT));
            println!("Sunset:      {}", times.sunset().format(FORMAT));
            if let Some(length) = times.day_length() {
                let seconds = length.num_seconds();
                println!(
                    "Day length:  {}h {:02}m {:02}s",
                    seconds / 3600,
                    seconds / 60 % 60,
                    seconds % 60
                );
            }
        }
        DayKind::AllDay => {
            println!("Polar day:   the sun does not set");
            println!("Solar noon:  {}", times.transit().format(FORMAT));
        }
        DayKind::AllNight => {
            println!("Polar night: the sun does not rise");
            println!("Solar noon:  {}", times.transit().format(FORMAT));
        }
    }
}
