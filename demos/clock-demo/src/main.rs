//! Another Hour Demo Application
//!
//! Polls the engine once a second and prints:
//! - Actual local time and the scaled (AH) reading
//! - Hand angles and the AH sector path for a 200x200 dial
//! - A stopwatch running on the instantaneous scale factor
//!
//! Configuration, first match wins:
//! - `AH_CONFIG` holding a JSON clock config
//! - `clock-demo <TIMEZONE> [NORMAL_PERIOD_MINUTES]`
//! - Main clock in UTC
//!
//! Set `RUST_LOG=ah_time=trace` to see per-frame engine logs.

use std::env;
use std::time::Duration;

use ah_core::ClockFace;
use ah_dial::{DayPartition, Dial};
use ah_time::{ClockConfig, ClockEngine, DurationDisplay, FactorSource, Stopwatch};
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<ClockConfig, Box<dyn std::error::Error>> {
    if let Ok(json) = env::var("AH_CONFIG") {
        return Ok(ClockConfig::from_json(&json)?);
    }

    let mut args = env::args().skip(1);
    let Some(timezone) = args.next() else {
        return Ok(ClockConfig::default());
    };
    match args.next() {
        Some(minutes) => Ok(ClockConfig::variable(timezone, minutes.parse()?)),
        None => Ok(ClockConfig::fixed(timezone)),
    }
}

fn print_frame(face: &ClockFace, dial: &Dial, stopwatch: &str) {
    let marker = if face.is_in_ah_period() { "AH" } else { "  " };
    let remaining = face
        .ah_remaining_ms
        .map(|ms| format!(" | AH ends in {}", DurationDisplay::from_ms(f64::from(ms))))
        .unwrap_or_default();

    println!(
        "{} actual {} | scaled {}{} | hands h={:.1} m={:.1} s={:.1} | stopwatch {}",
        marker,
        face.sample,
        face.reading,
        remaining,
        face.hands.hour_deg,
        face.hands.minute_deg,
        face.hands.second_deg,
        stopwatch,
    );

    let sector = dial.ah_sector(&face.sector);
    match sector.overflow_ray() {
        Some((center, tip)) => println!("   sector {} | overflow {} -> {}", sector.to_svg_path(), center, tip),
        None if !sector.is_empty() => println!("   sector {}", sector.to_svg_path()),
        None => {}
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let engine = ClockEngine::new();
    let dial = Dial::default();

    // Fail fast on a bad timezone before entering the loop
    engine.sample(Timestamp::now(), &config)?;

    let partition = DayPartition::new(config.policy.normal_period());
    tracing::info!(
        timezone = %config.timezone,
        normal_minutes = config.policy.normal_period().minutes(),
        normal_percent = partition.normal_percent,
        "clock demo started"
    );
    println!("{}", config.to_json()?);
    println!("Press Ctrl-C to exit.");
    println!();

    let factor_source = FactorSource::Policy(config.policy);
    let mut stopwatch = Stopwatch::new();
    stopwatch.start(Timestamp::now());

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Timestamp::now();
                match engine.evaluate(now, &config) {
                    Ok(face) => {
                        let factor = factor_source.factor_at(face.sample);
                        let elapsed = stopwatch.elapsed_scaled_ms(now, factor);
                        print_frame(&face, &dial, &DurationDisplay::from_ms(elapsed).with_tenths());
                    }
                    Err(err) => tracing::warn!(error = %err, "frame skipped"),
                }
            }
            _ = &mut ctrl_c => {
                stopwatch.stop(Timestamp::now());
                tracing::info!(
                    elapsed_ms = stopwatch.elapsed_real_ms(Timestamp::now()),
                    "clock demo stopped"
                );
                break;
            }
        }
    }

    Ok(())
}
