//! Demo data seeder
//!
//! Writes a few weeks of plausible vital-sign readings into a store so the
//! dashboard has something to show. Values are normally distributed around
//! textbook resting values and classified through the real pipeline.
//!
//! ```bash
//! cargo run --bin seed-demo -- --days 30 --per-day 2
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::info;

use vitaltrack::storage::ReadingStore;
use vitaltrack::types::{PressureValue, Reading, ReadingValue, VitalType};

#[derive(Parser, Debug)]
#[command(name = "seed-demo")]
#[command(about = "Seed a vitaltrack store with demo readings")]
struct Args {
    /// Database directory (same default as the server)
    #[arg(long, default_value = "./vitaltrack-data")]
    data_dir: PathBuf,

    /// User partition to seed
    #[arg(long, default_value = "local")]
    user: String,

    /// How many days of history to generate
    #[arg(long, default_value = "30")]
    days: u32,

    /// Readings per vital type per day
    #[arg(long, default_value = "2")]
    per_day: u32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let store = ReadingStore::open(&args.data_dir)
        .with_context(|| format!("Failed to open store at {}", args.data_dir.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Resting adult distributions
    let heart_rate = Normal::<f64>::new(72.0, 9.0).context("heart rate distribution")?;
    let systolic = Normal::<f64>::new(119.0, 12.0).context("systolic distribution")?;
    let diastolic = Normal::<f64>::new(77.0, 8.0).context("diastolic distribution")?;
    let temp_f = Normal::<f64>::new(98.2, 0.6).context("temperature distribution")?;
    let spo2 = Normal::<f64>::new(97.0, 1.6).context("oxygen saturation distribution")?;
    let resp = Normal::<f64>::new(15.0, 2.2).context("respiratory rate distribution")?;
    let bmi = Normal::<f64>::new(24.5, 0.4).context("bmi distribution")?;

    let now = Utc::now();
    let mut count = 0usize;

    for day in (0..args.days).rev() {
        for slot in 0..args.per_day {
            // Spread slots across the day with a little jitter, always in
            // the past so fresh seeds land inside the stats window.
            let hour = 8 + (12 * slot) / args.per_day.max(1);
            let timestamp = now - Duration::days(i64::from(day) + 1)
                + Duration::hours(i64::from(hour))
                + Duration::minutes(rng.gen_range(0..60));

            let samples = [
                (
                    VitalType::HeartRate,
                    ReadingValue::Scalar(heart_rate.sample(&mut rng).round()),
                    "bpm",
                ),
                (
                    VitalType::BloodPressure,
                    ReadingValue::Pressure(PressureValue::new(
                        systolic.sample(&mut rng).round(),
                        diastolic.sample(&mut rng).round(),
                    )),
                    "mmHg",
                ),
                (
                    VitalType::Temperature,
                    ReadingValue::Scalar((temp_f.sample(&mut rng) * 10.0).round() / 10.0),
                    "°F",
                ),
                (
                    VitalType::OxygenSaturation,
                    ReadingValue::Scalar(spo2.sample(&mut rng).round().min(100.0)),
                    "%",
                ),
                (
                    VitalType::RespiratoryRate,
                    ReadingValue::Scalar(resp.sample(&mut rng).round()),
                    "breaths/min",
                ),
                (
                    VitalType::Bmi,
                    ReadingValue::Scalar((bmi.sample(&mut rng) * 10.0).round() / 10.0),
                    "kg/m²",
                ),
            ];

            for (vital_type, value, unit) in samples {
                let reading = Reading::new(vital_type, value, unit, Some(timestamp), None);
                store.save_reading(&args.user, &reading)?;
                count += 1;
            }
        }
    }

    store.flush()?;
    info!(
        user = %args.user,
        readings = count,
        days = args.days,
        "Demo data seeded"
    );

    Ok(())
}
