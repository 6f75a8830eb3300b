//! Outlook classification CLI.
//!
//! Loads an extracted convective outlook, classifies each configured
//! location and prints the per-location risk summary (plus the alert
//! subject that would fire, if any).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use geo::Point;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use spc_outlook::config::Config;
use spc_outlook::loader::load_outlook_dir;
use spc_outlook::report::{hazard_message, render_alert};

#[derive(Parser, Debug)]
#[command(name = "classify")]
#[command(about = "Classify locations against an SPC day-1 convective outlook")]
struct Args {
    /// Config file with outlook directory and monitored locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Outlook shapefile directory (overrides the config file)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Ad-hoc longitude to classify
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Ad-hoc latitude to classify
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Print summaries as JSON instead of log lines
    #[arg(long)]
    json: bool,
}

struct Target {
    name: String,
    point: Point<f64>,
    message: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Some(Config::load_from_file(path)?),
        None => None,
    };

    let dir = args
        .dir
        .clone()
        .or_else(|| config.as_ref().map(|c| c.outlook_dir.clone()))
        .context("Either --dir or --config must be given")?;

    let outlook = load_outlook_dir(&dir)?;

    let mut targets: Vec<Target> = Vec::new();
    match (args.lon, args.lat) {
        (Some(lon), Some(lat)) => targets.push(Target {
            name: format!("({}, {})", lon, lat),
            point: Point::new(lon, lat),
            message: None,
        }),
        (None, None) => {}
        _ => warn!("Both --lon and --lat are required for an ad-hoc point; ignoring"),
    }
    if let Some(config) = &config {
        for location in &config.locations {
            targets.push(Target {
                name: location.name.clone(),
                point: Point::new(location.lon, location.lat),
                message: location.message.clone(),
            });
        }
    }
    if targets.is_empty() {
        bail!("No locations to classify (pass --lon/--lat or configure locations)");
    }

    for target in &targets {
        let summary = outlook.evaluate(target.point);

        if args.json {
            println!(
                "{}",
                json!({ "name": target.name, "summary": summary })
            );
            continue;
        }

        match summary.categorical {
            Some(level) => info!("{}: {} risk", target.name, level.code()),
            None => info!("{}: no severe risk", target.name),
        }
        info!("  wind: {}", hazard_message(&summary.wind));
        info!("  hail: {}", hazard_message(&summary.hail));
        info!("  tornado: {}", hazard_message(&summary.tornado));

        if let Some(alert) = render_alert(target.message.as_deref().unwrap_or(""), &summary) {
            info!("  would alert: {}", alert.subject);
        }
    }

    Ok(())
}
