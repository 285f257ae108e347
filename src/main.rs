use std::path::Path;

use anyhow::{Context, bail};
use chrono::Utc;
use log::info;
use weather_health_risk::utils::logging::log_warning;
use weather_health_risk::{RiskEngineConfig, assess_batch, read_requests};

const USAGE: &str = "usage: health-risk <request.json> [config.json]";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (request_path, config_path) = match args.as_slice() {
        [request] => (Path::new(request), None),
        [request, config] => (Path::new(request), Some(Path::new(config))),
        _ => bail!(USAGE),
    };

    let config = match config_path {
        Some(path) => RiskEngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RiskEngineConfig::default(),
    };

    let requests = read_requests(request_path)
        .with_context(|| format!("Failed to read requests from {}", request_path.display()))?;

    for (index, request) in requests.iter().enumerate() {
        if !(1..=5).contains(&request.air_quality.aqi) {
            log_warning(
                "AQI outside 1-5 will score as clean air",
                Some(&format!("request {index} has aqi {}", request.air_quality.aqi)),
            );
        }
    }

    let results = assess_batch(&requests, &config, Utc::now());

    let output = if results.len() == 1 {
        serde_json::to_string_pretty(&results[0])
    } else {
        serde_json::to_string_pretty(&results)
    }
    .context("Failed to serialize assessment")?;

    println!("{output}");
    info!("Wrote {} assessments", results.len());

    Ok(())
}
