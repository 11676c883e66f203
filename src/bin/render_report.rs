//! Render a saved report to HTML without talking to the backend
//!
//! Accepts either a bare report (as saved by the download button) or a full
//! upload response with `report` and `insights`.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::Value;

use bloodwork::api::UploadResponse;
use bloodwork::flows::upload::apply_upload;
use bloodwork::models::{Insights, Report};
use bloodwork::ui::HtmlSurface;
use bloodwork::{Config, SessionState};

#[derive(Debug, Parser)]
#[command(name = "render_report", about = "Render a saved blood report to HTML")]
struct Cli {
    /// Report JSON (blood_report.json or an /upload response)
    report: PathBuf,

    /// Separate insights JSON
    insights: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Prefix for plot image URLs
    #[arg(long)]
    asset_base: Option<String>,
}

fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let mut value = read_json(&cli.report)?;
    let bundled_insights = value.get_mut("insights").map(Value::take);
    let report: Report = match value.get_mut("report").map(Value::take) {
        Some(report) => serde_json::from_value(report)?,
        None => serde_json::from_value(value)?,
    };

    let insights: Option<Insights> = match &cli.insights {
        Some(path) => Some(serde_json::from_value(read_json(path)?)?),
        None => match bundled_insights {
            Some(Value::Null) | None => None,
            Some(v) => Some(serde_json::from_value(v)?),
        },
    };

    let asset_base = cli
        .asset_base
        .unwrap_or_else(|| config.asset_base().to_string());
    let out = cli.out.unwrap_or(config.output_dir);

    let mut session = SessionState::new();
    let mut surface = HtmlSurface::new(config.role);
    let outcome = apply_upload(
        &mut session,
        &mut surface,
        UploadResponse { report, insights },
        &asset_base,
    );

    let page = surface.write_to(&out)?;
    println!("Rendered {:?} to {}", outcome, page.display());
    Ok(())
}
