use anyhow::{Context, Result};
use clap::Parser;

use slidepanel::cli::CliArgs;
use slidepanel::config::SlidepanelConfig;
use slidepanel::scenario::Scenario;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    slidepanel::tracing::init();

    let config = match &args.config {
        Some(path) => SlidepanelConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SlidepanelConfig::load(),
    };

    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        panels = scenario.panels.len(),
        steps = scenario.steps.len(),
        "running scenario {}",
        args.scenario.display()
    );

    let report = scenario.run(&config, args.advance)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
