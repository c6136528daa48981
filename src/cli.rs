//! Command-line argument parsing for the scenario runner

use clap::Parser;
use std::path::PathBuf;

/// Replay a panel scenario and print a JSON report
#[derive(Parser, Debug)]
#[command(name = "slidepanel", version, about = "Replay side-panel scenarios")]
pub struct CliArgs {
    /// Scenario file (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Milliseconds to let pass after the last step so pending timers fire
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub advance: u64,

    /// Config file to use instead of ~/.config/slidepanel/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}
