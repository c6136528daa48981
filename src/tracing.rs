//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=slidepanel::panel=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/slidepanel/logs/slidepanel.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::runtime::Page;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// reports on stdout stay machine readable. File logging is always at debug
/// level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "slidepanel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel visibility for diffing between steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    pub panels: Vec<(String, bool)>,
}

impl VisibilitySnapshot {
    pub fn from_page(page: &Page) -> Self {
        Self {
            panels: page
                .controllers()
                .iter()
                .map(|c| {
                    let name = c
                        .fragment()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("panel {}", c.id().0));
                    (name, c.is_visible(page.document()))
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &VisibilitySnapshot) -> Option<String> {
        let changes: Vec<String> = self
            .panels
            .iter()
            .zip(&other.panels)
            .filter(|(before, after)| before.1 != after.1)
            .map(|(_, (name, visible))| {
                format!("{}: {}", name, if *visible { "shown" } else { "hidden" })
            })
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
