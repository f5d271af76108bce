//! CLI argument parsing for the changelog converter.
use clap::Parser;

/// Convert a fastlane changelog file into lines for a JSON array literal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Version identifier naming the changelog file to convert
    /// (resolves to <changelogs-dir>/<version>.txt).
    #[arg(id = "app_version", value_name = "VERSION")]
    pub version: String,

    #[arg(long, default_value_t = false)]
    /// Render each line as a proper JSON string literal. Off by default:
    /// the historical output embeds quotes and backslashes unescaped.
    pub escape: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
