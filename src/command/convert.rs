//! Changelog conversion command implementation.
use color_eyre::eyre::Context;
use log::*;
use std::{
    env,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    changelog::Changelog,
    cli,
    config::Config,
    format::{self, QuoteMode},
    result::Result,
};

/// Execute conversion: read the version's changelog and print quoted lines
/// to stdout.
pub fn execute(args: &cli::Args) -> Result<()> {
    let cwd = env::current_dir()?;

    let config = Config::load(&cwd)
        .wrap_err("failed to load fastlane2json configuration")?;

    let mode = resolve_mode(args, &config);

    let changelog =
        Changelog::locate(Path::new(&config.changelogs_dir), &args.version);

    debug!(
        "converting {} using {:?} quoting",
        changelog.path().display(),
        mode
    );

    let body = changelog.read().wrap_err_with(|| {
        format!("failed to convert changelog for version {}", args.version)
    })?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    format::render(&body, mode, &mut out)?;
    out.flush()?;

    Ok(())
}

/// The CLI flag enables escaping regardless of the configured default.
fn resolve_mode(args: &cli::Args, config: &Config) -> QuoteMode {
    if args.escape || config.escape {
        QuoteMode::Escaped
    } else {
        QuoteMode::Verbatim
    }
}
