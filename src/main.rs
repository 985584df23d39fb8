//! Broadsheet - a terminal reader for daily regional newspaper editions.
//!
//! # Usage
//!
//! ```bash
//! broadsheet --api-base https://news.example.com
//! broadsheet --region 12 --date 2026-10-18
//! broadsheet --file edition.json --watch
//! broadsheet --print --width 72
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use broadsheet::app::App;
use broadsheet::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use broadsheet::dates::{format_date, parse_date, today};
use broadsheet::edition::{EditionView, LayoutOptions};
use broadsheet::provider::{DEFAULT_TIMEOUT, EditionSource, FileSource, HttpSource};
use broadsheet::regions::{REGIONS, known_ids, region_index};
use broadsheet::ui::theme::{Background, detect_background, set_background};

const PRINT_WIDTH: u16 = 80;

/// A terminal reader for daily regional newspaper editions
#[derive(Parser, Debug)]
#[command(name = "broadsheet", version, about, long_about = None)]
struct Cli {
    /// Region id to open (7, 8, 9, 12, 13, 14, 17, 18 or 19)
    #[arg(long, value_name = "ID")]
    region: Option<String>,

    /// Edition date [default: today, UTC]
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Base URL of the edition API
    #[arg(long, value_name = "URL", env = "BROADSHEET_API_BASE_URL")]
    api_base: Option<String>,

    /// Read the edition from a local JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Reload when the edition file changes (with --file)
    #[arg(short, long)]
    watch: bool,

    /// Color theme background
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the laid-out edition as plain text and exit
    #[arg(long)]
    print: bool,

    /// Page width in columns
    #[arg(long, value_name = "COLS")]
    width: Option<u16>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", env = "BROADSHEET_LOG")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Route logs to a file when asked, to stderr in print mode, and nowhere
/// otherwise: the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, print: bool) -> Result<()> {
    let filter = || EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if print {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn apply_theme(theme: ThemeMode) {
    match theme {
        ThemeMode::Auto => set_background(detect_background()),
        ThemeMode::Light => set_background(Some(Background::Light)),
        ThemeMode::Dark => set_background(Some(Background::Dark)),
    }
}

fn build_source(
    cli: &Cli,
    effective: &ConfigFlags,
    timeout: Duration,
) -> Result<Arc<dyn EditionSource>> {
    if let Some(path) = &cli.file {
        return Ok(Arc::new(FileSource::new(path)));
    }
    let base_url = cli
        .api_base
        .clone()
        .or_else(|| effective.api_base.clone())
        .unwrap_or_default();
    let source = HttpSource::new(&base_url, timeout).context("Cannot reach the edition API")?;
    Ok(Arc::new(source))
}

fn print_edition(
    source: &dyn EditionSource,
    region: usize,
    date: NaiveDate,
    width: u16,
) -> Result<()> {
    let region = &REGIONS[region];
    let edition = match source.fetch(&region.id, date) {
        Ok(edition) => edition,
        Err(err) => {
            error!(region_id = %region.id, %date, error = %err, "edition fetch failed");
            let message = err.user_message();
            if err.to_string() == message {
                anyhow::bail!("{message}");
            }
            return Err(anyhow::Error::new(err).context(message));
        }
    };
    let view = EditionView::build(
        edition,
        LayoutOptions {
            width,
            region_label: region.label.clone(),
            date: format_date(date),
        },
    );
    let mut out = std::io::stdout().lock();
    out.write_all(view.to_plain_text().as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = cli.log_file.clone().or_else(|| effective.log_file.clone());
    init_logging(log_file.as_deref(), cli.print)?;

    let region = match effective.region.as_deref() {
        Some(id) => region_index(id.trim()).with_context(|| {
            format!("Unknown region {id:?} (known regions: {})", known_ids())
        })?,
        None => 0,
    };
    let date = cli.date.unwrap_or_else(today);
    let timeout = effective
        .timeout_secs
        .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
    let source = build_source(&cli, &effective, timeout)?;
    info!(source = %source.describe(), region, %date, "configured");

    if cli.print {
        return print_edition(
            source.as_ref(),
            region,
            date,
            cli.width.unwrap_or(PRINT_WIDTH),
        );
    }

    apply_theme(effective.theme.unwrap_or(ThemeMode::Auto));

    let mut app = App::new(source)
        .with_region_index(region)
        .with_date(date)
        .with_watch(effective.watch)
        .with_max_page_width(cli.width)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
