use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use folio_carousel::CarouselRuntime;
use folio_config::{CarouselConfig, ConfigLoader, loader::load_from_file};
use folio_model::Catalog;
use log::LevelFilter;

mod terminal;

const DEMO_CATALOG: &str = include_str!("../assets/demo_catalog.json");

#[derive(Parser, Debug)]
#[command(
    name = "folio-carousel",
    about = "Auto-rotating project carousel for the terminal"
)]
struct Cli {
    /// JSON project catalog; the bundled demo catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Carousel settings (TOML or JSON); overrides FOLIO_CAROUSEL_CONFIG_*
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, help = "Start with auto-rotation paused")]
    no_auto_rotate: bool,
    /// Auto-rotation period, e.g. `4s` or `2500ms`
    #[arg(long, value_parser = humantime::parse_duration)]
    interval: Option<Duration>,
    /// Write logs here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let mut builder = if std::env::var("RUST_LOG").is_err() {
        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Warn);
        if log_file.is_some() {
            builder
                .filter_module("folio_carousel", LevelFilter::Debug)
                .filter_module("folio_config", LevelFilter::Info);
        }
        builder
    } else {
        Builder::from_default_env()
    };

    let target = match log_file {
        Some(path) => Target::Pipe(Box::new(
            File::create(path)
                .with_context(|| format!("create log file {}", path.display()))?,
        )),
        None => Target::Stderr,
    };
    builder.target(target).init();
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CarouselConfig> {
    let mut config = match &cli.config {
        Some(path) => load_from_file(path)?,
        None => {
            let load = ConfigLoader::from_env().load()?;
            log::info!("Carousel config source: {:?}", load.source);
            load.config
        }
    };

    if cli.no_auto_rotate {
        config.auto_rotate_on_mount = false;
    }
    if let Some(interval) = cli.interval {
        config.auto_rotate_interval_ms = u64::try_from(interval.as_millis())
            .context("--interval is too large")?;
        config.validate().context("invalid --interval")?;
    }
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("load catalog {}", path.display())),
        None => Catalog::from_json_str(DEMO_CATALOG)
            .context("parse bundled demo catalog"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Before the logger so RUST_LOG may come from .env.
    let env_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
        dotenvy::Error::Io(_) => Ok(false),
        _ => Err(err),
    });
    init_logger(cli.log_file.as_deref())?;
    if env_loaded.context("load .env")? {
        log::debug!("Loaded .env");
    }

    let config = resolve_config(&cli)?;
    let catalog = load_catalog(cli.catalog.as_deref())?;
    log::info!("Mounting carousel with {} projects", catalog.len());

    let (handle, driver) = CarouselRuntime::spawn(catalog, config);
    terminal::run(handle).await?;

    let engine = driver.await.context("carousel driver task failed")?;
    log::info!("Carousel stopped at index {}", engine.current_index());
    Ok(())
}
