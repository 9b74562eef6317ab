use anyhow::Context;
use clap::Parser;
use oomph_app::cli::Cli;
use oomph_app::source::Source;
use oomph_core::config::load_config;
use oomph_service::geocode::{Geocoder, NominatimGeocoder};
use oomph_service::scan::ScanSession;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout carries the JSON report
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config().context("loading configuration")?;

    // RUST_LOG wins over the configured level
    match EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.as_str()))
    {
        Ok(filter) => {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => {
            tracing::warn!(level = %config.logging.level, error = %e, "Invalid log level in config, keeping info");
        }
    }

    let document = Source::parse(&cli.source)?
        .load(&config.geocoder.user_agent)
        .await?;
    let location = cli.location.as_deref().or(document.location.as_deref());

    let session = ScanSession::from_html(&document.html, location)
        .with_context(|| format!("scanning {}", cli.source))?;
    if session.extraction().is_empty() {
        anyhow::bail!("no microformats found in {}", cli.source);
    }

    let geocoder = if config.geocoder.enabled && !cli.no_geocode {
        Some(NominatimGeocoder::from_config(&config.geocoder).context("configuring geocoder")?)
    } else {
        tracing::info!("Geocoding disabled");
        None
    };

    // Ctrl-C abandons the remaining lookups
    let generation = session.generation();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, abandoning geocoding");
            generation.invalidate();
        }
    });

    let report = session
        .resolve(
            geocoder.as_ref().map(|g| g as &dyn Geocoder),
            config.geocoder.timeout(),
        )
        .await;
    interrupt.abort();
    let report = report.context("resolving addresses")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing scan report")?
    );
    Ok(())
}
