use clap::Parser;

/// Extracts hCard, hCalendar and hAudio microformats from a page and prints
/// them, with export links and map coordinates, as JSON.
#[derive(Debug, Parser)]
#[command(name = "oomph", version)]
pub struct Cli {
    /// File path or http(s) URL of the page to scan.
    pub source: String,

    /// URL the page was loaded from, used to qualify relative links.
    /// Defaults to SOURCE when it is a URL.
    #[arg(long, value_name = "URL")]
    pub location: Option<String>,

    /// Report only coordinates present in the markup.
    #[arg(long)]
    pub no_geocode: bool,
}
