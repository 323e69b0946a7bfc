use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use tracing::info;

use feed_client::FeedClient;
use feed_model::{DeviceAttribute, Endpoint, FeedKind, Response, ResultRights};
use pipeline::{queries, FilterContext};

/// rights-scan - licensing feed scanner
#[derive(Parser)]
#[command(name = "rights-scan")]
#[command(about = "Filters content-licensing metadata from the asset and rights feeds", long_about = None)]
struct Cli {
    /// URL of the asset feed
    #[arg(long)]
    asset_url: Option<String>,

    /// URL of the rights feed
    #[arg(long)]
    rights_url: Option<String>,

    /// Read the asset feed payload from a JSON file instead of fetching
    #[arg(long)]
    asset_file: Option<PathBuf>,

    /// Read the rights feed payload from a JSON file instead of fetching
    #[arg(long)]
    rights_file: Option<PathBuf>,

    /// Basic-auth username for the feeds (falls back to FEED_USERNAME)
    #[arg(long)]
    username: Option<String>,

    /// Basic-auth password for the feeds (falls back to FEED_PASSWORD)
    #[arg(long)]
    password: Option<String>,

    /// Fetch attempts per feed before giving up
    #[arg(long, default_value = "3")]
    attempts: u32,

    /// Origin that qualifies endpoints for HD delivery
    #[arg(long, default_value = "level3")]
    origin: String,

    /// Device attribute for the playability query
    /// (device_platform, device_type or provider)
    #[arg(long, default_value = "device_platform")]
    device_attribute: String,

    /// Device value for the playability query
    #[arg(long, default_value = "ROKU")]
    device_value: String,

    /// Print titles playable on the requested device
    #[arg(long)]
    show_device: bool,

    /// Print titles playable on the requested device with an active window
    #[arg(long)]
    show_device_active: bool,

    /// Emit one JSON document instead of the human-readable listing
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("Starting execution");

    // A bad attribute tag is a usage error, not an empty result.
    let attribute: DeviceAttribute = cli
        .device_attribute
        .parse()
        .context("unrecognized --device-attribute")?;

    let client = build_client(&cli);
    let asset_payload = load_payload(
        &client,
        cli.asset_file.as_deref(),
        cli.asset_url.as_deref(),
        "asset",
    )
    .await?;
    let rights_payload = load_payload(
        &client,
        cli.rights_file.as_deref(),
        cli.rights_url.as_deref(),
        "rights",
    )
    .await?;

    // A malformed payload is fatal for the run; no partial recovery.
    let asset_response =
        Response::from_value(&asset_payload, FeedKind::Asset).context("decoding the asset feed")?;
    let rights_response = Response::from_value(&rights_payload, FeedKind::Right)
        .context("decoding the rights feed")?;

    let context = FilterContext::new(Utc::now().naive_utc());

    let playable = queries::device_playable_titles(
        rights_response.rights().to_vec(),
        attribute,
        &cli.device_value,
        &context,
    )?;
    let playable_active = queries::active_titles(playable.clone(), &context)?;
    let endpoints = queries::active_manifest_endpoints(
        rights_response.rights(),
        asset_response.assets(),
        &cli.origin,
        &context,
    )?;

    if cli.json {
        print_json(&playable, &playable_active, &endpoints)?;
    } else {
        if cli.show_device {
            print_titles(
                &playable,
                &format!("Titles playable on {}:", cli.device_value),
            );
        }
        if cli.show_device_active {
            print_titles(
                &playable_active,
                &format!("Active titles playable on {}:", cli.device_value),
            );
        }
        print_endpoints(&endpoints, "Manifests of active endpoints:");
    }

    info!("Ending execution");
    Ok(())
}

/// Resolve credentials from flags first, then the environment.
fn build_client(cli: &Cli) -> FeedClient {
    let username = cli
        .username
        .clone()
        .or_else(|| std::env::var("FEED_USERNAME").ok());
    let password = cli
        .password
        .clone()
        .or_else(|| std::env::var("FEED_PASSWORD").ok());

    let mut client = FeedClient::new(cli.attempts);
    if let (Some(username), Some(password)) = (username, password) {
        client = client.with_basic_auth(username, password);
    }
    client
}

/// Obtain one raw feed payload, from a local file or over HTTP.
async fn load_payload(
    client: &FeedClient,
    file: Option<&Path>,
    url: Option<&str>,
    feed: &str,
) -> Result<Value> {
    if let Some(path) = file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading the {feed} feed from {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("parsing the {feed} feed file"));
    }

    let Some(url) = url else {
        bail!("no source for the {feed} feed: pass --{feed}-url or --{feed}-file");
    };
    info!("Fetching {feed} feed");
    client
        .fetch(url)
        .await
        .with_context(|| format!("fetching the {feed} feed"))
}

fn print_titles(results: &[ResultRights], header: &str) {
    println!("{}", header.bold().blue());
    for result in results {
        let title = result.display_title().unwrap_or("<untitled>");
        println!("{}{}", "• ".green(), title);
    }
}

fn print_endpoints(endpoints: &[Endpoint], header: &str) {
    println!("{}", header.bold().blue());
    for endpoint in endpoints {
        let path = endpoint.path.as_deref().unwrap_or("<no path>");
        println!("{}{}", "• ".green(), path);
    }
}

fn print_json(
    playable: &[ResultRights],
    playable_active: &[ResultRights],
    endpoints: &[Endpoint],
) -> Result<()> {
    let document = serde_json::json!({
        "devicePlayable": playable,
        "devicePlayableActive": playable_active,
        "manifestEndpoints": endpoints,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
