//! Museum collection demo
//!
//! Seeds the collection and logs the outcome of the fit and availability checks.

use std::sync::Arc;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use museum_collection::{
    config::AppConfig, dates, repository::CollectionSeed, services::ArtworkQuery, Repository,
    Services,
};

/// Collection used when no seed file is configured
const DEMO_COLLECTION: &str = include_str!("../data/collection.json");

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config);

    tracing::info!("Starting museum collection v{}", env!("CARGO_PKG_VERSION"));

    let seed = match &config.collection.seed_path {
        Some(path) => CollectionSeed::from_path(path)?,
        None => CollectionSeed::from_json_str(DEMO_COLLECTION)?,
    };
    let repository = Arc::new(Repository::from_seed(seed).context("Failed to seed the collection")?);
    let services = Services::new(repository.clone());
    let catalog = &services.catalog;

    // Display case in the town hall
    let (width, height, depth) = (80, 200, 10);
    for artwork in repository.artworks.list() {
        match catalog.does_artwork_fit(artwork.id, width, height, Some(depth)) {
            Ok(fits) => tracing::info!(artwork = %artwork.title, fits, "Fit in {}x{}x{} cm", width, height, depth),
            Err(e) => tracing::warn!(artwork = %artwork.title, code = e.code() as u32, "Fit unknown: {}", e),
        }
    }

    let today = dates::today();
    for artwork in repository.artworks.list() {
        let creators: Vec<String> = repository
            .artists
            .creators_of(artwork)
            .map(|artist| artist.full_name())
            .collect();
        let at_home = catalog.is_artwork_available_at_location(artwork.id, "home")?;
        let at_town_hall = catalog.is_artwork_available_at_location(artwork.id, "Stadhuis")?;
        let available_today = catalog.is_artwork_available_on_date(artwork.id, today)?;
        tracing::info!(
            artwork = %artwork.title,
            creators = %creators.join(", "),
            at_home,
            at_town_hall,
            available_today,
            "Availability"
        );
    }

    let query = ArtworkQuery {
        location: Some("home".to_string()),
        available_on: Some(today),
        ..Default::default()
    };
    let titles: Vec<&str> = catalog
        .search(&query)
        .into_iter()
        .map(|artwork| artwork.title.as_str())
        .collect();
    tracing::info!("Available at home today: {}", titles.join(", "));

    Ok(())
}

/// Install the global subscriber; the returned guard flushes the log file on drop
fn init_tracing(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("museum_collection={}", config.logging.level).into());

    let (file_layer, guard) = match &config.logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "museum-collection.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let json = config.is_json_logging();
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer().pretty()))
        .with(file_layer)
        .init();

    guard
}
