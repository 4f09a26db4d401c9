//! Binds CLI commands to the facade and renders results as JSON.

use anyhow::Context;
use mediahub_core::service::*;
use mediahub_core::{CatalogService, Collection, ExecutionPolicy};
use mediahub_model::{
    ItemKind, QueryDescriptor, QueryDescriptorBuilder, Range,
};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::bootstrap;
use crate::cli::{Cli, Command, CountArgs, FilterArgs, ListArgs};
use crate::config::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};

/// Pick the collection marker for `(kind, detailed)` and evaluate `$body`
/// with it bound to `$collection`. Kinds without a detailed form ignore the
/// flag.
macro_rules! with_collection {
    ($kind:expr, $detailed:expr, $collection:ident => $body:expr) => {
        match ($kind, $detailed) {
            (ItemKind::Movie, false) => {
                type $collection = Movies;
                $body
            }
            (ItemKind::Movie, true) => {
                type $collection = MoviesDetailed;
                $body
            }
            (ItemKind::MusicTrack, false) => {
                type $collection = MusicTracks;
                $body
            }
            (ItemKind::MusicTrack, true) => {
                type $collection = MusicTracksDetailed;
                $body
            }
            (ItemKind::MusicAlbum, _) => {
                type $collection = MusicAlbums;
                $body
            }
            (ItemKind::MusicArtist, _) => {
                type $collection = MusicArtists;
                $body
            }
            (ItemKind::Picture, false) => {
                type $collection = Pictures;
                $body
            }
            (ItemKind::Picture, true) => {
                type $collection = PicturesDetailed;
                $body
            }
            (ItemKind::TvShow, false) => {
                type $collection = TvShows;
                $body
            }
            (ItemKind::TvShow, true) => {
                type $collection = TvShowsDetailed;
                $body
            }
            (ItemKind::TvSeason, false) => {
                type $collection = TvSeasons;
                $body
            }
            (ItemKind::TvSeason, true) => {
                type $collection = TvSeasonsDetailed;
                $body
            }
            (ItemKind::TvEpisode, false) => {
                type $collection = TvEpisodes;
                $body
            }
            (ItemKind::TvEpisode, true) => {
                type $collection = TvEpisodesDetailed;
                $body
            }
        }
    };
}

/// Load configuration, bootstrap providers and run `cli.command`.
pub async fn run(cli: Cli) -> anyhow::Result<Value> {
    let options = ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    };
    let ConfigLoad {
        mut settings,
        metadata,
        warnings,
    } = ConfigLoader::with_options(options)
        .load()
        .context("failed to load configuration")?;

    if metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &metadata.config_path {
        info!(path = %path.display(), "configuration loaded");
    }
    for warning in &warnings {
        warn!(message = %warning, "configuration warning");
    }
    if cli.in_memory {
        settings.policy = ExecutionPolicy::InMemoryOnly;
    }

    if let Command::Import { provider, file } = &cli.command {
        let library = bootstrap::open_sqlite_provider(&settings, provider)
            .await
            .context("failed to open import target")?;
        let dataset = bootstrap::read_dataset(file)?;
        let imported = library
            .import(&dataset)
            .await
            .context("dataset import failed")?;
        return Ok(json!({ "provider": provider, "imported": imported }));
    }

    let service = bootstrap::build_service(&settings)
        .await
        .context("failed to bootstrap providers")?;
    execute(&service, cli.command).await
}

/// Run a query command against an already bootstrapped facade.
pub async fn execute(
    service: &CatalogService,
    command: Command,
) -> anyhow::Result<Value> {
    match command {
        Command::Describe => Ok(serde_json::to_value(
            service.service_description(),
        )?),
        Command::Count(args) => count(service, args).await,
        Command::List(args) => list(service, args).await,
        Command::Get { kind, id } => {
            let item = service.get_item(kind, &id).await?;
            Ok(serde_json::to_value(item)?)
        }
        Command::Genres { domain } => {
            Ok(serde_json::to_value(service.genres(domain).await?)?)
        }
        Command::Categories { domain } => {
            Ok(serde_json::to_value(service.categories(domain).await?)?)
        }
        Command::Import { .. } => {
            anyhow::bail!("import runs against a provider, not the facade")
        }
    }
}

fn filter_descriptor(filters: &FilterArgs) -> QueryDescriptorBuilder {
    let mut builder = QueryDescriptor::builder();
    if let Some(genre) = &filters.genre {
        builder = builder.genre(genre.clone());
    }
    if let Some(category) = &filters.category {
        builder = builder.category(category.clone());
    }
    for (relation, id) in filters.relations() {
        builder = builder.related_to(relation, id);
    }
    builder
}

async fn count(
    service: &CatalogService,
    args: CountArgs,
) -> anyhow::Result<Value> {
    let descriptor = filter_descriptor(&args.filters).build();
    let total = with_collection!(
        args.collection.kind,
        args.collection.detailed,
        C => service.count_matching::<C>(&descriptor).await?
    );
    Ok(json!({ "kind": args.collection.kind, "count": total }))
}

async fn list(
    service: &CatalogService,
    args: ListArgs,
) -> anyhow::Result<Value> {
    let range = match (args.start, args.end) {
        (Some(start), Some(end)) => Some(Range::from_bounds(start, end)?),
        _ => None,
    };
    let descriptor = filter_descriptor(&args.filters)
        .sort_by(args.sort, args.order)
        .maybe_range(range)
        .build();
    with_collection!(
        args.collection.kind,
        args.collection.detailed,
        C => render::<C>(service, &descriptor).await
    )
}

async fn render<C: Collection>(
    service: &CatalogService,
    descriptor: &QueryDescriptor,
) -> anyhow::Result<Value> {
    let items = service
        .query::<C>(descriptor)
        .await
        .with_context(|| format!("listing {} failed", C::NAME))?;
    Ok(serde_json::to_value(items)?)
}
