use clap::{Args, Parser, Subcommand};
use mediahub_model::{Domain, ItemKind, Relation, SortBy, SortOrder};
use std::path::PathBuf;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "mediahubctl", version)]
#[command(about = "Query the aggregated mediahub catalogue")]
pub struct Cli {
    /// Path to mediahub.toml (overrides MEDIAHUB_CONFIG)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Path to a .env file loaded before the configuration
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Evaluate every query in memory, ignoring provider push-down
    #[arg(long, global = true, default_value_t = false)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print registered providers, API versions and the service version
    Describe,
    /// Count the items of a collection
    Count(CountArgs),
    /// List the items of a collection
    List(ListArgs),
    /// Fetch one item in its richest form
    Get {
        kind: ItemKind,
        id: String,
    },
    /// Distinct genres of a domain
    Genres { domain: Domain },
    /// Distinct user categories of a domain
    Categories { domain: Domain },
    /// Load a JSON dataset into a configured SQLite provider
    Import {
        /// Provider name from mediahub.toml
        #[arg(long)]
        provider: String,
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CollectionArgs {
    /// Item kind (movie, track, album, artist, picture, show, season, episode)
    #[arg(long, short = 'k')]
    pub kind: ItemKind,

    /// Use the detailed form where the kind has one
    #[arg(long, default_value_t = false)]
    pub detailed: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub parent_album: Option<String>,

    #[arg(long)]
    pub parent_artist: Option<String>,

    #[arg(long)]
    pub parent_show: Option<String>,

    #[arg(long)]
    pub parent_season: Option<String>,
}

impl FilterArgs {
    pub fn relations(&self) -> Vec<(Relation, &str)> {
        [
            (Relation::Album, &self.parent_album),
            (Relation::Artist, &self.parent_artist),
            (Relation::Show, &self.parent_show),
            (Relation::Season, &self.parent_season),
        ]
        .into_iter()
        .filter_map(|(relation, id)| id.as_deref().map(|id| (relation, id)))
        .collect()
    }
}

#[derive(Debug, Clone, Args)]
pub struct CountArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(long, short = 's', default_value = "title")]
    pub sort: SortBy,

    #[arg(long, short = 'o', default_value = "asc")]
    pub order: SortOrder,

    /// First position of the page (inclusive)
    #[arg(long, requires = "end")]
    pub start: Option<i64>,

    /// End of the page (exclusive)
    #[arg(long, requires = "start")]
    pub end: Option<i64>,
}
