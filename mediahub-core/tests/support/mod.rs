#![allow(dead_code)]

use chrono::{DateTime, Utc};
use mediahub_core::providers::{MemoryLibrary, SqliteLibrary};
use mediahub_core::{
    CatalogService, ExecutionPolicy, ProviderHandle, ProviderRegistry,
};
use mediahub_model::prelude::*;
use std::sync::Arc;

pub fn day(n: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(1_600_000_000 + n * 86_400, 0)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn movie(
    id: &str,
    title: &str,
    year: Option<i32>,
    rating: Option<f32>,
    genres: &[&str],
    categories: &[&str],
    added: i64,
) -> MovieDetailed {
    MovieDetailed {
        basic: MovieBasic {
            id: id.into(),
            title: title.into(),
            path: vec![format!("/media/movies/{id}.mkv")],
            date_added: day(added),
            year,
            genres: strings(genres),
            rating,
            categories: strings(categories),
            runtime: Some(100),
        },
        summary: Some(format!("{title} summary")),
        ..Default::default()
    }
}

fn track(
    id: &str,
    title: &str,
    album: &str,
    artist: &str,
    number: Option<u32>,
    composers: &[&str],
    genres: &[&str],
) -> MusicTrackDetailed {
    MusicTrackDetailed {
        basic: MusicTrackBasic {
            id: id.into(),
            title: title.into(),
            album_id: Some(album.into()),
            artist_id: Some(artist.into()),
            track_number: number,
            composers: strings(composers),
            genres: strings(genres),
            year: Some(1959),
            ..Default::default()
        },
        album: Some(album.into()),
        ..Default::default()
    }
}

fn season(
    id: &str,
    show: &str,
    number: u32,
    year: i32,
    summary: Option<&str>,
) -> TvSeasonDetailed {
    TvSeasonDetailed {
        basic: TvSeasonBasic {
            id: id.into(),
            show_id: show.into(),
            title: format!("Season {number}"),
            season_number: Some(number),
            year: Some(year),
            ..Default::default()
        },
        summary: summary.map(str::to_owned),
        ..Default::default()
    }
}

fn episode(
    id: &str,
    show: &str,
    season: u32,
    number: Option<u32>,
    aired: Option<i64>,
) -> TvEpisodeDetailed {
    TvEpisodeDetailed {
        basic: TvEpisodeBasic {
            id: id.into(),
            show_id: show.into(),
            season_id: format!("{show}-s{season}"),
            title: format!("{show} {season}x{}", number.unwrap_or(0)),
            season_number: Some(season),
            episode_number: number,
            first_aired: aired.and_then(day),
            date_added: day(1),
            rating: Some(7.5),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small catalogue with ties, missing values and unsorted storage order.
pub fn dataset() -> CatalogDataset {
    CatalogDataset {
        movies: vec![
            movie(
                "m1",
                "Heat",
                Some(1995),
                Some(8.3),
                &["Action", "Drama"],
                &["Favourites"],
                5,
            ),
            movie(
                "m2",
                "Alien",
                Some(1979),
                Some(8.5),
                &["Horror", "Sci-Fi"],
                &[],
                3,
            ),
            movie(
                "m3",
                "Zodiac",
                Some(2007),
                None,
                &["Drama"],
                &["Watch later"],
                8,
            ),
            movie(
                "m4",
                "Brazil",
                Some(1985),
                Some(7.9),
                &["Comedy"],
                &["Favourites"],
                1,
            ),
            movie("m5", "Ran", None, Some(8.2), &["Drama", "Action"], &[], 7),
            movie("m6", "Ghost Dog", Some(1999), Some(f32::NAN), &[], &[], 2),
            movie(
                "m7",
                "Collateral",
                Some(2004),
                Some(7.5),
                &["Action"],
                &["Favourites"],
                6,
            ),
            movie(
                "m8",
                "Drive",
                Some(2011),
                Some(7.8),
                &["Action", "Drama"],
                &[],
                4,
            ),
        ],
        tracks: vec![
            track(
                "t1",
                "So What",
                "kob",
                "miles",
                Some(1),
                &["Miles Davis"],
                &["Jazz"],
            ),
            track(
                "t2",
                "Blue in Green",
                "kob",
                "miles",
                Some(3),
                &["Bill Evans", "Miles Davis"],
                &["Jazz"],
            ),
            track(
                "t3",
                "Freddie Freeloader",
                "kob",
                "miles",
                Some(2),
                &["Miles Davis"],
                &["Jazz", "Blues"],
            ),
            track(
                "t4",
                "Take Five",
                "timeout",
                "brubeck",
                Some(3),
                &["Paul Desmond"],
                &["Jazz"],
            ),
            track(
                "t5",
                "Blue Rondo",
                "timeout",
                "brubeck",
                Some(1),
                &[],
                &["Jazz"],
            ),
            track(
                "t6",
                "Interlude",
                "timeout",
                "brubeck",
                None,
                &["Dave Brubeck"],
                &[],
            ),
        ],
        albums: vec![
            MusicAlbumBasic {
                id: "timeout".into(),
                title: "Time Out".into(),
                artist_id: Some("brubeck".into()),
                year: Some(1959),
                genres: strings(&["Jazz"]),
                ..Default::default()
            },
            MusicAlbumBasic {
                id: "kob".into(),
                title: "Kind of Blue".into(),
                artist_id: Some("miles".into()),
                year: Some(1959),
                genres: strings(&["Jazz", "Modal"]),
                ..Default::default()
            },
        ],
        artists: vec![
            MusicArtistBasic {
                id: "miles".into(),
                title: "Miles Davis".into(),
            },
            MusicArtistBasic {
                id: "brubeck".into(),
                title: "Dave Brubeck Quartet".into(),
            },
        ],
        pictures: vec![
            PictureDetailed {
                basic: PictureBasic {
                    id: "p1".into(),
                    title: "Harbour".into(),
                    date_taken: day(30),
                    date_added: day(31),
                    categories: strings(&["Holidays"]),
                    ..Default::default()
                },
                width: Some(4000),
                height: Some(3000),
                ..Default::default()
            },
            PictureDetailed {
                basic: PictureBasic {
                    id: "p2".into(),
                    title: "Birthday".into(),
                    date_taken: None,
                    date_added: day(10),
                    categories: strings(&["Family", "Holidays"]),
                    ..Default::default()
                },
                ..Default::default()
            },
            PictureDetailed {
                basic: PictureBasic {
                    id: "p3".into(),
                    title: "Alps".into(),
                    date_taken: day(12),
                    date_added: day(12),
                    ..Default::default()
                },
                ..Default::default()
            },
        ],
        shows: vec![
            TvShowDetailed {
                basic: TvShowBasic {
                    id: "wire".into(),
                    title: "The Wire".into(),
                    year: Some(2002),
                    genres: strings(&["Crime", "Drama"]),
                    rating: Some(9.3),
                    categories: strings(&["Favourites"]),
                    ..Default::default()
                },
                ..Default::default()
            },
            TvShowDetailed {
                basic: TvShowBasic {
                    id: "bb".into(),
                    title: "Breaking Bad".into(),
                    year: Some(2008),
                    genres: strings(&["Crime"]),
                    rating: Some(9.5),
                    ..Default::default()
                },
                ..Default::default()
            },
        ],
        seasons: vec![
            season("wire-s2", "wire", 2, 2003, Some("The docks.")),
            season("wire-s1", "wire", 1, 2002, None),
            season("bb-s1", "bb", 1, 2008, None),
        ],
        episodes: vec![
            episode("w2e1", "wire", 2, Some(1), Some(40)),
            episode("w1e3", "wire", 1, Some(3), Some(22)),
            episode("w1e1", "wire", 1, Some(1), Some(20)),
            episode("w2e2", "wire", 2, Some(2), None),
            episode("w1e2", "wire", 1, Some(2), Some(21)),
            episode("bb1e2", "bb", 1, Some(2), Some(60)),
            episode("bb1e1", "bb", 1, Some(1), Some(59)),
            episode("w1x", "wire", 1, None, None),
        ],
    }
}

pub async fn sqlite_library() -> Arc<SqliteLibrary> {
    let library = SqliteLibrary::in_memory("sqlite-test")
        .await
        .expect("in-memory sqlite");
    library.import(&dataset()).await.expect("import fixtures");
    Arc::new(library)
}

pub fn memory_library() -> Arc<MemoryLibrary> {
    Arc::new(MemoryLibrary::new(dataset()))
}

fn metadata(name: &str, backend: &str) -> ProviderMetadata {
    ProviderMetadata::new(name, backend, "1.0.0")
}

/// Registry serving every domain from one SQLite library.
pub fn sqlite_registry(library: Arc<SqliteLibrary>) -> ProviderRegistry {
    ProviderRegistry::builder()
        .register(
            metadata("sqlite-movies", "sqlite"),
            ProviderHandle::Movie(library.clone()),
        )
        .register(
            metadata("sqlite-music", "sqlite"),
            ProviderHandle::Music(library.clone()),
        )
        .register(
            metadata("sqlite-pictures", "sqlite"),
            ProviderHandle::Picture(library.clone()),
        )
        .register(
            metadata("sqlite-tv", "sqlite"),
            ProviderHandle::TvShow(library),
        )
        .build()
}

pub fn memory_registry(library: Arc<MemoryLibrary>) -> ProviderRegistry {
    ProviderRegistry::builder()
        .register(
            metadata("memory-movies", "memory"),
            ProviderHandle::Movie(library.clone()),
        )
        .register(
            metadata("memory-music", "memory"),
            ProviderHandle::Music(library.clone()),
        )
        .register(
            metadata("memory-pictures", "memory"),
            ProviderHandle::Picture(library.clone()),
        )
        .register(
            metadata("memory-tv", "memory"),
            ProviderHandle::TvShow(library),
        )
        .build()
}

/// Same SQLite data behind a push-down service and a forced in-memory one.
pub async fn paired_services() -> (CatalogService, CatalogService) {
    let library = sqlite_library().await;
    let native = CatalogService::new(sqlite_registry(library.clone()))
        .with_policy(ExecutionPolicy::PreferNative);
    let memory = CatalogService::new(sqlite_registry(library))
        .with_policy(ExecutionPolicy::InMemoryOnly);
    (native, memory)
}
