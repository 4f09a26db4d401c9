mod support;

use mediahub_core::providers::MemoryLibrary;
use mediahub_core::service::*;
use mediahub_core::{
    CatalogService, ErrorKind, ProviderHandle, ProviderRegistry,
};
use mediahub_model::prelude::*;
use mediahub_model::service::API_VERSION;
use std::sync::Arc;

fn titles(movies: &[MovieBasic]) -> Vec<&str> {
    movies.iter().map(|movie| movie.title.as_str()).collect()
}

fn episode_ids(episodes: &[TvEpisodeBasic]) -> Vec<&str> {
    episodes.iter().map(|episode| episode.id.as_str()).collect()
}

async fn services() -> Vec<CatalogService> {
    vec![
        CatalogService::new(support::memory_registry(
            support::memory_library(),
        )),
        CatalogService::new(support::sqlite_registry(
            support::sqlite_library().await,
        )),
    ]
}

#[tokio::test]
async fn ranges_slice_the_ordered_listing() {
    for service in services().await {
        let page = service
            .list_by_range::<Movies>(SortBy::Title, SortOrder::Ascending, 2, 5)
            .await
            .unwrap();
        assert_eq!(titles(&page), ["Collateral", "Drive", "Ghost Dog"]);

        let empty = service
            .list_by_range::<Movies>(SortBy::Title, SortOrder::Ascending, 0, 0)
            .await
            .unwrap();
        assert!(empty.is_empty());

        let past_end = service
            .list_by_range::<Movies>(
                SortBy::Title,
                SortOrder::Ascending,
                8,
                12,
            )
            .await
            .unwrap();
        assert!(past_end.is_empty());

        let truncated = service
            .list_by_range::<Movies>(
                SortBy::Title,
                SortOrder::Descending,
                6,
                100,
            )
            .await
            .unwrap();
        assert_eq!(titles(&truncated), ["Brazil", "Alien"]);
    }
}

#[tokio::test]
async fn malformed_ranges_are_rejected() {
    let service = &services().await[0];
    for (start, end) in [(5, 2), (-1, 3), (0, -4)] {
        let err = service
            .list_by_range::<Movies>(
                SortBy::Title,
                SortOrder::Ascending,
                start,
                end,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange, "{start}..{end}");
    }
}

#[tokio::test]
async fn unsupported_sort_is_rejected_before_evaluation() {
    for service in services().await {
        let err = service
            .list::<Pictures>(SortBy::MusicTrackNumber, SortOrder::Ascending)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSort);

        let err = service
            .list::<TvShows>(SortBy::TvEpisodeNumber, SortOrder::Descending)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSort);
    }
}

#[tokio::test]
async fn missing_ratings_sort_last_in_both_directions() {
    for service in services().await {
        let descending = service
            .list::<Movies>(SortBy::Rating, SortOrder::Descending)
            .await
            .unwrap();
        assert_eq!(
            titles(&descending),
            [
                "Alien",
                "Heat",
                "Ran",
                "Brazil",
                "Drive",
                "Collateral",
                "Zodiac",
                "Ghost Dog"
            ]
        );

        let ascending = service
            .list::<Movies>(SortBy::Rating, SortOrder::Ascending)
            .await
            .unwrap();
        assert_eq!(&titles(&ascending)[6..], ["Zodiac", "Ghost Dog"]);
        assert_eq!(titles(&ascending)[0], "Collateral");
    }
}

#[tokio::test]
async fn season_then_episode_keeps_ties_in_storage_order() {
    for service in services().await {
        let ascending = service
            .list::<TvEpisodes>(
                SortBy::SeasonThenEpisode,
                SortOrder::Ascending,
            )
            .await
            .unwrap();
        assert_eq!(
            episode_ids(&ascending),
            [
                "w1e1", "bb1e1", "w1e2", "bb1e2", "w1e3", "w1x", "w2e1",
                "w2e2"
            ]
        );

        let descending = service
            .list::<TvEpisodes>(
                SortBy::SeasonThenEpisode,
                SortOrder::Descending,
            )
            .await
            .unwrap();
        assert_eq!(
            episode_ids(&descending),
            [
                "w2e2", "w2e1", "w1e3", "w1e2", "bb1e2", "w1e1", "bb1e1",
                "w1x"
            ]
        );
    }
}

#[tokio::test]
async fn episodes_of_a_season_by_episode_number() {
    for service in services().await {
        let episodes = service
            .list_related::<TvEpisodes>(
                Relation::Season,
                "wire-s1",
                SortBy::TvEpisodeNumber,
                SortOrder::Ascending,
                None,
            )
            .await
            .unwrap();
        assert_eq!(episode_ids(&episodes), ["w1e1", "w1e2", "w1e3", "w1x"]);

        let count = service
            .count_related::<TvEpisodes>(Relation::Show, "bb")
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}

#[tokio::test]
async fn genre_filter_is_exact_membership() {
    for service in services().await {
        let drama = service
            .list_by_genre::<Movies>(
                "Drama",
                SortBy::Title,
                SortOrder::Ascending,
            )
            .await
            .unwrap();
        assert_eq!(titles(&drama), ["Drive", "Heat", "Ran", "Zodiac"]);
        assert!(drama.iter().all(|m| m.genres.iter().any(|g| g == "Drama")));

        let lowercase = service
            .list_by_genre::<Movies>(
                "drama",
                SortBy::Title,
                SortOrder::Ascending,
            )
            .await
            .unwrap();
        assert!(lowercase.is_empty());

        let favourites = service
            .list_by_category::<Movies>(
                "Favourites",
                SortBy::Year,
                SortOrder::Descending,
            )
            .await
            .unwrap();
        assert_eq!(titles(&favourites), ["Collateral", "Heat", "Brazil"]);
    }
}

#[tokio::test]
async fn repeated_queries_return_identical_results() {
    for service in services().await {
        let first = service
            .list::<MusicTracks>(SortBy::Genre, SortOrder::Descending)
            .await
            .unwrap();
        let second = service
            .list::<MusicTracks>(SortBy::Genre, SortOrder::Descending)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn get_by_id_reports_missing_and_ambiguous_ids() {
    for service in services().await {
        let movie = service.get_by_id::<MoviesDetailed>("m4").await.unwrap();
        assert_eq!(movie.basic.title, "Brazil");
        assert_eq!(movie.summary.as_deref(), Some("Brazil summary"));

        let err = service.get_by_id::<Movies>("nope").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    let mut dataset = support::dataset();
    let mut duplicate = dataset.movies[0].clone();
    duplicate.basic.title = "Heat (1986)".into();
    dataset.movies.push(duplicate);
    let service = CatalogService::new(support::memory_registry(Arc::new(
        MemoryLibrary::new(dataset),
    )));
    let err = service.get_by_id::<Movies>("m1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousId);
}

#[tokio::test]
async fn get_item_returns_the_richest_form() {
    for service in services().await {
        let item = service
            .get_item(ItemKind::TvEpisode, "w1e2")
            .await
            .unwrap();
        assert_eq!(item.kind(), ItemKind::TvEpisode);
        assert_eq!(item.id(), "w1e2");
        assert!(matches!(item, MediaItem::TvEpisode(_)));

        let album = service
            .get_item(ItemKind::MusicAlbum, "kob")
            .await
            .unwrap();
        assert_eq!(album.title(), "Kind of Blue");

        let season = service
            .get_item(ItemKind::TvSeason, "wire-s2")
            .await
            .unwrap();
        match season {
            MediaItem::TvSeason(season) => {
                assert_eq!(season.basic().season_number, Some(2));
                assert_eq!(season.summary.as_deref(), Some("The docks."));
            }
            other => panic!("expected a season, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn detailed_seasons_list_like_basic_ones() {
    for service in services().await {
        let basic = service
            .list_related::<TvSeasons>(
                Relation::Show,
                "wire",
                SortBy::TvSeasonNumber,
                SortOrder::Ascending,
                None,
            )
            .await
            .unwrap();
        let detailed = service
            .list_related::<TvSeasonsDetailed>(
                Relation::Show,
                "wire",
                SortBy::TvSeasonNumber,
                SortOrder::Ascending,
                None,
            )
            .await
            .unwrap();
        let ids: Vec<&str> = basic.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["wire-s1", "wire-s2"]);
        let projected: Vec<TvSeasonBasic> =
            detailed.iter().map(TvSeasonBasic::from).collect();
        assert_eq!(projected, basic);
        assert_eq!(detailed[1].summary.as_deref(), Some("The docks."));
    }
}

#[tokio::test]
async fn genres_and_categories_per_domain() {
    for service in services().await {
        let genres: Vec<String> = service
            .genres(Domain::Movie)
            .await
            .unwrap()
            .into_iter()
            .map(|genre| genre.name)
            .collect();
        assert_eq!(genres, ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"]);

        let music: Vec<String> = service
            .genres(Domain::Music)
            .await
            .unwrap()
            .into_iter()
            .map(|genre| genre.name)
            .collect();
        assert_eq!(music, ["Blues", "Jazz", "Modal"]);

        assert!(service.genres(Domain::Picture).await.unwrap().is_empty());
        assert!(service.categories(Domain::Music).await.unwrap().is_empty());

        let categories = service.categories(Domain::Picture).await.unwrap();
        assert_eq!(
            categories,
            [
                Category::from_title("Family"),
                Category::from_title("Holidays")
            ]
        );
    }
}

#[tokio::test]
async fn description_lists_candidates_and_active_providers() {
    let memory = support::memory_library();
    let registry = ProviderRegistry::builder()
        .register(
            ProviderMetadata::new("primary", "memory", "1.0.0"),
            ProviderHandle::Movie(memory.clone()),
        )
        .register(
            ProviderMetadata::new("fallback", "memory", "0.9.0"),
            ProviderHandle::Movie(memory.clone()),
        )
        .register(
            ProviderMetadata::new("tunes", "memory", "1.0.0"),
            ProviderHandle::Music(memory),
        )
        .build();
    let service =
        CatalogService::new(registry).with_service_version("2026.10");

    let description = service.service_description();
    assert_eq!(description.service_version, "2026.10");
    assert_eq!(
        description.available_providers[&Domain::Movie],
        ["primary", "fallback"]
    );
    assert!(description.available_providers[&Domain::Picture].is_empty());
    assert_eq!(description.active_providers[&Domain::Movie], "primary");
    assert_eq!(description.active_providers[&Domain::Music], "tunes");
    assert!(!description.active_providers.contains_key(&Domain::TvShow));
    assert!(
        description
            .api_versions
            .values()
            .all(|version| *version == API_VERSION)
    );
    assert_eq!(description.api_versions.len(), Domain::ALL.len());
}

#[tokio::test]
async fn domains_without_a_provider_fail_every_operation() {
    let registry = ProviderRegistry::builder()
        .register(
            ProviderMetadata::new("movies", "memory", "1.0.0"),
            ProviderHandle::Movie(support::memory_library()),
        )
        .build();
    let service = CatalogService::new(registry);

    assert_eq!(service.count::<Movies>().await.unwrap(), 8);

    let err = service.count::<Pictures>().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
    let err = service
        .list::<TvEpisodes>(SortBy::Title, SortOrder::Ascending)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
    let err = service.genres(Domain::Picture).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
    let err = service.categories(Domain::Music).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
    let err = service
        .get_item(ItemKind::MusicArtist, "miles")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoProviderAvailable);
}
