use super::*;
use mediahub_contracts::ErrorKind;
use mediahub_model::prelude::*;

fn movie(id: &str, title: &str, rating: Option<f32>) -> MovieBasic {
    MovieBasic {
        id: id.into(),
        title: title.into(),
        rating,
        ..Default::default()
    }
}

fn episode(id: &str, season: u32, number: u32) -> TvEpisodeBasic {
    TvEpisodeBasic {
        id: id.into(),
        show_id: "show".into(),
        season_id: format!("season-{season}"),
        title: format!("S{season:02}E{number:02}"),
        season_number: Some(season),
        episode_number: Some(number),
        ..Default::default()
    }
}

fn ids<T: mediahub_contracts::CatalogItem>(items: &[T]) -> Vec<&str> {
    items.iter().map(|item| item.id()).collect()
}

#[test]
fn ties_keep_original_order_in_both_directions() {
    let movies = vec![
        movie("a", "Same", Some(5.0)),
        movie("b", "Other", Some(7.0)),
        movie("c", "Same", Some(5.0)),
        movie("d", "Same", Some(5.0)),
    ];

    let asc = sort_items(movies.clone(), &[OrderKey::ascending(SortBy::Rating)])
        .unwrap();
    assert_eq!(ids(&asc), vec!["a", "c", "d", "b"]);

    let desc =
        sort_items(movies.clone(), &[OrderKey::descending(SortBy::Rating)])
            .unwrap();
    assert_eq!(ids(&desc), vec!["b", "a", "c", "d"]);

    let again = sort_items(asc.clone(), &[OrderKey::ascending(SortBy::Rating)])
        .unwrap();
    assert_eq!(ids(&again), ids(&asc));
}

#[test]
fn unrated_movies_trail_rated_ones() {
    let movies = vec![
        movie("none", "A", None),
        movie("nan", "B", Some(f32::NAN)),
        movie("low", "C", Some(1.0)),
        movie("high", "D", Some(9.0)),
    ];
    let desc = sort_items(movies, &[OrderKey::descending(SortBy::Rating)])
        .unwrap();
    assert_eq!(ids(&desc), vec!["high", "low", "none", "nan"]);
}

#[test]
fn season_then_episode_orders_by_tuple() {
    let episodes = vec![
        episode("s2e1", 2, 1),
        episode("s1e2", 1, 2),
        episode("s2e3", 2, 3),
        episode("s1e1", 1, 1),
    ];

    let asc = sort_items(
        episodes.clone(),
        &[OrderKey::ascending(SortBy::SeasonThenEpisode)],
    )
    .unwrap();
    assert_eq!(ids(&asc), vec!["s1e1", "s1e2", "s2e1", "s2e3"]);

    let desc = sort_items(
        episodes,
        &[OrderKey::descending(SortBy::SeasonThenEpisode)],
    )
    .unwrap();
    assert_eq!(ids(&desc), vec!["s2e3", "s2e1", "s1e2", "s1e1"]);
}

#[test]
fn episode_number_sort_groups_by_season_id_first() {
    let episodes = vec![
        episode("b2", 2, 2),
        episode("a1", 1, 1),
        episode("b1", 2, 1),
    ];
    let sorted =
        sort_items(episodes, &[OrderKey::ascending(SortBy::TvEpisodeNumber)])
            .unwrap();
    assert_eq!(ids(&sorted), vec!["a1", "b1", "b2"]);
}

#[test]
fn pictures_reject_track_number_sort() {
    let pictures = vec![PictureBasic {
        id: "p1".into(),
        title: "Beach".into(),
        ..Default::default()
    }];
    let err =
        sort_items(pictures, &[OrderKey::ascending(SortBy::MusicTrackNumber)])
            .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSort);
}

#[test]
fn mixed_media_items_fail_on_the_first_incapable_variant() {
    let items = vec![
        MediaItem::TvEpisode(TvEpisodeDetailed {
            basic: episode("e1", 1, 1),
            ..Default::default()
        }),
        MediaItem::MusicArtist(MusicArtistBasic {
            id: "ar".into(),
            title: "Can".into(),
        }),
    ];
    let err = sort_items(items, &[OrderKey::ascending(SortBy::TvSeasonNumber)])
        .unwrap_err();
    assert!(matches!(
        err,
        mediahub_contracts::CatalogError::UnsupportedSort {
            sort_by: SortBy::TvSeasonNumber,
            ..
        }
    ));
}

#[test]
fn genre_sort_uses_first_listed_genre() {
    let mut western = movie("w", "Unforgiven", None);
    western.genres = vec!["Western".into(), "Drama".into()];
    let mut action = movie("a", "Heat", None);
    action.genres = vec!["Action".into()];
    let untagged = movie("u", "Untitled", None);

    let sorted = sort_items(
        vec![untagged, western, action],
        &[OrderKey::ascending(SortBy::Genre)],
    )
    .unwrap();
    assert_eq!(ids(&sorted), vec!["a", "w", "u"]);
}

#[test]
fn can_apply_follows_the_item_capabilities() {
    let by_episode = OrderSort::new(&[
        OrderKey::ascending(SortBy::Title),
        OrderKey::descending(SortBy::SeasonThenEpisode),
    ]);
    let artist = MediaItem::MusicArtist(MusicArtistBasic {
        id: "ar".into(),
        title: "Can".into(),
    });
    let item = MediaItem::TvEpisode(TvEpisodeDetailed {
        basic: episode("e1", 1, 1),
        ..Default::default()
    });

    assert!(SortStrategy::<MediaItem>::can_apply(&by_episode, &item));
    assert!(!SortStrategy::<MediaItem>::can_apply(&by_episode, &artist));
    assert!(SortStrategy::<TvEpisodeBasic>::can_apply(
        &by_episode,
        &episode("e2", 1, 2)
    ));

    let err = by_episode.sort(vec![item, artist]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSort);
}
