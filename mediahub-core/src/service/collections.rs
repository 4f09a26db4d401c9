//! Collection markers binding an item type to its domain and to the accessor
//! on that domain's provider.

use mediahub_contracts::{CatalogItem, ItemSource, Result};
use mediahub_model::prelude::*;

use crate::registry::ActiveProviders;

pub trait Collection: Send + Sync + 'static {
    type Item: CatalogItem;

    const DOMAIN: Domain;

    /// Name used in logs and on the command line.
    const NAME: &'static str;

    fn source(providers: &ActiveProviders)
    -> Result<&dyn ItemSource<Self::Item>>;
}

macro_rules! collection {
    ($(
        $(#[$meta:meta])*
        $marker:ident => $item:ty, $name:literal, $library:ident.$accessor:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $marker;

            impl Collection for $marker {
                type Item = $item;

                const DOMAIN: Domain = <$item as CatalogItem>::KIND.domain();

                const NAME: &'static str = $name;

                fn source(
                    providers: &ActiveProviders,
                ) -> Result<&dyn ItemSource<$item>> {
                    Ok(providers.$library()?.$accessor())
                }
            }
        )*
    };
}

collection! {
    Movies => MovieBasic, "movies", movie.movies;
    MoviesDetailed => MovieDetailed, "movies_detailed", movie.movies_detailed;
    MusicTracks => MusicTrackBasic, "music_tracks", music.tracks;
    MusicTracksDetailed => MusicTrackDetailed, "music_tracks_detailed",
        music.tracks_detailed;
    MusicAlbums => MusicAlbumBasic, "music_albums", music.albums;
    MusicArtists => MusicArtistBasic, "music_artists", music.artists;
    Pictures => PictureBasic, "pictures", picture.pictures;
    PicturesDetailed => PictureDetailed, "pictures_detailed",
        picture.pictures_detailed;
    TvShows => TvShowBasic, "tv_shows", tvshow.shows;
    TvShowsDetailed => TvShowDetailed, "tv_shows_detailed",
        tvshow.shows_detailed;
    TvSeasons => TvSeasonBasic, "tv_seasons", tvshow.seasons;
    TvSeasonsDetailed => TvSeasonDetailed, "tv_seasons_detailed",
        tvshow.seasons_detailed;
    TvEpisodes => TvEpisodeBasic, "tv_episodes", tvshow.episodes;
    TvEpisodesDetailed => TvEpisodeDetailed, "tv_episodes_detailed",
        tvshow.episodes_detailed;
}
