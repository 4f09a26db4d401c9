use serde::{Deserialize, Serialize};

use crate::items::{
    MovieDetailed, MusicAlbumBasic, MusicArtistBasic, MusicTrackDetailed,
    PictureDetailed, TvEpisodeDetailed, TvSeasonDetailed, TvShowDetailed,
};

/// Serializable snapshot of a whole catalogue.
///
/// Used to seed reference providers and to ship fixture files. Each list keeps
/// the provider's natural order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDataset {
    pub movies: Vec<MovieDetailed>,
    pub tracks: Vec<MusicTrackDetailed>,
    pub albums: Vec<MusicAlbumBasic>,
    pub artists: Vec<MusicArtistBasic>,
    pub pictures: Vec<PictureDetailed>,
    pub shows: Vec<TvShowDetailed>,
    pub seasons: Vec<TvSeasonDetailed>,
    pub episodes: Vec<TvEpisodeDetailed>,
}

impl CatalogDataset {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
            && self.tracks.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.pictures.is_empty()
            && self.shows.is_empty()
            && self.seasons.is_empty()
            && self.episodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
            + self.tracks.len()
            + self.albums.len()
            + self.artists.len()
            + self.pictures.len()
            + self.shows.len()
            + self.seasons.len()
            + self.episodes.len()
    }
}
