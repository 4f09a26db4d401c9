//! Dataset-backed provider without a native query surface.
//!
//! Every query against it goes through the executor's in-memory path.

use async_trait::async_trait;
use mediahub_contracts::{
    ItemSource, MovieLibrary, MusicLibrary, PictureLibrary, Result,
    TvShowLibrary,
};
use mediahub_model::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MemoryLibrary {
    dataset: Arc<CatalogDataset>,
}

impl MemoryLibrary {
    pub fn new(dataset: CatalogDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &CatalogDataset {
        &self.dataset
    }
}

macro_rules! memory_source {
    ($item:ty, $field:ident) => {
        #[async_trait]
        impl ItemSource<$item> for MemoryLibrary {
            async fn all(&self) -> Result<Vec<$item>> {
                Ok(self.dataset.$field.clone())
            }
        }
    };
    ($item:ty, $field:ident, basic) => {
        #[async_trait]
        impl ItemSource<$item> for MemoryLibrary {
            async fn all(&self) -> Result<Vec<$item>> {
                Ok(self.dataset.$field.iter().map(<$item>::from).collect())
            }
        }
    };
}

memory_source!(MovieDetailed, movies);
memory_source!(MovieBasic, movies, basic);
memory_source!(MusicTrackDetailed, tracks);
memory_source!(MusicTrackBasic, tracks, basic);
memory_source!(MusicAlbumBasic, albums);
memory_source!(MusicArtistBasic, artists);
memory_source!(PictureDetailed, pictures);
memory_source!(PictureBasic, pictures, basic);
memory_source!(TvShowDetailed, shows);
memory_source!(TvShowBasic, shows, basic);
memory_source!(TvSeasonDetailed, seasons);
memory_source!(TvSeasonBasic, seasons, basic);
memory_source!(TvEpisodeDetailed, episodes);
memory_source!(TvEpisodeBasic, episodes, basic);

impl MovieLibrary for MemoryLibrary {
    fn movies(&self) -> &dyn ItemSource<MovieBasic> {
        self
    }

    fn movies_detailed(&self) -> &dyn ItemSource<MovieDetailed> {
        self
    }
}

impl MusicLibrary for MemoryLibrary {
    fn tracks(&self) -> &dyn ItemSource<MusicTrackBasic> {
        self
    }

    fn tracks_detailed(&self) -> &dyn ItemSource<MusicTrackDetailed> {
        self
    }

    fn albums(&self) -> &dyn ItemSource<MusicAlbumBasic> {
        self
    }

    fn artists(&self) -> &dyn ItemSource<MusicArtistBasic> {
        self
    }
}

impl PictureLibrary for MemoryLibrary {
    fn pictures(&self) -> &dyn ItemSource<PictureBasic> {
        self
    }

    fn pictures_detailed(&self) -> &dyn ItemSource<PictureDetailed> {
        self
    }
}

impl TvShowLibrary for MemoryLibrary {
    fn shows(&self) -> &dyn ItemSource<TvShowBasic> {
        self
    }

    fn shows_detailed(&self) -> &dyn ItemSource<TvShowDetailed> {
        self
    }

    fn seasons(&self) -> &dyn ItemSource<TvSeasonBasic> {
        self
    }

    fn seasons_detailed(&self) -> &dyn ItemSource<TvSeasonDetailed> {
        self
    }

    fn episodes(&self) -> &dyn ItemSource<TvEpisodeBasic> {
        self
    }

    fn episodes_detailed(&self) -> &dyn ItemSource<TvEpisodeDetailed> {
        self
    }
}
