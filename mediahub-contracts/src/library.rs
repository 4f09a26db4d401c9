//! Per-domain provider plugin surfaces.
//!
//! A provider implements the trait of the domain it serves. Discovery lists
//! (genres, categories) have default implementations that scan the basic
//! collections; stores with an index of their own should override them.

use async_trait::async_trait;
use mediahub_model::prelude::*;
use std::collections::BTreeSet;

use crate::capabilities::MediaCapabilities;
use crate::error::Result;
use crate::source::ItemSource;

#[async_trait]
pub trait MovieLibrary: Send + Sync {
    fn movies(&self) -> &dyn ItemSource<MovieBasic>;

    fn movies_detailed(&self) -> &dyn ItemSource<MovieDetailed>;

    async fn genres(&self) -> Result<Vec<Genre>> {
        Ok(distinct_genres(&self.movies().all().await?))
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(distinct_categories(&self.movies().all().await?))
    }
}

#[async_trait]
pub trait MusicLibrary: Send + Sync {
    fn tracks(&self) -> &dyn ItemSource<MusicTrackBasic>;

    fn tracks_detailed(&self) -> &dyn ItemSource<MusicTrackDetailed>;

    fn albums(&self) -> &dyn ItemSource<MusicAlbumBasic>;

    fn artists(&self) -> &dyn ItemSource<MusicArtistBasic>;

    async fn genres(&self) -> Result<Vec<Genre>> {
        let tracks = self.tracks().all().await?;
        let albums = self.albums().all().await?;
        let names: BTreeSet<&str> = tracks
            .iter()
            .flat_map(|t| t.genres())
            .chain(albums.iter().flat_map(|a| a.genres()))
            .map(String::as_str)
            .collect();
        Ok(names.into_iter().map(Genre::new).collect())
    }
}

#[async_trait]
pub trait PictureLibrary: Send + Sync {
    fn pictures(&self) -> &dyn ItemSource<PictureBasic>;

    fn pictures_detailed(&self) -> &dyn ItemSource<PictureDetailed>;

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(distinct_categories(&self.pictures().all().await?))
    }
}

#[async_trait]
pub trait TvShowLibrary: Send + Sync {
    fn shows(&self) -> &dyn ItemSource<TvShowBasic>;

    fn shows_detailed(&self) -> &dyn ItemSource<TvShowDetailed>;

    fn seasons(&self) -> &dyn ItemSource<TvSeasonBasic>;

    fn seasons_detailed(&self) -> &dyn ItemSource<TvSeasonDetailed>;

    fn episodes(&self) -> &dyn ItemSource<TvEpisodeBasic>;

    fn episodes_detailed(&self) -> &dyn ItemSource<TvEpisodeDetailed>;

    async fn genres(&self) -> Result<Vec<Genre>> {
        Ok(distinct_genres(&self.shows().all().await?))
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(distinct_categories(&self.shows().all().await?))
    }
}

/// Distinct genre names in byte order.
pub fn distinct_genres<T: MediaCapabilities>(items: &[T]) -> Vec<Genre> {
    let names: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.genres())
        .map(String::as_str)
        .collect();
    names.into_iter().map(Genre::new).collect()
}

/// Distinct categories in byte order of their titles.
pub fn distinct_categories<T: MediaCapabilities>(items: &[T]) -> Vec<Category> {
    let titles: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.categories())
        .map(String::as_str)
        .collect();
    titles.into_iter().map(Category::from_title).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_are_distinct_and_sorted() {
        let movies = vec![
            MovieBasic {
                id: "1".into(),
                title: "Heat".into(),
                genres: vec!["Drama".into(), "Action".into()],
                ..Default::default()
            },
            MovieBasic {
                id: "2".into(),
                title: "Ronin".into(),
                genres: vec!["Action".into()],
                categories: vec!["Favourites".into()],
                ..Default::default()
            },
        ];
        let genres: Vec<String> =
            distinct_genres(&movies).into_iter().map(|g| g.name).collect();
        assert_eq!(genres, vec!["Action", "Drama"]);
        assert_eq!(
            distinct_categories(&movies),
            vec![Category::from_title("Favourites")]
        );
    }
}
