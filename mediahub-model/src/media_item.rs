use serde::{Deserialize, Serialize};

use crate::domain::ItemKind;
use crate::items::{
    MovieDetailed, MusicAlbumBasic, MusicArtistBasic, MusicTrackDetailed,
    PictureDetailed, TvEpisodeDetailed, TvSeasonDetailed, TvShowDetailed,
};

/// Tagged union over every item variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaItem {
    Movie(MovieDetailed),
    MusicTrack(MusicTrackDetailed),
    MusicAlbum(MusicAlbumBasic),
    MusicArtist(MusicArtistBasic),
    Picture(PictureDetailed),
    TvShow(TvShowDetailed),
    TvSeason(TvSeasonDetailed),
    TvEpisode(TvEpisodeDetailed),
}

impl MediaItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            MediaItem::Movie(_) => ItemKind::Movie,
            MediaItem::MusicTrack(_) => ItemKind::MusicTrack,
            MediaItem::MusicAlbum(_) => ItemKind::MusicAlbum,
            MediaItem::MusicArtist(_) => ItemKind::MusicArtist,
            MediaItem::Picture(_) => ItemKind::Picture,
            MediaItem::TvShow(_) => ItemKind::TvShow,
            MediaItem::TvSeason(_) => ItemKind::TvSeason,
            MediaItem::TvEpisode(_) => ItemKind::TvEpisode,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MediaItem::Movie(item) => &item.basic.id,
            MediaItem::MusicTrack(item) => &item.basic.id,
            MediaItem::MusicAlbum(item) => &item.id,
            MediaItem::MusicArtist(item) => &item.id,
            MediaItem::Picture(item) => &item.basic.id,
            MediaItem::TvShow(item) => &item.basic.id,
            MediaItem::TvSeason(item) => &item.basic.id,
            MediaItem::TvEpisode(item) => &item.basic.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaItem::Movie(item) => &item.basic.title,
            MediaItem::MusicTrack(item) => &item.basic.title,
            MediaItem::MusicAlbum(item) => &item.title,
            MediaItem::MusicArtist(item) => &item.title,
            MediaItem::Picture(item) => &item.basic.title,
            MediaItem::TvShow(item) => &item.basic.title,
            MediaItem::TvSeason(item) => &item.basic.title,
            MediaItem::TvEpisode(item) => &item.basic.title,
        }
    }
}

macro_rules! impl_from_item {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for MediaItem {
                fn from(item: $ty) -> Self {
                    MediaItem::$variant(item)
                }
            }
        )*
    };
}

impl_from_item!(
    Movie(MovieDetailed),
    MusicTrack(MusicTrackDetailed),
    MusicAlbum(MusicAlbumBasic),
    MusicArtist(MusicArtistBasic),
    Picture(PictureDetailed),
    TvShow(TvShowDetailed),
    TvSeason(TvSeasonDetailed),
    TvEpisode(TvEpisodeDetailed),
);
