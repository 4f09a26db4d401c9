//! Canonical media DTOs. Records are flat: there is no shared base type, and
//! identifiers are provider-local strings.

pub mod movie;
pub mod music;
pub mod picture;
pub mod tvshow;

pub use movie::{MovieBasic, MovieDetailed};
pub use music::{
    MusicAlbumBasic, MusicArtistBasic, MusicTrackBasic, MusicTrackDetailed,
};
pub use picture::{PictureBasic, PictureDetailed};
pub use tvshow::{
    TvEpisodeBasic, TvEpisodeDetailed, TvSeasonBasic, TvSeasonDetailed,
    TvShowBasic, TvShowDetailed,
};
