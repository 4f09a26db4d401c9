use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// A partition of the catalogue served by exactly one active provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Movie,
    Music,
    Picture,
    TvShow,
}

impl Domain {
    pub const ALL: [Domain; 4] =
        [Domain::Movie, Domain::Music, Domain::Picture, Domain::TvShow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Movie => "movie",
            Domain::Music => "music",
            Domain::Picture => "picture",
            Domain::TvShow => "tvshow",
        }
    }

    /// Position of the domain inside per-domain arrays.
    pub fn index(&self) -> usize {
        match self {
            Domain::Movie => 0,
            Domain::Music => 1,
            Domain::Picture => 2,
            Domain::TvShow => 3,
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Domain::Movie),
            "music" => Ok(Domain::Music),
            "picture" | "pictures" => Ok(Domain::Picture),
            "tvshow" | "tvshows" | "tv" => Ok(Domain::TvShow),
            _ => Err(ModelError::UnknownVariant {
                kind: "domain",
                value: s.to_string(),
            }),
        }
    }
}

/// Concrete item variant. Every kind belongs to exactly one domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Movie,
    MusicTrack,
    MusicAlbum,
    MusicArtist,
    Picture,
    TvShow,
    TvSeason,
    TvEpisode,
}

impl ItemKind {
    pub const fn domain(&self) -> Domain {
        match self {
            ItemKind::Movie => Domain::Movie,
            ItemKind::MusicTrack
            | ItemKind::MusicAlbum
            | ItemKind::MusicArtist => Domain::Music,
            ItemKind::Picture => Domain::Picture,
            ItemKind::TvShow | ItemKind::TvSeason | ItemKind::TvEpisode => {
                Domain::TvShow
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Movie => "movie",
            ItemKind::MusicTrack => "music_track",
            ItemKind::MusicAlbum => "music_album",
            ItemKind::MusicArtist => "music_artist",
            ItemKind::Picture => "picture",
            ItemKind::TvShow => "tv_show",
            ItemKind::TvSeason => "tv_season",
            ItemKind::TvEpisode => "tv_episode",
        }
    }

    /// Parent links an item of this kind carries.
    pub fn relations(&self) -> &'static [Relation] {
        match self {
            ItemKind::MusicTrack => &[Relation::Album, Relation::Artist],
            ItemKind::MusicAlbum => &[Relation::Artist],
            ItemKind::TvSeason => &[Relation::Show],
            ItemKind::TvEpisode => &[Relation::Show, Relation::Season],
            ItemKind::Movie
            | ItemKind::MusicArtist
            | ItemKind::Picture
            | ItemKind::TvShow => &[],
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "movie" => Ok(ItemKind::Movie),
            "music_track" | "track" => Ok(ItemKind::MusicTrack),
            "music_album" | "album" => Ok(ItemKind::MusicAlbum),
            "music_artist" | "artist" => Ok(ItemKind::MusicArtist),
            "picture" => Ok(ItemKind::Picture),
            "tv_show" | "tvshow" | "show" => Ok(ItemKind::TvShow),
            "tv_season" | "season" => Ok(ItemKind::TvSeason),
            "tv_episode" | "episode" => Ok(ItemKind::TvEpisode),
            _ => Err(ModelError::UnknownVariant {
                kind: "item kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Parent link used by relation filters (tracks of an album, episodes of a
/// season, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Album,
    Artist,
    Show,
    Season,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Album => "album",
            Relation::Artist => "artist",
            Relation::Show => "show",
            Relation::Season => "season",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_its_domain() {
        assert_eq!(ItemKind::MusicArtist.domain(), Domain::Music);
        assert_eq!(ItemKind::TvSeason.domain(), Domain::TvShow);
        assert_eq!(ItemKind::Picture.domain(), Domain::Picture);
    }

    #[test]
    fn domain_parses_plural_aliases() {
        assert_eq!("Movies".parse::<Domain>(), Ok(Domain::Movie));
        assert_eq!("tv".parse::<Domain>(), Ok(Domain::TvShow));
        assert!("books".parse::<Domain>().is_err());
    }
}
