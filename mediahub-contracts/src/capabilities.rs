//! Capability accessors.
//!
//! Each item type declares its [`CapabilitySet`] as an associated constant and
//! overrides the accessors it backs. Accessors for capabilities an item does
//! not declare keep their empty defaults and are never consulted by the query
//! layer.

use chrono::{DateTime, Utc};
use mediahub_model::prelude::*;

pub trait MediaCapabilities {
    /// Capabilities every value of this type supports.
    const CAPABILITIES: CapabilitySet;

    /// Name used in diagnostics.
    const ITEM_NAME: &'static str;

    /// Capabilities of this particular value. Differs from
    /// [`Self::CAPABILITIES`] only for unions such as [`MediaItem`].
    fn capabilities(&self) -> CapabilitySet {
        Self::CAPABILITIES
    }

    fn title(&self) -> Option<&str> {
        None
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn year(&self) -> Option<i32> {
        None
    }

    fn genres(&self) -> &[String] {
        &[]
    }

    fn rating(&self) -> Option<f32> {
        None
    }

    fn categories(&self) -> &[String] {
        &[]
    }

    fn track_number(&self) -> Option<u32> {
        None
    }

    fn composers(&self) -> &[String] {
        &[]
    }

    fn season_id(&self) -> Option<&str> {
        None
    }

    fn episode_number(&self) -> Option<u32> {
        None
    }

    fn season_number(&self) -> Option<u32> {
        None
    }

    fn date_aired(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn date_taken(&self) -> Option<DateTime<Utc>> {
        None
    }
}

use Capability as C;

impl MediaCapabilities for MovieBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Year,
        C::Genre,
        C::Rating,
        C::Category,
    ]);
    const ITEM_NAME: &'static str = "movie";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl MediaCapabilities for MusicTrackBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Year,
        C::Genre,
        C::Rating,
        C::TrackNumber,
        C::Composer,
    ]);
    const ITEM_NAME: &'static str = "music track";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn track_number(&self) -> Option<u32> {
        self.track_number
    }

    fn composers(&self) -> &[String] {
        &self.composers
    }
}

impl MediaCapabilities for MusicAlbumBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Year,
        C::Genre,
        C::Rating,
        C::Composer,
    ]);
    const ITEM_NAME: &'static str = "music album";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn composers(&self) -> &[String] {
        &self.composers
    }
}

impl MediaCapabilities for MusicArtistBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[C::Title]);
    const ITEM_NAME: &'static str = "music artist";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl MediaCapabilities for PictureBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Category,
        C::DateTaken,
    ]);
    const ITEM_NAME: &'static str = "picture";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn date_taken(&self) -> Option<DateTime<Utc>> {
        self.date_taken
    }
}

impl MediaCapabilities for TvShowBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Year,
        C::Genre,
        C::Rating,
        C::Category,
    ]);
    const ITEM_NAME: &'static str = "tv show";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn genres(&self) -> &[String] {
        &self.genres
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl MediaCapabilities for TvSeasonBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Year,
        C::SeasonNumber,
    ]);
    const ITEM_NAME: &'static str = "tv season";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn season_number(&self) -> Option<u32> {
        self.season_number
    }
}

impl MediaCapabilities for TvEpisodeBasic {
    const CAPABILITIES: CapabilitySet = CapabilitySet::of(&[
        C::Title,
        C::DateAdded,
        C::Rating,
        C::EpisodeNumber,
        C::SeasonNumber,
        C::DateAired,
    ]);
    const ITEM_NAME: &'static str = "tv episode";

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }

    fn rating(&self) -> Option<f32> {
        self.rating
    }

    fn season_id(&self) -> Option<&str> {
        Some(&self.season_id)
    }

    fn episode_number(&self) -> Option<u32> {
        self.episode_number
    }

    fn season_number(&self) -> Option<u32> {
        self.season_number
    }

    fn date_aired(&self) -> Option<DateTime<Utc>> {
        self.first_aired
    }
}

/// Detailed records expose exactly the capabilities of their embedded basic
/// record.
macro_rules! delegate_to_basic {
    ($($detailed:ty => $basic:ty),* $(,)?) => {
        $(
            impl MediaCapabilities for $detailed {
                const CAPABILITIES: CapabilitySet =
                    <$basic as MediaCapabilities>::CAPABILITIES;
                const ITEM_NAME: &'static str =
                    <$basic as MediaCapabilities>::ITEM_NAME;

                fn title(&self) -> Option<&str> {
                    self.basic.title()
                }

                fn date_added(&self) -> Option<DateTime<Utc>> {
                    self.basic.date_added()
                }

                fn year(&self) -> Option<i32> {
                    self.basic.year()
                }

                fn genres(&self) -> &[String] {
                    self.basic.genres()
                }

                fn rating(&self) -> Option<f32> {
                    self.basic.rating()
                }

                fn categories(&self) -> &[String] {
                    self.basic.categories()
                }

                fn track_number(&self) -> Option<u32> {
                    self.basic.track_number()
                }

                fn composers(&self) -> &[String] {
                    self.basic.composers()
                }

                fn season_id(&self) -> Option<&str> {
                    self.basic.season_id()
                }

                fn episode_number(&self) -> Option<u32> {
                    self.basic.episode_number()
                }

                fn season_number(&self) -> Option<u32> {
                    self.basic.season_number()
                }

                fn date_aired(&self) -> Option<DateTime<Utc>> {
                    self.basic.date_aired()
                }

                fn date_taken(&self) -> Option<DateTime<Utc>> {
                    self.basic.date_taken()
                }
            }
        )*
    };
}

delegate_to_basic!(
    MovieDetailed => MovieBasic,
    MusicTrackDetailed => MusicTrackBasic,
    PictureDetailed => PictureBasic,
    TvShowDetailed => TvShowBasic,
    TvSeasonDetailed => TvSeasonBasic,
    TvEpisodeDetailed => TvEpisodeBasic,
);

macro_rules! dispatch {
    ($self:ident, $item:ident => $body:expr) => {
        match $self {
            MediaItem::Movie($item) => $body,
            MediaItem::MusicTrack($item) => $body,
            MediaItem::MusicAlbum($item) => $body,
            MediaItem::MusicArtist($item) => $body,
            MediaItem::Picture($item) => $body,
            MediaItem::TvShow($item) => $body,
            MediaItem::TvSeason($item) => $body,
            MediaItem::TvEpisode($item) => $body,
        }
    };
}

impl MediaCapabilities for MediaItem {
    /// Union over every variant; a mixed sequence is validated per item.
    const CAPABILITIES: CapabilitySet = MovieBasic::CAPABILITIES
        .union(MusicTrackBasic::CAPABILITIES)
        .union(MusicAlbumBasic::CAPABILITIES)
        .union(MusicArtistBasic::CAPABILITIES)
        .union(PictureBasic::CAPABILITIES)
        .union(TvShowBasic::CAPABILITIES)
        .union(TvSeasonBasic::CAPABILITIES)
        .union(TvEpisodeBasic::CAPABILITIES);
    const ITEM_NAME: &'static str = "media item";

    fn capabilities(&self) -> CapabilitySet {
        dispatch!(self, item => item.capabilities())
    }

    fn title(&self) -> Option<&str> {
        dispatch!(self, item => item.title())
    }

    fn date_added(&self) -> Option<DateTime<Utc>> {
        dispatch!(self, item => item.date_added())
    }

    fn year(&self) -> Option<i32> {
        dispatch!(self, item => item.year())
    }

    fn genres(&self) -> &[String] {
        dispatch!(self, item => item.genres())
    }

    fn rating(&self) -> Option<f32> {
        dispatch!(self, item => item.rating())
    }

    fn categories(&self) -> &[String] {
        dispatch!(self, item => item.categories())
    }

    fn track_number(&self) -> Option<u32> {
        dispatch!(self, item => item.track_number())
    }

    fn composers(&self) -> &[String] {
        dispatch!(self, item => item.composers())
    }

    fn season_id(&self) -> Option<&str> {
        dispatch!(self, item => item.season_id())
    }

    fn episode_number(&self) -> Option<u32> {
        dispatch!(self, item => item.episode_number())
    }

    fn season_number(&self) -> Option<u32> {
        dispatch!(self, item => item.season_number())
    }

    fn date_aired(&self) -> Option<DateTime<Utc>> {
        dispatch!(self, item => item.date_aired())
    }

    fn date_taken(&self) -> Option<DateTime<Utc>> {
        dispatch!(self, item => item.date_taken())
    }
}
