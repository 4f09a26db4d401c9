use mediahub_model::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::capabilities::MediaCapabilities;

/// An item type served by a collection.
///
/// Basic and detailed records of the same kind share one [`ItemKind`]; the
/// detailed form serialises as a superset of the basic one.
pub trait CatalogItem:
    MediaCapabilities
    + Clone
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + std::fmt::Debug
    + 'static
{
    const KIND: ItemKind;

    fn id(&self) -> &str;

    /// Parent id for `relation`, if this item carries that link.
    fn parent(&self, _relation: Relation) -> Option<&str> {
        None
    }
}

impl CatalogItem for MovieBasic {
    const KIND: ItemKind = ItemKind::Movie;

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for MovieDetailed {
    const KIND: ItemKind = ItemKind::Movie;

    fn id(&self) -> &str {
        &self.basic.id
    }
}

impl CatalogItem for MusicTrackBasic {
    const KIND: ItemKind = ItemKind::MusicTrack;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::Album => self.album_id.as_deref(),
            Relation::Artist => self.artist_id.as_deref(),
            Relation::Show | Relation::Season => None,
        }
    }
}

impl CatalogItem for MusicTrackDetailed {
    const KIND: ItemKind = ItemKind::MusicTrack;

    fn id(&self) -> &str {
        &self.basic.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        self.basic.parent(relation)
    }
}

impl CatalogItem for MusicAlbumBasic {
    const KIND: ItemKind = ItemKind::MusicAlbum;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::Artist => self.artist_id.as_deref(),
            _ => None,
        }
    }
}

impl CatalogItem for MusicArtistBasic {
    const KIND: ItemKind = ItemKind::MusicArtist;

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for PictureBasic {
    const KIND: ItemKind = ItemKind::Picture;

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for PictureDetailed {
    const KIND: ItemKind = ItemKind::Picture;

    fn id(&self) -> &str {
        &self.basic.id
    }
}

impl CatalogItem for TvShowBasic {
    const KIND: ItemKind = ItemKind::TvShow;

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for TvShowDetailed {
    const KIND: ItemKind = ItemKind::TvShow;

    fn id(&self) -> &str {
        &self.basic.id
    }
}

impl CatalogItem for TvSeasonBasic {
    const KIND: ItemKind = ItemKind::TvSeason;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::Show => Some(&self.show_id),
            _ => None,
        }
    }
}

impl CatalogItem for TvSeasonDetailed {
    const KIND: ItemKind = ItemKind::TvSeason;

    fn id(&self) -> &str {
        &self.basic.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        self.basic.parent(relation)
    }
}

impl CatalogItem for TvEpisodeBasic {
    const KIND: ItemKind = ItemKind::TvEpisode;

    fn id(&self) -> &str {
        &self.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::Show => Some(&self.show_id),
            Relation::Season => Some(&self.season_id),
            Relation::Album | Relation::Artist => None,
        }
    }
}

impl CatalogItem for TvEpisodeDetailed {
    const KIND: ItemKind = ItemKind::TvEpisode;

    fn id(&self) -> &str {
        &self.basic.id
    }

    fn parent(&self, relation: Relation) -> Option<&str> {
        self.basic.parent(relation)
    }
}
