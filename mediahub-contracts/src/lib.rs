//! Trait surfaces that describe how catalogue providers expose mediahub
//! data models.

pub mod capabilities;
pub mod error;
pub mod item;
pub mod library;
pub mod source;

pub use capabilities::MediaCapabilities;
pub use error::{BoxError, CatalogError, ErrorKind, Result};
pub use item::CatalogItem;
pub use library::{MovieLibrary, MusicLibrary, PictureLibrary, TvShowLibrary};
pub use source::{ItemSource, NativeQuery, single_match};

/// Frequently used trait combinators for provider and query crates.
pub mod prelude {
    pub use super::capabilities::MediaCapabilities;
    pub use super::error::{CatalogError, ErrorKind};
    pub use super::item::CatalogItem;
    pub use super::library::{
        MovieLibrary, MusicLibrary, PictureLibrary, TvShowLibrary,
    };
    pub use super::source::{ItemSource, NativeQuery};
}
