use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MusicTrackBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub album_id: Option<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub composers: Vec<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MusicTrackDetailed {
    #[serde(flatten)]
    pub basic: MusicTrackBasic,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl MusicTrackDetailed {
    pub fn basic(&self) -> &MusicTrackBasic {
        &self.basic
    }
}

impl From<&MusicTrackDetailed> for MusicTrackBasic {
    fn from(detailed: &MusicTrackDetailed) -> Self {
        detailed.basic.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MusicAlbumBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub album_artist: Option<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub composers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MusicArtistBasic {
    pub id: String,
    /// Artist name.
    pub title: String,
}
