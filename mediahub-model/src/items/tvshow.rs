use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvShowBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub season_count: Option<u32>,
    #[serde(default)]
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvShowDetailed {
    #[serde(flatten)]
    pub basic: TvShowBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
}

impl TvShowDetailed {
    pub fn basic(&self) -> &TvShowBasic {
        &self.basic
    }
}

impl From<&TvShowDetailed> for TvShowBasic {
    fn from(detailed: &TvShowDetailed) -> Self {
        detailed.basic.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvSeasonBasic {
    pub id: String,
    pub show_id: String,
    pub title: String,
    pub season_number: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub episode_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvSeasonDetailed {
    #[serde(flatten)]
    pub basic: TvSeasonBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unwatched_episode_count: Option<u32>,
    #[serde(default)]
    pub artwork: Vec<String>,
}

impl TvSeasonDetailed {
    pub fn basic(&self) -> &TvSeasonBasic {
        &self.basic
    }
}

impl From<&TvSeasonDetailed> for TvSeasonBasic {
    fn from(detailed: &TvSeasonDetailed) -> Self {
        detailed.basic.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvEpisodeBasic {
    pub id: String,
    pub show_id: String,
    pub season_id: String,
    pub title: String,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TvEpisodeDetailed {
    #[serde(flatten)]
    pub basic: TvEpisodeBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub guest_stars: Vec<String>,
}

impl TvEpisodeDetailed {
    pub fn basic(&self) -> &TvEpisodeBasic {
        &self.basic
    }
}

impl From<&TvEpisodeDetailed> for TvEpisodeBasic {
    fn from(detailed: &TvEpisodeDetailed) -> Self {
        detailed.basic.clone()
    }
}
