use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieBasic {
    pub id: String,
    pub title: String,
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
    pub categories: Vec<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetailed {
    #[serde(flatten)]
    pub basic: MovieBasic,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl MovieDetailed {
    pub fn basic(&self) -> &MovieBasic {
        &self.basic
    }
}

impl From<&MovieDetailed> for MovieBasic {
    fn from(detailed: &MovieDetailed) -> Self {
        detailed.basic.clone()
    }
}
