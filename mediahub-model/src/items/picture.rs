use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PictureBasic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_taken: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PictureDetailed {
    #[serde(flatten)]
    pub basic: PictureBasic,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PictureDetailed {
    pub fn basic(&self) -> &PictureBasic {
        &self.basic
    }

    /// Resolution in megapixels when both dimensions are known.
    pub fn megapixels(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w as f32 * h as f32) / 1_000_000.0),
            _ => None,
        }
    }
}

impl From<&PictureDetailed> for PictureBasic {
    fn from(detailed: &PictureDetailed) -> Self {
        detailed.basic.clone()
    }
}
