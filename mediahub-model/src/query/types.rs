use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::visitor::DescriptorVisitor;
use crate::capability::{Capability, CapabilitySet};
use crate::domain::Relation;
use crate::error::{ModelError, Result};

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ModelError::UnknownVariant {
                kind: "sort order",
                value: s.to_string(),
            }),
        }
    }
}

/// A single scalar key extracted from an item during ordering.
///
/// Multi-valued fields (genres, categories, composers) contribute their first
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortComponent {
    Title,
    DateAdded,
    Year,
    Genre,
    Rating,
    Category,
    TrackNumber,
    Composer,
    /// Identifier of the owning season.
    SeasonId,
    EpisodeNumber,
    SeasonNumber,
    DateAired,
    DateTaken,
}

impl SortComponent {
    /// Capability an item must declare before this key can be extracted.
    pub fn capability(&self) -> Capability {
        match self {
            SortComponent::Title => Capability::Title,
            SortComponent::DateAdded => Capability::DateAdded,
            SortComponent::Year => Capability::Year,
            SortComponent::Genre => Capability::Genre,
            SortComponent::Rating => Capability::Rating,
            SortComponent::Category => Capability::Category,
            SortComponent::TrackNumber => Capability::TrackNumber,
            SortComponent::Composer => Capability::Composer,
            SortComponent::SeasonId | SortComponent::EpisodeNumber => {
                Capability::EpisodeNumber
            }
            SortComponent::SeasonNumber => Capability::SeasonNumber,
            SortComponent::DateAired => Capability::DateAired,
            SortComponent::DateTaken => Capability::DateTaken,
        }
    }
}

/// Sort keys accepted by the catalogue API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Title,
    DateAdded,
    Year,
    Genre,
    Rating,
    UserDefinedCategories,
    MusicTrackNumber,
    MusicComposer,
    /// Season id, then episode number within the season.
    TvEpisodeNumber,
    TvSeasonNumber,
    TvDateAired,
    PictureDateTaken,
    /// Season number, then episode number within the season.
    SeasonThenEpisode,
}

impl SortBy {
    pub const ALL: [SortBy; 13] = [
        SortBy::Title,
        SortBy::DateAdded,
        SortBy::Year,
        SortBy::Genre,
        SortBy::Rating,
        SortBy::UserDefinedCategories,
        SortBy::MusicTrackNumber,
        SortBy::MusicComposer,
        SortBy::TvEpisodeNumber,
        SortBy::TvSeasonNumber,
        SortBy::TvDateAired,
        SortBy::PictureDateTaken,
        SortBy::SeasonThenEpisode,
    ];

    /// Ordered key parts compared lexicographically.
    pub fn components(&self) -> &'static [SortComponent] {
        match self {
            SortBy::Title => &[SortComponent::Title],
            SortBy::DateAdded => &[SortComponent::DateAdded],
            SortBy::Year => &[SortComponent::Year],
            SortBy::Genre => &[SortComponent::Genre],
            SortBy::Rating => &[SortComponent::Rating],
            SortBy::UserDefinedCategories => &[SortComponent::Category],
            SortBy::MusicTrackNumber => &[SortComponent::TrackNumber],
            SortBy::MusicComposer => &[SortComponent::Composer],
            SortBy::TvEpisodeNumber => {
                &[SortComponent::SeasonId, SortComponent::EpisodeNumber]
            }
            SortBy::TvSeasonNumber => &[SortComponent::SeasonNumber],
            SortBy::TvDateAired => &[SortComponent::DateAired],
            SortBy::PictureDateTaken => &[SortComponent::DateTaken],
            SortBy::SeasonThenEpisode => {
                &[SortComponent::SeasonNumber, SortComponent::EpisodeNumber]
            }
        }
    }

    pub fn required_capabilities(&self) -> CapabilitySet {
        self.components()
            .iter()
            .map(SortComponent::capability)
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::DateAdded => "date_added",
            SortBy::Year => "year",
            SortBy::Genre => "genre",
            SortBy::Rating => "rating",
            SortBy::UserDefinedCategories => "user_defined_categories",
            SortBy::MusicTrackNumber => "music_track_number",
            SortBy::MusicComposer => "music_composer",
            SortBy::TvEpisodeNumber => "tv_episode_number",
            SortBy::TvSeasonNumber => "tv_season_number",
            SortBy::TvDateAired => "tv_date_aired",
            SortBy::PictureDateTaken => "picture_date_taken",
            SortBy::SeasonThenEpisode => "season_then_episode",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        if let Some(sort) = SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == normalized)
        {
            return Ok(sort);
        }
        match normalized.as_str() {
            "categories" | "category" => Ok(SortBy::UserDefinedCategories),
            "track_number" | "track" => Ok(SortBy::MusicTrackNumber),
            "composer" => Ok(SortBy::MusicComposer),
            "episode" | "episode_number" => Ok(SortBy::TvEpisodeNumber),
            "season" | "season_number" => Ok(SortBy::TvSeasonNumber),
            "date_aired" | "aired" => Ok(SortBy::TvDateAired),
            "date_taken" | "taken" => Ok(SortBy::PictureDateTaken),
            _ => Err(ModelError::UnknownVariant {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

/// One `(sort key, direction)` pair of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    pub sort_by: SortBy,
    #[serde(default)]
    pub order: SortOrder,
}

impl OrderKey {
    pub const fn new(sort_by: SortBy, order: SortOrder) -> Self {
        Self { sort_by, order }
    }

    pub const fn ascending(sort_by: SortBy) -> Self {
        Self::new(sort_by, SortOrder::Ascending)
    }

    pub const fn descending(sort_by: SortBy) -> Self {
        Self::new(sort_by, SortOrder::Descending)
    }
}

/// Order applied when a descriptor carries no explicit order.
pub const DEFAULT_ORDER: OrderKey = OrderKey::ascending(SortBy::Title);

/// Filter predicate. Multiple predicates are combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Exact, case-sensitive membership in the genre set.
    GenreContains(String),
    /// Exact, case-sensitive membership in the user category set.
    CategoryContains(String),
    /// Parent id equality (tracks of an album, episodes of a season, ...).
    RelatedTo { relation: Relation, id: String },
    IdEquals(String),
}

impl Predicate {
    /// Capability the item type must declare, if any.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            Predicate::GenreContains(_) => Some(Capability::Genre),
            Predicate::CategoryContains(_) => Some(Capability::Category),
            Predicate::RelatedTo { .. } | Predicate::IdEquals(_) => None,
        }
    }
}

/// Zero-based slice of a result sequence: `start` items are skipped and at
/// most `count` are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    start: u64,
    count: u64,
}

impl Range {
    /// Validate a `(start, count)` pair.
    pub fn new(start: i64, count: i64) -> Result<Self> {
        if start < 0 {
            return Err(ModelError::InvalidRange {
                start,
                end: start.saturating_add(count),
                reason: "start must not be negative",
            });
        }
        if count < 0 {
            return Err(ModelError::InvalidRange {
                start,
                end: start.saturating_add(count),
                reason: "count must not be negative",
            });
        }
        Ok(Self {
            start: start as u64,
            count: count as u64,
        })
    }

    /// Validate a half-open `[start, end)` pair.
    pub fn from_bounds(start: i64, end: i64) -> Result<Self> {
        if start < 0 {
            return Err(ModelError::InvalidRange {
                start,
                end,
                reason: "start must not be negative",
            });
        }
        if end < start {
            return Err(ModelError::InvalidRange {
                start,
                end,
                reason: "end must not precede start",
            });
        }
        Ok(Self {
            start: start as u64,
            count: (end - start) as u64,
        })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Apply the range to an already ordered vector.
    pub fn slice<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let len = items.len() as u64;
        if self.start >= len {
            return Vec::new();
        }
        let end = self.end().min(len) as usize;
        items.truncate(end);
        items.split_off(self.start as usize)
    }
}

/// Filter + order + range over one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub predicates: Vec<Predicate>,
    #[serde(default)]
    pub order: Vec<OrderKey>,
    #[serde(default)]
    pub range: Option<Range>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> super::QueryDescriptorBuilder {
        super::QueryDescriptorBuilder::new()
    }

    /// Explicit order, or title ascending when none was requested.
    pub fn effective_order(&self) -> &[OrderKey] {
        if self.order.is_empty() {
            std::slice::from_ref(&DEFAULT_ORDER)
        } else {
            &self.order
        }
    }

    /// Capabilities the effective order needs.
    pub fn order_capabilities(&self) -> CapabilitySet {
        self.effective_order()
            .iter()
            .fold(CapabilitySet::EMPTY, |set, key| {
                set.union(key.sort_by.required_capabilities())
            })
    }

    /// Same descriptor without its range, used for counting.
    pub fn without_range(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            order: self.order.clone(),
            range: None,
        }
    }

    /// Walk predicates, then the effective order, then the range.
    pub fn accept<V: DescriptorVisitor>(
        &self,
        visitor: &mut V,
    ) -> std::result::Result<(), V::Error> {
        for predicate in &self.predicates {
            visitor.visit_predicate(predicate)?;
        }
        visitor.visit_order(self.effective_order())?;
        visitor.visit_range(self.range)
    }
}
