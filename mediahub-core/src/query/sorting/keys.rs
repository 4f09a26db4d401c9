//! Sort key types for comparing media items
//!
//! These types wrap the values extracted from media items and handle missing
//! data in their comparisons: items without a value sort after items with
//! one, whichever direction is requested.

use chrono::{DateTime, Utc};
use mediahub_contracts::MediaCapabilities;
use mediahub_model::{SortComponent, SortOrder};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Comparison contract shared by every key type.
pub trait SortKey: Ord {
    fn is_missing(&self) -> bool;

    /// Compare two keys in `order`, keeping missing values last.
    fn compare_with_order(&self, other: &Self, order: SortOrder) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => order.apply(self.cmp(other)),
        }
    }
}

/// String key for text-based sorting (title, first genre, ...)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringKey(Option<String>);

impl StringKey {
    pub fn new(value: Option<&str>) -> Self {
        StringKey(value.map(str::to_owned))
    }
}

impl Ord for StringKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for StringKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for StringKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Timestamp key, compared at millisecond precision.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct OptionalDateKey(Option<i64>);

impl OptionalDateKey {
    pub fn new(value: Option<DateTime<Utc>>) -> Self {
        OptionalDateKey(value.map(|date| date.timestamp_millis()))
    }
}

impl SortKey for OptionalDateKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Float key for ratings. NaN counts as missing.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionalFloatKey(Option<OrderedFloat<f32>>);

impl OptionalFloatKey {
    pub fn new(value: Option<f32>) -> Self {
        OptionalFloatKey(value.filter(|v| !v.is_nan()).map(OrderedFloat))
    }
}

impl Eq for OptionalFloatKey {}

impl Ord for OptionalFloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for OptionalFloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalFloatKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Integer key for years and track, season or episode numbers
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct OptionalIntKey(Option<i64>);

impl OptionalIntKey {
    pub fn new(value: Option<i64>) -> Self {
        OptionalIntKey(value)
    }
}

impl SortKey for OptionalIntKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// One extracted component of a (possibly compound) sort key.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentKey {
    Text(StringKey),
    Date(OptionalDateKey),
    Float(OptionalFloatKey),
    Int(OptionalIntKey),
}

impl ComponentKey {
    /// Extract `component` from `item`. Multi-valued fields use their first
    /// value.
    pub fn extract<T: MediaCapabilities>(
        item: &T,
        component: SortComponent,
    ) -> Self {
        match component {
            SortComponent::Title => {
                ComponentKey::Text(StringKey::new(item.title()))
            }
            SortComponent::DateAdded => {
                ComponentKey::Date(OptionalDateKey::new(item.date_added()))
            }
            SortComponent::Year => ComponentKey::Int(OptionalIntKey::new(
                item.year().map(i64::from),
            )),
            SortComponent::Genre => ComponentKey::Text(StringKey::new(
                item.genres().first().map(String::as_str),
            )),
            SortComponent::Rating => {
                ComponentKey::Float(OptionalFloatKey::new(item.rating()))
            }
            SortComponent::Category => ComponentKey::Text(StringKey::new(
                item.categories().first().map(String::as_str),
            )),
            SortComponent::TrackNumber => ComponentKey::Int(
                OptionalIntKey::new(item.track_number().map(i64::from)),
            ),
            SortComponent::Composer => ComponentKey::Text(StringKey::new(
                item.composers().first().map(String::as_str),
            )),
            SortComponent::SeasonId => {
                ComponentKey::Text(StringKey::new(item.season_id()))
            }
            SortComponent::EpisodeNumber => ComponentKey::Int(
                OptionalIntKey::new(item.episode_number().map(i64::from)),
            ),
            SortComponent::SeasonNumber => ComponentKey::Int(
                OptionalIntKey::new(item.season_number().map(i64::from)),
            ),
            SortComponent::DateAired => {
                ComponentKey::Date(OptionalDateKey::new(item.date_aired()))
            }
            SortComponent::DateTaken => {
                ComponentKey::Date(OptionalDateKey::new(item.date_taken()))
            }
        }
    }

    pub fn compare_with_order(
        &self,
        other: &Self,
        order: SortOrder,
    ) -> Ordering {
        match (self, other) {
            (ComponentKey::Text(a), ComponentKey::Text(b)) => {
                a.compare_with_order(b, order)
            }
            (ComponentKey::Date(a), ComponentKey::Date(b)) => {
                a.compare_with_order(b, order)
            }
            (ComponentKey::Float(a), ComponentKey::Float(b)) => {
                a.compare_with_order(b, order)
            }
            (ComponentKey::Int(a), ComponentKey::Int(b)) => {
                a.compare_with_order(b, order)
            }
            // Keys of one component always share a variant.
            _ => Ordering::Equal,
        }
    }
}
