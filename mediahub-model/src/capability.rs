//! Sortable/filterable capability markers.
//!
//! Every item type declares a static [`CapabilitySet`]. Sort keys and filter
//! predicates name the capabilities they need, and the query layer rejects a
//! request whose requirements are not a subset of the item's set.

use std::fmt::{self, Display, Formatter};

/// A single semantic capability an item variant may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Title,
    DateAdded,
    Year,
    /// Multi-valued.
    Genre,
    Rating,
    /// Multi-valued user defined categories.
    Category,
    TrackNumber,
    /// Multi-valued.
    Composer,
    /// Episode number together with the owning season id.
    EpisodeNumber,
    SeasonNumber,
    DateAired,
    DateTaken,
}

impl Capability {
    pub const ALL: [Capability; 12] = [
        Capability::Title,
        Capability::DateAdded,
        Capability::Year,
        Capability::Genre,
        Capability::Rating,
        Capability::Category,
        Capability::TrackNumber,
        Capability::Composer,
        Capability::EpisodeNumber,
        Capability::SeasonNumber,
        Capability::DateAired,
        Capability::DateTaken,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Title => "title",
            Capability::DateAdded => "date_added",
            Capability::Year => "year",
            Capability::Genre => "genre",
            Capability::Rating => "rating",
            Capability::Category => "category",
            Capability::TrackNumber => "track_number",
            Capability::Composer => "composer",
            Capability::EpisodeNumber => "episode_number",
            Capability::SeasonNumber => "season_number",
            Capability::DateAired => "date_aired",
            Capability::DateTaken => "date_taken",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compact set of [`Capability`] values, usable in `const` position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet(u16);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    pub const fn of(capabilities: &[Capability]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < capabilities.len() {
            bits |= capabilities[i].bit();
            i += 1;
        }
        CapabilitySet(bits)
    }

    pub const fn all() -> Self {
        Self::of(&Capability::ALL)
    }

    pub const fn with(self, capability: Capability) -> Self {
        CapabilitySet(self.0 | capability.bit())
    }

    pub const fn union(self, other: CapabilitySet) -> Self {
        CapabilitySet(self.0 | other.0)
    }

    pub const fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub const fn contains_all(&self, other: CapabilitySet) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members of `required` that are missing from `self`.
    pub fn missing_from(&self, required: CapabilitySet) -> CapabilitySet {
        CapabilitySet(required.0 & !self.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|cap| self.contains(*cap))
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for CapabilitySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|cap| cap.as_str()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::EMPTY, |set, cap| set.with(cap))
    }
}
