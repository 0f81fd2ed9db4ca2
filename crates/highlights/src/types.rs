use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Classification bucket for a career highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CareerHighlightCategory {
    #[serde(rename = "Solo Show")]
    SoloShow,
    #[serde(rename = "Group Show")]
    GroupShow,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "Biennial Inclusion")]
    BiennialInclusion,
}

impl CareerHighlightCategory {
    pub const ALL: [Self; 4] = [
        Self::SoloShow,
        Self::GroupShow,
        Self::Review,
        Self::BiennialInclusion,
    ];

    /// Resolve a digest title (already trimmed) to its category.
    ///
    /// Both reviewed variants collapse into [`Self::Review`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Solo Show" => Some(Self::SoloShow),
            "Group Show" => Some(Self::GroupShow),
            "Reviewed Solo Show" | "Reviewed Group Show" => Some(Self::Review),
            "Biennial Inclusion" => Some(Self::BiennialInclusion),
            _ => None,
        }
    }

    /// Get category name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoloShow => "Solo Show",
            Self::GroupShow => "Group Show",
            Self::Review => "Review",
            Self::BiennialInclusion => "Biennial Inclusion",
        }
    }

    /// Section headline shown above `count` entries
    #[must_use]
    pub const fn headline(self, count: usize) -> &'static str {
        let plural = count > 1;
        match self {
            Self::SoloShow if plural => "Solo shows at major institutions",
            Self::SoloShow => "Solo show at a major institution",
            Self::GroupShow if plural => "Group shows at major institutions",
            Self::GroupShow => "Group show at a major institution",
            Self::Review if plural => "Reviewed by major art publications",
            Self::Review => "Reviewed by a major art publication",
            Self::BiennialInclusion if plural => "Included in multiple major biennials",
            Self::BiennialInclusion => "Included in a major biennial",
        }
    }
}

impl fmt::Display for CareerHighlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which a digest entry is stored for its year.
///
/// Titles outside the known label set are kept under [`HighlightKey::Unknown`]
/// rather than dropped, so callers can see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HighlightKey {
    Category(CareerHighlightCategory),
    Unknown,
}

impl HighlightKey {
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        CareerHighlightCategory::from_label(title).map_or(Self::Unknown, Self::Category)
    }

    #[must_use]
    pub const fn category(self) -> Option<CareerHighlightCategory> {
        match self {
            Self::Category(category) => Some(category),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::Unknown => "Unknown",
        }
    }
}

impl From<CareerHighlightCategory> for HighlightKey {
    fn from(category: CareerHighlightCategory) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for HighlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HighlightKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Highlights recorded for a single year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct YearHighlights {
    entries: BTreeMap<HighlightKey, Vec<String>>,
}

impl YearHighlights {
    /// Bodies recorded under `key`, in first-seen order
    #[must_use]
    pub fn get(&self, key: impl Into<HighlightKey>) -> Option<&[String]> {
        self.entries.get(&key.into()).map(Vec::as_slice)
    }

    /// Bodies whose title matched no known label
    #[must_use]
    pub fn unknown(&self) -> Option<&[String]> {
        self.get(HighlightKey::Unknown)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HighlightKey, &[String])> {
        self.entries.iter().map(|(key, bodies)| (*key, bodies.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = HighlightKey> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `body` under `key` unless it is already present.
    /// Returns whether the body was new.
    pub(crate) fn insert(&mut self, key: HighlightKey, body: &str) -> bool {
        let bodies = self.entries.entry(key).or_default();
        if bodies.iter().any(|existing| existing == body) {
            return false;
        }
        bodies.push(body.to_string());
        true
    }
}

/// Year-keyed career highlights, iterated in ascending year order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CareerHighlightMap {
    years: BTreeMap<i32, YearHighlights>,
}

impl CareerHighlightMap {
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&YearHighlights> {
        self.years.get(&year)
    }

    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Years present, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, i32, YearHighlights> {
        self.years.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub(crate) fn year_mut(&mut self, year: i32) -> &mut YearHighlights {
        self.years.entry(year).or_default()
    }
}

impl<'a> IntoIterator for &'a CareerHighlightMap {
    type Item = (&'a i32, &'a YearHighlights);
    type IntoIter = btree_map::Iter<'a, i32, YearHighlights>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label_lookup() {
        assert_eq!(
            CareerHighlightCategory::from_label("Solo Show"),
            Some(CareerHighlightCategory::SoloShow)
        );
        assert_eq!(
            CareerHighlightCategory::from_label("Group Show"),
            Some(CareerHighlightCategory::GroupShow)
        );
        assert_eq!(
            CareerHighlightCategory::from_label("Reviewed Solo Show"),
            Some(CareerHighlightCategory::Review)
        );
        assert_eq!(
            CareerHighlightCategory::from_label("Reviewed Group Show"),
            Some(CareerHighlightCategory::Review)
        );
        assert_eq!(
            CareerHighlightCategory::from_label("Biennial Inclusion"),
            Some(CareerHighlightCategory::BiennialInclusion)
        );
        assert_eq!(CareerHighlightCategory::from_label("solo show"), None);
        assert_eq!(HighlightKey::from_title("Art Fair"), HighlightKey::Unknown);
    }

    #[test]
    fn test_headline_pluralization() {
        for category in CareerHighlightCategory::ALL {
            assert_ne!(category.headline(1), category.headline(2));
            assert_eq!(category.headline(0), category.headline(1));
        }
        assert_eq!(
            CareerHighlightCategory::Review.headline(3),
            "Reviewed by major art publications"
        );
    }

    #[test]
    fn test_year_highlights_dedup_keeps_first_seen_order() {
        let mut year = YearHighlights::default();
        let key = HighlightKey::from(CareerHighlightCategory::SoloShow);
        assert!(year.insert(key, "MoMA"));
        assert!(year.insert(key, "Tate"));
        assert!(!year.insert(key, "MoMA"));
        assert_eq!(
            year.get(CareerHighlightCategory::SoloShow),
            Some(&["MoMA".to_string(), "Tate".to_string()][..])
        );
        assert_eq!(year.get(CareerHighlightCategory::Review), None);
    }

    #[test]
    fn test_map_serializes_with_labels() {
        let mut map = CareerHighlightMap::default();
        map.year_mut(2021)
            .insert(CareerHighlightCategory::BiennialInclusion.into(), "Documenta");
        map.year_mut(2019).insert(HighlightKey::Unknown, "Somewhere");

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "2019": { "Unknown": ["Somewhere"] },
                "2021": { "Biennial Inclusion": ["Documenta"] },
            })
        );
    }
}
