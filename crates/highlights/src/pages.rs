use crate::types::{CareerHighlightMap, HighlightKey, YearHighlights};
use serde::Serialize;
use std::fmt;

/// One year of highlights as shown in the horizontal pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightPage {
    pub year: i32,
    /// Position in the pager, counted from the earliest year
    pub index: usize,
    pub highlights: YearHighlights,
}

/// A headed group of entries within a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSection {
    pub key: HighlightKey,
    /// Empty for [`HighlightKey::Unknown`]
    pub headline: &'static str,
    pub entries: Vec<String>,
}

impl HighlightPage {
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Career Highlights", self.year)
    }

    /// Sections in category order
    #[must_use]
    pub fn sections(&self) -> Vec<HighlightSection> {
        self.highlights
            .iter()
            .map(|(key, bodies)| HighlightSection {
                key,
                headline: key
                    .category()
                    .map_or("", |category| category.headline(bodies.len())),
                entries: bodies.to_vec(),
            })
            .collect()
    }
}

impl fmt::Display for HighlightPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        for section in self.sections() {
            match section.key {
                HighlightKey::Unknown => writeln!(f, "  ({})", section.key)?,
                HighlightKey::Category(_) => writeln!(f, "  {}", section.headline)?,
            }
            for entry in &section.entries {
                writeln!(f, "    {entry}")?;
            }
        }
        Ok(())
    }
}

/// One page per year, earliest first
#[must_use]
pub fn highlight_pages(map: &CareerHighlightMap) -> Vec<HighlightPage> {
    map.iter()
        .enumerate()
        .map(|(index, (year, highlights))| HighlightPage {
            year: *year,
            index,
            highlights: highlights.clone(),
        })
        .collect()
}

/// Page to scroll to when `year` is selected on the chart axis
#[must_use]
pub fn page_index_for_year(pages: &[HighlightPage], year: i32) -> Option<usize> {
    pages
        .iter()
        .find(|page| page.year == year)
        .map(|page| page.index)
}
