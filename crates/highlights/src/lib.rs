//! # Insights Highlights
//!
//! Career highlight extraction for collection insights.
//!
//! The analytics layer describes an artist's notable exhibitions and press as
//! an *event digest*: a `;`-separated list of entries such as
//! `2021Solo Show@MoMA`. Each entry carries a year, a label and, after the
//! `@` marker, the venue or publication.
//!
//! ## Pipeline
//!
//! ```text
//! Sparkline edges (JSON)
//!     │
//!     ├──> Digest selection (first node with sparkles)
//!     │
//!     ├──> Digest parsing
//!     │    ├─> Find the year, drop entries before the retention window
//!     │    ├─> Split label and body at '@'
//!     │    └─> Classify label, dedupe bodies per year and category
//!     │
//!     └──> Pages
//!          ├─> One page per year, ascending
//!          └─> Sections with display headlines
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use insights_highlights::{parse, CareerHighlightCategory};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let map = parse("2021Solo Show@MoMA;2021Solo Show@MoMA;2019Group Show@Tate", &now);
//!
//! let solo = map.get(2021).and_then(|year| year.get(CareerHighlightCategory::SoloShow));
//! assert_eq!(solo, Some(&["MoMA".to_string()][..]));
//! assert_eq!(map.years().collect::<Vec<_>>(), vec![2019, 2021]);
//! ```

mod config;
mod digest;
mod error;
mod pages;
mod sparkline;
mod types;

pub use config::{DigestConfig, DEFAULT_WINDOW_YEARS};
pub use digest::{parse, parse_current, DigestIssue, DigestParser, ParseReport, ReportedEntry};
pub use error::{HighlightsError, Result};
pub use pages::{highlight_pages, page_index_for_year, HighlightPage, HighlightSection};
pub use sparkline::{ArtistSparklines, Sparkline, SparklineEdge};
pub use types::{CareerHighlightCategory, CareerHighlightMap, HighlightKey, YearHighlights};
