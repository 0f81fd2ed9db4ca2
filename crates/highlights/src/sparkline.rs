use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Artist sparkline connection as delivered by the graph layer.
/// Every level may be null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSparklines {
    #[serde(default)]
    pub edges: Option<Vec<Option<SparklineEdge>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparklineEdge {
    #[serde(default)]
    pub node: Option<Sparkline>,
}

/// One year of analytics for an artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sparkline {
    #[serde(default)]
    pub event_digest: Option<String>,
    #[serde(default)]
    pub sparkles: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl Sparkline {
    /// Whether the sparkles count is a non-zero integer
    #[must_use]
    pub fn has_sparkles(&self) -> bool {
        self.sparkles
            .as_deref()
            .and_then(parse_leading_int)
            .is_some_and(|count| count != 0)
    }

    fn digest(&self) -> Option<&str> {
        self.event_digest.as_deref().filter(|digest| !digest.is_empty())
    }
}

impl ArtistSparklines {
    /// Decode the connection from its JSON form
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Sparkline> {
        self.edges
            .iter()
            .flatten()
            .flatten()
            .filter_map(|edge| edge.node.as_ref())
    }

    /// Event digest of the first node that has sparkles and a non-empty digest
    #[must_use]
    pub fn select_event_digest(&self) -> Option<&str> {
        let selected = self
            .nodes()
            .find(|node| node.has_sparkles() && node.digest().is_some());
        if let Some(node) = selected {
            log::debug!(
                "Selected event digest from sparkline year {}",
                node.year.as_deref().unwrap_or("?")
            );
        }
        selected.and_then(Sparkline::digest)
    }
}

/// Leading integer of `raw`: optional whitespace and sign, then digits.
/// Trailing text is ignored; no digits at all yields `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // Overlong runs saturate; only zero vs non-zero matters to callers
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
