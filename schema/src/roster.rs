use serde::{Deserialize, Serialize};

/// One entry summary of the browsing roster, enriched with the numeric
/// identifier parsed from its resource URL and its type tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub types: Vec<String>,
}

/// One fetched roster page.
///
/// Entries preserve upstream listing order; pages concatenate in fetch
/// order with no deduplication or re-sorting. `next_url` is the upstream
/// cursor taken verbatim; `None` means the roster is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPage {
    pub entries: Vec<RosterEntry>,
    pub next_url: Option<String>,
    pub total: u32,
}

impl RosterPage {
    pub fn is_last(&self) -> bool {
        self.next_url.is_none()
    }
}
