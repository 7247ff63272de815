use crate::api::PokeApi;
use crate::errors::{FetchError, FetchResult};
use schema::{
    AbilitySlot, ChainResponse, EntryDetail, ListingResponse, NamedResource, RosterEntry,
    RosterPage, SpeciesRecord, TypeSlot,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canonical listing URL for an entry id.
pub fn entry_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{id}/")
}

/// One listing summary.
pub fn summary(name: &str, id: u32) -> NamedResource {
    NamedResource { name: name.to_string(), url: entry_url(id) }
}

/// A listing page over `(id, name)` pairs.
pub fn listing(entries: &[(u32, &str)], next: Option<&str>, count: u32) -> ListingResponse {
    ListingResponse {
        count,
        next: next.map(str::to_string),
        previous: None,
        results: entries.iter().map(|(id, name)| summary(name, *id)).collect(),
    }
}

/// An already-enriched roster page, for driving the controller directly.
pub fn page(entries: &[(u32, &str)], next: Option<&str>, total: u32) -> RosterPage {
    RosterPage {
        entries: entries
            .iter()
            .map(|(id, name)| RosterEntry {
                id: *id,
                name: name.to_string(),
                url: entry_url(*id),
                types: vec!["normal".to_string()],
            })
            .collect(),
        next_url: next.map(str::to_string),
        total,
    }
}

/// A detail payload carrying just enough for roster enrichment.
pub fn detail(id: u32, name: &str, types: &[&str]) -> EntryDetail {
    EntryDetail {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        types: types
            .iter()
            .map(|type_name| TypeSlot {
                type_: NamedResource {
                    name: type_name.to_string(),
                    url: format!("https://pokeapi.co/api/v2/type/{type_name}/"),
                },
            })
            .collect(),
        abilities: vec![AbilitySlot {
            ability: NamedResource {
                name: "overgrow".to_string(),
                url: "https://pokeapi.co/api/v2/ability/65/".to_string(),
            },
        }],
        stats: Vec::new(),
        moves: Vec::new(),
        sprites: Default::default(),
    }
}

/// Scripted upstream source: pre-seeded responses plus call records for
/// asserting how many fetches an operation issued.
pub struct ScriptedApi {
    pub pages: HashMap<String, ListingResponse>,
    pub details: HashMap<String, EntryDetail>,
    pub failing_details: Vec<String>,
    pub page_calls: Mutex<Vec<String>>,
    pub detail_calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            details: HashMap::new(),
            failing_details: Vec::new(),
            page_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    /// Seed a listing page at `url` whose entries all resolve details with
    /// a single placeholder type.
    pub fn with_page(mut self, url: &str, entries: &[(u32, &str)], next: Option<&str>, count: u32) -> Self {
        self.pages.insert(url.to_string(), listing(entries, next, count));
        for (id, name) in entries {
            self.details.insert(entry_url(*id), detail(*id, name, &["normal"]));
        }
        self
    }

    /// Make one entry's detail call answer with a server error.
    pub fn with_failing_detail(mut self, id: u32) -> Self {
        self.failing_details.push(entry_url(id));
        self
    }

    pub fn page_call_count(&self) -> usize {
        self.page_calls.lock().unwrap().len()
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_calls.lock().unwrap().len()
    }
}

impl PokeApi for ScriptedApi {
    async fn roster_page(&self, url: &str) -> FetchResult<ListingResponse> {
        self.page_calls.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or(FetchError::Status(500))
    }

    async fn entry_detail(&self, url: &str) -> FetchResult<EntryDetail> {
        self.detail_calls.lock().unwrap().push(url.to_string());
        if self.failing_details.iter().any(|failing| failing == url) {
            return Err(FetchError::Status(500));
        }
        self.details.get(url).cloned().ok_or(FetchError::NotFound)
    }

    async fn entry_by_id(&self, id: u32) -> FetchResult<EntryDetail> {
        self.entry_detail(&entry_url(id)).await
    }

    async fn species(&self, _id: u32) -> FetchResult<SpeciesRecord> {
        unreachable!("not used by roster operations")
    }

    async fn evolution_chain(&self, _url: &str) -> FetchResult<ChainResponse> {
        unreachable!("not used by roster operations")
    }
}
