//! Tabbed detail-view controller for one entry, including the lazily
//! fetched evolution chain.

use crate::api::PokeApi;
use crate::errors::FetchResult;
use crate::evolution::flatten::lookup_chain;
use schema::{DetailRecord, DetailTab, EvolutionChain};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Loading state of the lazily fetched evolution chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvolutionSlot {
    /// The evolution tab has never been opened
    NotLoaded,
    /// Chain lookup in flight
    Loading,
    /// Chain resolved
    Loaded(EvolutionChain),
    /// Lookup failed, or the species carries no chain reference
    Unavailable,
}

/// A granted evolution lookup for the viewer's entry. Settling it through
/// [`DetailViewer::complete_evolution_load`] consumes it.
#[derive(Debug)]
pub struct EvolutionRequest {
    pub entry_id: u32,
}

/// Tab-switching controller over one entry's detail record.
///
/// The evolution chain is looked up at most once per viewer, on first
/// entry to the evolution tab; re-selecting the tab re-renders the already
/// settled slot.
#[derive(Debug)]
pub struct DetailViewer {
    record: DetailRecord,
    tab: DetailTab,
    evolution: EvolutionSlot,
}

impl DetailViewer {
    pub fn new(record: DetailRecord) -> Self {
        Self {
            record,
            tab: DetailTab::default(),
            evolution: EvolutionSlot::NotLoaded,
        }
    }

    /// Navigate to one entry by id.
    ///
    /// A missing entry surfaces as [`crate::errors::FetchError::NotFound`]
    /// and is terminal for that navigation.
    pub async fn open(api: &impl PokeApi, id: u32) -> FetchResult<Self> {
        let payload = api.entry_by_id(id).await?;
        Ok(Self::new(DetailRecord::from(payload)))
    }

    pub fn record(&self) -> &DetailRecord {
        &self.record
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn evolution(&self) -> &EvolutionSlot {
        &self.evolution
    }

    /// Switch tabs. First entry to the evolution tab grants the one-shot
    /// chain lookup the caller must run.
    pub fn select_tab(&mut self, tab: DetailTab) -> Option<EvolutionRequest> {
        self.tab = tab;
        if tab == DetailTab::Evolution && self.evolution == EvolutionSlot::NotLoaded {
            self.evolution = EvolutionSlot::Loading;
            return Some(EvolutionRequest { entry_id: self.record.id });
        }
        None
    }

    /// Switch tabs by display name (`"about"`, `"base stats"`,
    /// `"evolution"`, `"moves"`). Unknown names are ignored.
    pub fn select_tab_by_name(&mut self, name: &str) -> Option<EvolutionRequest> {
        match name.parse::<DetailTab>() {
            Ok(tab) => self.select_tab(tab),
            Err(_) => None,
        }
    }

    /// Settle the granted chain lookup.
    ///
    /// A resolved chain loads; an absent chain reference or a fetch failure
    /// both degrade to [`EvolutionSlot::Unavailable`], which downstream
    /// rendering treats as the "no evolution data" case.
    pub fn complete_evolution_load(
        &mut self,
        _request: EvolutionRequest,
        result: FetchResult<Option<EvolutionChain>>,
    ) {
        self.evolution = match result {
            Ok(Some(chain)) => EvolutionSlot::Loaded(chain),
            Ok(None) => EvolutionSlot::Unavailable,
            Err(err) => {
                warn!(entry = self.record.id, error = %err, "evolution lookup failed");
                EvolutionSlot::Unavailable
            }
        };
    }

    /// Drive a tab switch end to end, running the chain lookup when one is
    /// granted.
    pub async fn open_tab(&mut self, api: &impl PokeApi, tab: DetailTab) {
        if let Some(request) = self.select_tab(tab) {
            let result = lookup_chain(api, request.entry_id).await;
            self.complete_evolution_load(request, result);
        }
    }
}

/// Display names for the upstream stat identifiers.
pub fn stat_display_name(stat: &str) -> &str {
    match stat {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Att.",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Move names render with their hyphens spaced.
pub fn format_move_name(name: &str) -> String {
    name.replace('-', " ")
}
