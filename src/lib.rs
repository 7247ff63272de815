//! Pokedex Browser Core
//!
//! The data core of a Pokédex catalog browser over the public PokeAPI:
//! paginated roster browsing with infinite-scroll semantics, tabbed entry
//! detail, and linearized evolution chains, exposed as plain data snapshots
//! to whatever presentation layer sits on top.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod api;
pub mod detail;
pub mod errors;
pub mod evolution;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokedex-browser`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export the wire payload shapes and the render-facing records.
pub use schema::{
    official_artwork_url,
    ChainLink,
    ChainResponse,
    DetailRecord,
    // Render-facing records
    DetailTab,
    EntryDetail,
    EvolutionChain,
    EvolutionDetail,
    EvolutionStage,
    // Upstream wire shapes
    ListingResponse,
    NamedResource,
    ResourceLink,
    RosterEntry,
    RosterPage,
    SpeciesRecord,
    StatValue,
    BASE_TRIGGER,
};

// --- From this crate's modules (`src/`) ---

// Upstream access.
pub use api::{
    initial_roster_url, parse_resource_id, PokeApi, PokeApiClient, POKE_API_BASE, ROSTER_PAGE_SIZE,
};

// Roster fetching and the incremental-load controller.
pub use roster::browser::{
    BrowseEvent, BrowseState, LoadKind, LoadOutcome, LoadRequest, RosterBrowser, RosterView,
};
pub use roster::fetcher::fetch_page;

// Evolution chain flattening and its rendering rule.
pub use evolution::display::{chain_display, stage_label, ChainDisplay};
pub use evolution::flatten::{flatten, lookup_chain};

// The tabbed detail viewer.
pub use detail::viewer::{
    format_move_name, stat_display_name, DetailViewer, EvolutionRequest, EvolutionSlot,
};

// Crate-specific error and result types.
pub use errors::{FetchError, FetchResult};
