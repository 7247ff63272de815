//! Upstream REST access: the [`PokeApi`] trait over the endpoints the
//! browser consumes, the reqwest-backed production client, and the shared
//! resource-URL identifier contract.

use crate::errors::{FetchError, FetchResult};
use schema::{ChainResponse, EntryDetail, ListingResponse, SpeciesRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Upstream REST service base URL.
pub const POKE_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Number of roster entries requested per listing page.
pub const ROSTER_PAGE_SIZE: u32 = 60;

/// User-Agent header sent with every upstream request.
const USER_AGENT: &str = "pokedex-browser";

/// First listing page URL with the fixed page-size parameter.
pub fn initial_roster_url() -> String {
    format!("{POKE_API_BASE}/pokemon?limit={ROSTER_PAGE_SIZE}")
}

/// Extract the numeric identifier from a canonical resource URL.
///
/// Upstream resource URLs end in `.../<id>/`, so the identifier is the
/// second-to-last `/`-separated segment. Any other shape violates the
/// upstream URL contract and surfaces as [`FetchError::Malformed`].
pub fn parse_resource_id(url: &str) -> FetchResult<u32> {
    let segment = url
        .split('/')
        .rev()
        .nth(1)
        .ok_or_else(|| FetchError::Malformed(format!("resource url too short: {url}")))?;
    segment
        .parse::<u32>()
        .map_err(|_| FetchError::Malformed(format!("non-numeric id segment in resource url: {url}")))
}

/// Access to the upstream creature-database REST service.
///
/// [`PokeApiClient`] is the production implementation; tests substitute
/// scripted sources.
#[allow(async_fn_in_trait)]
pub trait PokeApi {
    /// One page of the roster listing endpoint.
    async fn roster_page(&self, url: &str) -> FetchResult<ListingResponse>;

    /// Full detail payload for the entry behind a listing URL.
    async fn entry_detail(&self, url: &str) -> FetchResult<EntryDetail>;

    /// Full detail payload for an entry addressed directly by id.
    async fn entry_by_id(&self, id: u32) -> FetchResult<EntryDetail>;

    /// Species record for an entry id (carries the evolution-chain link).
    async fn species(&self, id: u32) -> FetchResult<SpeciesRecord>;

    /// The nested evolution tree behind a chain URL.
    async fn evolution_chain(&self, url: &str) -> FetchResult<ChainResponse>;
}

/// Reqwest-backed client for the public upstream API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base: String,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base(POKE_API_BASE)
    }

    /// Client against a non-default base URL.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base: base.into() }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Malformed(err.to_string()))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApi for PokeApiClient {
    async fn roster_page(&self, url: &str) -> FetchResult<ListingResponse> {
        self.get_json(url).await
    }

    async fn entry_detail(&self, url: &str) -> FetchResult<EntryDetail> {
        self.get_json(url).await
    }

    async fn entry_by_id(&self, id: u32) -> FetchResult<EntryDetail> {
        self.get_json(&format!("{}/pokemon/{id}", self.base)).await
    }

    async fn species(&self, id: u32) -> FetchResult<SpeciesRecord> {
        self.get_json(&format!("{}/pokemon-species/{id}/", self.base)).await
    }

    async fn evolution_chain(&self, url: &str) -> FetchResult<ChainResponse> {
        self.get_json(url).await
    }
}
