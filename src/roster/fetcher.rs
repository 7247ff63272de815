//! Roster page fetching: one listing call plus a concurrent detail call per
//! entry to resolve its type tags.

use crate::api::{parse_resource_id, PokeApi};
use crate::errors::FetchResult;
use futures::future::join_all;
use schema::{NamedResource, RosterEntry, RosterPage};
use tracing::{debug, warn};

/// Fetch one roster page.
///
/// All per-entry detail calls are issued concurrently and the page suspends
/// until every one has settled; results are reassembled in listing order,
/// not completion order. The pagination cursor and total count pass through
/// verbatim. Repeating the call for the same URL has no effect beyond the
/// network I/O itself.
pub async fn fetch_page(api: &impl PokeApi, url: &str) -> FetchResult<RosterPage> {
    let listing = api.roster_page(url).await?;

    let enriched = join_all(listing.results.iter().map(|summary| enrich(api, summary))).await;

    let mut entries = Vec::with_capacity(enriched.len());
    for entry in enriched {
        entries.push(entry?);
    }

    debug!(
        entries = entries.len(),
        has_next = listing.next.is_some(),
        "roster page settled"
    );

    Ok(RosterPage {
        entries,
        next_url: listing.next,
        total: listing.count,
    })
}

/// Resolve one listing summary into a roster entry.
///
/// A failed detail call is isolated to its entry: the entry survives with
/// an empty type list instead of failing the page.
async fn enrich(api: &impl PokeApi, summary: &NamedResource) -> FetchResult<RosterEntry> {
    let id = parse_resource_id(&summary.url)?;

    let types = match api.entry_detail(&summary.url).await {
        Ok(detail) => detail.type_names(),
        Err(err) => {
            warn!(entry = %summary.name, error = %err, "detail fetch failed, leaving types empty");
            Vec::new()
        }
    };

    Ok(RosterEntry {
        id,
        name: summary.name.clone(),
        url: summary.url.clone(),
        types,
    })
}
