//! Reduction of the upstream evolution tree to a linear display sequence.

use crate::api::{parse_resource_id, PokeApi};
use crate::errors::FetchResult;
use schema::{ChainLink, EvolutionChain, EvolutionStage, BASE_TRIGGER};

/// Flatten a nested evolution tree into its linear display sequence.
///
/// Iterative descent from the root, always advancing to the **first**
/// `evolves_to` child; sibling branches at any branching point are
/// permanently dropped. Each stage takes its trigger, level requirement
/// and item from the **first** `evolution_details` element when present.
/// The root stage's trigger is always `"base"`, whatever the upstream node
/// claims.
pub fn flatten(root: &ChainLink) -> FetchResult<EvolutionChain> {
    let mut stages = Vec::new();
    let mut current = Some(root);

    while let Some(node) = current {
        let id = parse_resource_id(&node.species.url)?;
        let details = node.evolution_details.first();

        let trigger = if stages.is_empty() {
            BASE_TRIGGER.to_string()
        } else {
            details.map_or_else(|| BASE_TRIGGER.to_string(), |d| d.trigger.name.clone())
        };

        stages.push(EvolutionStage {
            id,
            name: node.species.name.clone(),
            trigger,
            min_level: details.and_then(|d| d.min_level),
            item: details.and_then(|d| d.item.clone()),
        });

        current = node.evolves_to.first();
    }

    Ok(EvolutionChain { stages })
}

/// Look up and flatten the evolution chain for one entry.
///
/// `Ok(None)` when the species record carries no chain reference; the
/// caller renders its "no evolution data" state from that. Fetch failures
/// propagate for the caller's operation boundary to absorb.
pub async fn lookup_chain(api: &impl PokeApi, entry_id: u32) -> FetchResult<Option<EvolutionChain>> {
    let species = api.species(entry_id).await?;
    let Some(reference) = species.evolution_chain else {
        return Ok(None);
    };
    let response = api.evolution_chain(&reference.url).await?;
    flatten(&response.chain).map(Some)
}
