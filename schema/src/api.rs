use serde::{Deserialize, Serialize};

/// A named reference to another upstream resource.
///
/// The upstream API uses this shape everywhere it links resources together:
/// listing results, type/ability/move slots, species links inside an
/// evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare link to another upstream resource (no name attached).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

/// One page of the roster listing endpoint.
///
/// `next` is the upstream pagination cursor; its absence is the sole
/// end-of-roster signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// One type slot of an entry detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// One ability slot of an entry detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One base-stat entry of an entry detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One learnable-move slot of an entry detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

/// Full detail payload for one entry, reduced to the fields the browser
/// actually consumes. Unknown upstream fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl EntryDetail {
    /// Type tag names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.type_.name.clone()).collect()
    }
}

/// Species record, reduced to the evolution-chain reference.
///
/// A record without the reference is valid upstream data and means no
/// evolution information is available for that species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub evolution_chain: Option<ResourceLink>,
}

/// Envelope of the evolution-chain endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainResponse {
    pub chain: ChainLink,
}

/// One node of the nested evolution tree.
///
/// `evolves_to` makes the shape recursive with variable branching; the
/// flattener walks it first-child-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Conditions attached to one evolution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    pub min_level: Option<u16>,
    pub item: Option<NamedResource>,
}
