use crate::api::EntryDetail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sprite repository serving official artwork addressed by entry id.
pub const OFFICIAL_ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Official artwork URL for an entry that only has a numeric id (roster
/// cards, evolution stages).
pub fn official_artwork_url(id: u32) -> String {
    format!("{OFFICIAL_ARTWORK_BASE}/{id}.png")
}

/// One named base-stat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

/// Flat projection of an entry detail payload for the tabbed detail view.
///
/// `height` and `weight` keep the upstream units (decimetres and
/// hectograms); the unit helpers convert for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<StatValue>,
    pub move_names: Vec<String>,
    pub artwork_url: Option<String>,
}

impl From<EntryDetail> for DetailRecord {
    fn from(payload: EntryDetail) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            types: payload.types.into_iter().map(|slot| slot.type_.name).collect(),
            abilities: payload
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|slot| StatValue { name: slot.stat.name, value: slot.base_stat })
                .collect(),
            move_names: payload.moves.into_iter().map(|slot| slot.move_.name).collect(),
            artwork_url: payload.sprites.other.official_artwork.front_default,
        }
    }
}

impl DetailRecord {
    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

/// The tabs of the detail view. Tab selection arrives from the UI as a
/// display name, so the enum round-trips through its labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum DetailTab {
    #[default]
    About,
    #[strum(serialize = "base stats")]
    BaseStats,
    Evolution,
    Moves,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AbilitySlot, MoveSlot, NamedResource, StatSlot, TypeSlot};
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/{name}/"),
        }
    }

    fn sample_payload() -> EntryDetail {
        EntryDetail {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            types: vec![TypeSlot { type_: named("electric") }],
            abilities: vec![AbilitySlot { ability: named("static") }],
            stats: vec![
                StatSlot { base_stat: 35, stat: named("hp") },
                StatSlot { base_stat: 90, stat: named("speed") },
            ],
            moves: vec![
                MoveSlot { move_: named("thunder-shock") },
                MoveSlot { move_: named("quick-attack") },
            ],
            sprites: Default::default(),
        }
    }

    #[test]
    fn record_projects_every_tab_field() {
        let record = DetailRecord::from(sample_payload());

        assert_eq!(record.id, 25);
        assert_eq!(record.types, vec!["electric".to_string()]);
        assert_eq!(record.abilities, vec!["static".to_string()]);
        assert_eq!(record.stats.len(), 2);
        assert_eq!(record.stats[1], StatValue { name: "speed".to_string(), value: 90 });
        assert_eq!(record.move_names.len(), 2);
        assert_eq!(record.artwork_url, None);
    }

    #[test]
    fn unit_helpers_convert_to_display_units() {
        let record = DetailRecord::from(sample_payload());
        assert_eq!(record.height_meters(), 0.4);
        assert_eq!(record.weight_kg(), 6.0);
    }

    #[test]
    fn tabs_round_trip_through_display_names() {
        assert_eq!("base stats".parse::<DetailTab>().unwrap(), DetailTab::BaseStats);
        assert_eq!("about".parse::<DetailTab>().unwrap(), DetailTab::About);
        assert_eq!(DetailTab::Evolution.to_string(), "evolution");
        assert_eq!(DetailTab::BaseStats.to_string(), "base stats");
        assert!("stats".parse::<DetailTab>().is_err());
    }

    #[test]
    fn artwork_url_addresses_by_id() {
        assert_eq!(
            official_artwork_url(25),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
        );
    }
}
