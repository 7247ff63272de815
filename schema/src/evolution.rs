use crate::api::NamedResource;
use serde::{Deserialize, Serialize};

/// Trigger assigned to the root stage of every chain. The root never
/// evolved from anything, whatever the upstream node claims.
pub const BASE_TRIGGER: &str = "base";

/// One stage of a linearized evolution chain.
///
/// `trigger` is an open set of upstream trigger names (`"level-up"`,
/// `"trade"`, `"use-item"`, ...); stage 0 always carries [`BASE_TRIGGER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub trigger: String,
    pub min_level: Option<u16>,
    pub item: Option<NamedResource>,
}

impl EvolutionStage {
    /// Whether this stage is the entry currently on display.
    pub fn is_current(&self, displayed_id: u32) -> bool {
        self.id == displayed_id
    }
}

/// A linear evolution sequence, root-first.
///
/// Produced by a single root-to-one-leaf walk of the upstream tree;
/// sibling branches are not represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub stages: Vec<EvolutionStage>,
}

impl EvolutionChain {
    /// A chain of zero or one stage has nothing to evolve into.
    pub fn has_evolutions(&self) -> bool {
        self.stages.len() > 1
    }
}
