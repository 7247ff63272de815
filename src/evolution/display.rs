//! Rendering rule for a flattened evolution chain: the no-evolution
//! decision and the per-stage trigger labels.

use schema::{EvolutionChain, EvolutionStage};

/// What the evolution tab should render for a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainDisplay<'a> {
    /// Zero or one stage: show the "no evolution" message
    NoEvolution,
    /// Multiple stages: render all of them in order
    Stages(&'a [EvolutionStage]),
}

/// Decide the rendering path for a chain.
pub fn chain_display(chain: &EvolutionChain) -> ChainDisplay<'_> {
    if chain.stages.len() <= 1 {
        ChainDisplay::NoEvolution
    } else {
        ChainDisplay::Stages(&chain.stages)
    }
}

/// Human-readable trigger label for the stage at `index` in its chain.
///
/// Precedence: base form, explicit level requirement, explicit item
/// requirement, the trade and use-item literals, then a generic fallback.
pub fn stage_label(stage: &EvolutionStage, index: usize) -> String {
    if index == 0 {
        return "Base Form".to_string();
    }
    if let Some(level) = stage.min_level {
        return format!("Level {level}");
    }
    if let Some(item) = &stage.item {
        return format!("Use {}", item.name.replace('-', " "));
    }
    match stage.trigger.as_str() {
        "trade" => "Trade".to_string(),
        "use-item" => "Use Item".to_string(),
        _ => "Evolves".to_string(),
    }
}
