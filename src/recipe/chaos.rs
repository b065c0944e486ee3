//! Unidentified chaos recipe
//!
//! A full set of unidentified rare items, at least one of them between item
//! level 60 and 74, sells for 2 Chaos Orbs.

use std::sync::Arc;
use tracing::debug;

use crate::model::{CanonicalItem, Rarity, RecipeResult, Reward};
use crate::repository::{Field, ItemFilter};

use super::capacity::CapacityTable;
use super::item_set::ItemSet;
use super::ledger::ItemLedger;
use super::{Eligibility, Recipe, ScanError};

pub const CHAOS_RECIPE_MIN_ITEM_LEVEL: u32 = 60;
pub const CHAOS_RECIPE_MAX_ITEM_LEVEL: u32 = 74;

const REWARD_VALUE: u32 = 2;
const REWARD_CURRENCY: &str = "Chaos Orb";

pub struct UnidChaosRecipe {
    capacities: Arc<CapacityTable>,
}

impl UnidChaosRecipe {
    pub fn new() -> Self {
        Self::with_capacities(CapacityTable::chaos_recipe())
    }

    pub fn with_capacities(capacities: CapacityTable) -> Self {
        Self { capacities: Arc::new(capacities) }
    }

    /// Start a new set: the target first when given, then the first unclaimed
    /// strict item that fits next to it. Both stay pinned for the whole set.
    fn seed(
        &self,
        strict: &[CanonicalItem],
        ledger: &ItemLedger,
        target: Option<&CanonicalItem>,
    ) -> Result<Option<ItemSet>, ScanError> {
        let mut base = ItemSet::new(self.capacities.clone(), CHAOS_RECIPE_MIN_ITEM_LEVEL, None);
        if let Some(target) = target {
            base.add_item(target, true).map_err(|reason| ScanError::InvalidTargetItem {
                id: target.id.clone(),
                reason,
            })?;
            base.pin(&target.id);
            if target.item_level <= CHAOS_RECIPE_MAX_ITEM_LEVEL {
                return Ok(Some(base));
            }
        }

        Ok(strict
            .iter()
            .filter(|anchor| !ledger.contains(&anchor.id) && !base.contains(&anchor.id))
            .find_map(|anchor| {
                let mut set = base.clone();
                match set.add_item(anchor, true) {
                    Ok(()) => {
                        set.pin(&anchor.id);
                        Some(set)
                    }
                    Err(err) => {
                        debug!(item = %anchor.id, class = %anchor.class, error = %err, "anchor rejected");
                        None
                    }
                }
            }))
    }
}

impl Default for UnidChaosRecipe {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for UnidChaosRecipe {
    fn name(&self) -> &'static str {
        "unid_chaos"
    }

    fn eligibility(&self, tab_index: Option<u32>) -> Eligibility {
        let mut broad = ItemFilter::eq(Field::Rarity, Rarity::Rare)
            .and(ItemFilter::eq(Field::Identified, false))
            .and(ItemFilter::ge(Field::ItemLevel, CHAOS_RECIPE_MIN_ITEM_LEVEL));
        if let Some(tab) = tab_index {
            broad = ItemFilter::eq(Field::TabIndex, tab).and(broad);
        }
        let strict = broad
            .clone()
            .and(ItemFilter::le(Field::ItemLevel, CHAOS_RECIPE_MAX_ITEM_LEVEL));
        Eligibility { strict, broad }
    }

    fn pack(
        &self,
        strict: &[CanonicalItem],
        broad: Vec<CanonicalItem>,
        target: Option<&CanonicalItem>,
        find_all: bool,
    ) -> Result<Vec<RecipeResult>, ScanError> {
        let mut ledger = ItemLedger::new();
        let mut results = Vec::new();
        let mut pool = broad;

        while pool.len() >= 2 {
            if results.len() == strict.len() {
                break;
            }
            if target.is_some_and(|t| ledger.contains(&t.id)) {
                break;
            }
            let Some(mut set) = self.seed(strict, &ledger, target)? else {
                break;
            };

            for item in &pool {
                if set.is_full() {
                    break;
                }
                if ledger.contains(&item.id) || set.contains(&item.id) {
                    continue;
                }
                if let Err(err) = set.add_item(item, true) {
                    debug!(item = %item.id, class = %item.class, error = %err, "item rejected");
                }
            }

            if !set.is_full() {
                debug!(set = set.id(), items = set.len(), "no complete set reachable");
                break;
            }

            for item in set.items() {
                ledger.claim(&item.id);
            }
            pool.retain(|item| !ledger.contains(&item.id));

            debug!(set = set.id(), items = set.len(), remaining = pool.len(), "set complete");
            results.push(RecipeResult {
                items: set.into_items(),
                reward: Reward::currency(REWARD_VALUE, REWARD_CURRENCY),
            });

            if !find_all {
                break;
            }
        }

        debug!(sets = results.len(), claimed = ledger.len(), "packing finished");
        Ok(results)
    }
}
