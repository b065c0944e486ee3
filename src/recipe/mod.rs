//! Vendor recipe scanning
//!
//! # Architecture
//!
//! - **capacity**: per-class slot capacities of a set
//! - **item_set**: one set being packed; enforces capacities and level band
//! - **ledger**: items already claimed by completed sets in this scan
//! - **chaos**: the unidentified chaos recipe
//! - **registry**: name to recipe lookup
//!
//! A [`Recipe`] describes which items are eligible and packs fixed, ordered
//! pools into complete sets. [`RecipeScanner`] fetches the pools from an
//! [`ItemIndex`] and hands them to the recipe.

mod capacity;
mod chaos;
mod item_set;
mod ledger;
mod registry;

pub use capacity::{ARMOUR_CAPACITY, CapacityError, CapacityTable, WEAPON_CAPACITY};
pub use chaos::{CHAOS_RECIPE_MAX_ITEM_LEVEL, CHAOS_RECIPE_MIN_ITEM_LEVEL, UnidChaosRecipe};
pub use item_set::{AllocationError, ItemSet};
pub use ledger::ItemLedger;
pub use registry::{RecipeFactory, RecipeRegistry, RegistryError};

use thiserror::Error;
use tracing::info;

use crate::model::{CanonicalItem, RecipeResult};
use crate::repository::{ItemFilter, ItemIndex};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid target item {id}: {reason}")]
    InvalidTargetItem { id: String, reason: AllocationError },

    #[error(transparent)]
    Index(#[from] anyhow::Error),
}

/// Index filters selecting the items a recipe may use
#[derive(Debug, Clone)]
pub struct Eligibility {
    /// Items that may seed a set
    pub strict: ItemFilter,
    /// Items that may fill a set
    pub broad: ItemFilter,
}

pub trait Recipe: Send + Sync {
    fn name(&self) -> &'static str;

    /// Filters for the strict and broad pools, optionally limited to one tab
    fn eligibility(&self, tab_index: Option<u32>) -> Eligibility;

    /// Pack ordered pools into disjoint complete sets
    fn pack(
        &self,
        strict: &[CanonicalItem],
        broad: Vec<CanonicalItem>,
        target: Option<&CanonicalItem>,
        find_all: bool,
    ) -> Result<Vec<RecipeResult>, ScanError>;
}

/// Runs recipes against an item index
pub struct RecipeScanner<'a, I: ItemIndex> {
    index: &'a I,
}

impl<'a, I: ItemIndex> RecipeScanner<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self { index }
    }

    /// Scan the index for complete sets of `recipe`.
    ///
    /// `target` must fit in the first set or the scan fails. With `find_all`
    /// unset, stops after the first set.
    pub async fn scan_index(
        &self,
        recipe: &dyn Recipe,
        target: Option<&CanonicalItem>,
        tab_index: Option<u32>,
        find_all: bool,
    ) -> Result<Vec<RecipeResult>, ScanError> {
        let pools = recipe.eligibility(tab_index);
        let strict = self.index.query(&pools.strict, None).await?;
        let broad = self.index.query(&pools.broad, None).await?;

        let results = recipe.pack(&strict, broad, target, find_all)?;
        info!(
            recipe = recipe.name(),
            anchors = strict.len(),
            results = results.len(),
            "completed recipe scan"
        );
        Ok(results)
    }
}
