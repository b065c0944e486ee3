use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::model::{ItemClass, SlotKind};

/// Armour slots in a full set: amulet, two rings, belt, boots, gloves, body, helmet
pub const ARMOUR_CAPACITY: usize = 8;
/// Weapon slots in a full set: one two-hander or two one-handers
pub const WEAPON_CAPACITY: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("{0} has zero capacity")]
    ZeroCapacity(ItemClass),

    #[error("{0} cannot be part of a recipe set")]
    NotASlot(ItemClass),

    #[error("{class} capacity {capacity} needs {needed} slots, only {limit} available")]
    ExceedsSlots {
        class: ItemClass,
        capacity: usize,
        needed: usize,
        limit: usize,
    },
}

/// Per-class capacities of an item set, plus the armour and weapon slot totals
#[derive(Debug, Clone)]
pub struct CapacityTable {
    per_class: FxHashMap<ItemClass, usize>,
    armour: usize,
    weapon: usize,
}

impl CapacityTable {
    /// Build and validate a table
    pub fn new(
        armour: usize,
        weapon: usize,
        per_class: impl IntoIterator<Item = (ItemClass, usize)>,
    ) -> Result<Self, CapacityError> {
        let table = Self { per_class: per_class.into_iter().collect(), armour, weapon };
        table.validate()?;
        Ok(table)
    }

    /// Capacities used by the vendor chaos recipe
    pub fn chaos_recipe() -> Self {
        use ItemClass::*;

        let per_class = [
            (Amulet, 1),
            (Ring, 2),
            (Belt, 1),
            (Boots, 1),
            (Gloves, 1),
            (BodyArmour, 1),
            (Helmet, 1),
            (Bow, 1),
            (Claw, 2),
            (Dagger, 2),
            (OneHandAxe, 2),
            (OneHandMace, 2),
            (OneHandSword, 2),
            (Sceptre, 2),
            (Shield, 1),
            (Staff, 1),
            (TwoHandAxe, 1),
            (TwoHandMace, 1),
            (TwoHandSword, 1),
            (Wand, 2),
            (Warstaff, 1),
        ];
        Self {
            per_class: per_class.into_iter().collect(),
            armour: ARMOUR_CAPACITY,
            weapon: WEAPON_CAPACITY,
        }
    }

    pub fn capacity(&self, class: ItemClass) -> Option<usize> {
        self.per_class.get(&class).copied()
    }

    pub fn armour_capacity(&self) -> usize {
        self.armour
    }

    pub fn weapon_capacity(&self) -> usize {
        self.weapon
    }

    fn validate(&self) -> Result<(), CapacityError> {
        for (&class, &capacity) in &self.per_class {
            if capacity == 0 {
                return Err(CapacityError::ZeroCapacity(class));
            }
            let (cost, limit) = match class.slot() {
                SlotKind::Armour => (1, self.armour),
                SlotKind::Weapon { two_handed: false } => (1, self.weapon),
                SlotKind::Weapon { two_handed: true } => (2, self.weapon),
                SlotKind::Other => return Err(CapacityError::NotASlot(class)),
            };
            if capacity * cost > limit {
                return Err(CapacityError::ExceedsSlots {
                    class,
                    capacity,
                    needed: capacity * cost,
                    limit,
                });
            }
        }
        Ok(())
    }
}
