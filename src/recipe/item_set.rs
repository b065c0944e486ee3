use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::debug;

use crate::model::{CanonicalItem, ItemClass, SlotKind};

use super::capacity::CapacityTable;

static NEXT_SET_ID: AtomicU64 = AtomicU64::new(1);

/// Why an item was not accepted into a set. These drive the packing loop and
/// are not failures of the scan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("item {0} is already in the set")]
    DuplicateItem(String),

    #[error("item level {level} outside the set's level band")]
    LevelOutOfBand { level: u32 },

    #[error("item class {0} not supported by the set")]
    UnsupportedClass(ItemClass),

    #[error("item class {0} already at capacity")]
    ClassAtCapacity(ItemClass),

    #[error("armour at capacity")]
    ArmourAtCapacity,

    #[error("weapons at capacity")]
    WeaponsAtCapacity,

    #[error("weapon is two-handed, set needs a one-handed weapon")]
    HandednessMismatch,
}

/// One in-progress equipment set
#[derive(Debug, Clone)]
pub struct ItemSet {
    id: u64,
    capacities: Arc<CapacityTable>,
    buckets: BTreeMap<ItemClass, Vec<CanonicalItem>>,
    min_level: u32,
    max_level: Option<u32>,
    armour_count: usize,
    weapon_count: usize,
    pinned: Vec<String>,
}

impl ItemSet {
    /// Create an empty set accepting item levels in `min_level..=max_level`
    /// (`None` leaves the band open at the top)
    pub fn new(capacities: Arc<CapacityTable>, min_level: u32, max_level: Option<u32>) -> Self {
        Self {
            id: NEXT_SET_ID.fetch_add(1, Ordering::Relaxed),
            capacities,
            buckets: BTreeMap::new(),
            min_level,
            max_level,
            armour_count: 0,
            weapon_count: 0,
            pinned: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn armour_count(&self) -> usize {
        self.armour_count
    }

    pub fn weapon_count(&self) -> usize {
        self.weapon_count
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items().any(|item| item.id == id)
    }

    /// Keep `id` in the set: greedy eviction never removes a pinned weapon
    pub fn pin(&mut self, id: &str) {
        if !self.pinned.iter().any(|p| p == id) {
            self.pinned.push(id.to_string());
        }
    }

    /// Offer an item to the set.
    ///
    /// With `weapon_greedy`, a two-handed weapon that does not fit next to the
    /// weapons already present replaces all of them, unless one is pinned.
    pub fn add_item(&mut self, item: &CanonicalItem, weapon_greedy: bool) -> Result<(), AllocationError> {
        if self.contains(&item.id) {
            return Err(AllocationError::DuplicateItem(item.id.clone()));
        }
        let above_max = self.max_level.is_some_and(|max| item.item_level > max);
        if item.item_level < self.min_level || above_max {
            return Err(AllocationError::LevelOutOfBand { level: item.item_level });
        }

        let capacity = self
            .capacities
            .capacity(item.class)
            .ok_or(AllocationError::UnsupportedClass(item.class))?;
        let assigned = self.buckets.get(&item.class).map_or(0, Vec::len);
        if assigned == capacity {
            return Err(AllocationError::ClassAtCapacity(item.class));
        }

        match item.class.slot() {
            SlotKind::Armour => {
                if self.armour_count == self.capacities.armour_capacity() {
                    return Err(AllocationError::ArmourAtCapacity);
                }
                self.armour_count += 1;
            }
            SlotKind::Weapon { two_handed } => {
                let limit = self.capacities.weapon_capacity();
                if self.weapon_count == limit {
                    return Err(AllocationError::WeaponsAtCapacity);
                }
                if two_handed && self.weapon_count + 2 > limit {
                    if !weapon_greedy || self.holds_pinned_weapon() {
                        return Err(AllocationError::HandednessMismatch);
                    }
                    self.evict_weapons();
                }
                self.weapon_count += if two_handed { 2 } else { 1 };
            }
            SlotKind::Other => return Err(AllocationError::UnsupportedClass(item.class)),
        }

        self.buckets.entry(item.class).or_default().push(item.clone());
        Ok(())
    }

    /// True once every armour and weapon slot is taken
    pub fn is_full(&self) -> bool {
        self.armour_count == self.capacities.armour_capacity()
            && self.weapon_count == self.capacities.weapon_capacity()
    }

    /// All assigned items, grouped by class in insertion order
    pub fn items(&self) -> impl Iterator<Item = &CanonicalItem> + '_ {
        self.buckets.values().flatten()
    }

    pub fn into_items(self) -> Vec<CanonicalItem> {
        self.buckets.into_values().flatten().collect()
    }

    fn holds_pinned_weapon(&self) -> bool {
        self.buckets
            .iter()
            .filter(|(class, _)| class.is_weapon())
            .flat_map(|(_, bucket)| bucket)
            .any(|item| self.pinned.contains(&item.id))
    }

    fn evict_weapons(&mut self) {
        let mut evicted = 0;
        for (class, bucket) in self.buckets.iter_mut() {
            if class.is_weapon() {
                evicted += bucket.len();
                bucket.clear();
            }
        }
        self.weapon_count = 0;
        debug!(set = self.id, evicted, "evicted weapons for a two-handed weapon");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rarity;
    use crate::recipe::capacity::{ARMOUR_CAPACITY, WEAPON_CAPACITY};

    fn item(id: &str, class: ItemClass, level: u32) -> CanonicalItem {
        CanonicalItem {
            id: id.to_string(),
            class,
            rarity: Rarity::Rare,
            item_level: level,
            identified: false,
            corrupted: false,
            verified: false,
            sockets: 0,
            links: 0,
            tab_index: 0,
            name: String::new(),
            type_line: String::new(),
            width: 1,
            height: 1,
            x: 0,
            y: 0,
            icon: String::new(),
            league: String::new(),
            inventory_id: String::new(),
            properties: Vec::new(),
        }
    }

    fn new_set() -> ItemSet {
        ItemSet::new(Arc::new(CapacityTable::chaos_recipe()), 60, None)
    }

    fn armour() -> Vec<CanonicalItem> {
        vec![
            item("amulet", ItemClass::Amulet, 65),
            item("ring-1", ItemClass::Ring, 65),
            item("ring-2", ItemClass::Ring, 65),
            item("belt", ItemClass::Belt, 65),
            item("boots", ItemClass::Boots, 65),
            item("gloves", ItemClass::Gloves, 65),
            item("body", ItemClass::BodyArmour, 65),
            item("helmet", ItemClass::Helmet, 65),
        ]
    }

    #[test]
    fn test_full_set_with_two_hander() {
        let mut set = new_set();
        for piece in armour() {
            set.add_item(&piece, false).unwrap();
        }
        assert!(!set.is_full());
        set.add_item(&item("bow", ItemClass::Bow, 70), false).unwrap();
        assert!(set.is_full());
        assert_eq!(set.armour_count(), ARMOUR_CAPACITY);
        assert_eq!(set.weapon_count(), WEAPON_CAPACITY);
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_full_set_with_two_one_handers() {
        let mut set = new_set();
        for piece in armour() {
            set.add_item(&piece, true).unwrap();
        }
        set.add_item(&item("wand", ItemClass::Wand, 70), true).unwrap();
        assert!(!set.is_full());
        set.add_item(&item("shield", ItemClass::Shield, 70), true).unwrap();
        assert!(set.is_full());
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_level_band() {
        let mut set = ItemSet::new(Arc::new(CapacityTable::chaos_recipe()), 60, Some(74));
        assert_eq!(
            set.add_item(&item("low", ItemClass::Helmet, 59), true),
            Err(AllocationError::LevelOutOfBand { level: 59 })
        );
        assert_eq!(
            set.add_item(&item("high", ItemClass::Helmet, 75), true),
            Err(AllocationError::LevelOutOfBand { level: 75 })
        );
        set.add_item(&item("edge-low", ItemClass::Helmet, 60), true).unwrap();
        set.add_item(&item("edge-high", ItemClass::Boots, 74), true).unwrap();
    }

    #[test]
    fn test_unbounded_max_level() {
        let mut set = new_set();
        set.add_item(&item("ilvl86", ItemClass::Helmet, 86), true).unwrap();
    }

    #[test]
    fn test_unsupported_class() {
        let mut set = new_set();
        assert_eq!(
            set.add_item(&item("quiver", ItemClass::Quiver, 70), true),
            Err(AllocationError::UnsupportedClass(ItemClass::Quiver))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_class_at_capacity() {
        let mut set = new_set();
        set.add_item(&item("helmet-1", ItemClass::Helmet, 70), true).unwrap();
        assert_eq!(
            set.add_item(&item("helmet-2", ItemClass::Helmet, 70), true),
            Err(AllocationError::ClassAtCapacity(ItemClass::Helmet))
        );
        assert_eq!(set.armour_count(), 1);
    }

    #[test]
    fn test_armour_at_capacity() {
        let capacities = CapacityTable::new(
            2,
            2,
            [(ItemClass::Helmet, 1), (ItemClass::Boots, 1), (ItemClass::Gloves, 1)],
        )
        .unwrap();
        let mut set = ItemSet::new(Arc::new(capacities), 0, None);
        set.add_item(&item("helmet", ItemClass::Helmet, 70), true).unwrap();
        set.add_item(&item("boots", ItemClass::Boots, 70), true).unwrap();
        assert_eq!(
            set.add_item(&item("gloves", ItemClass::Gloves, 70), true),
            Err(AllocationError::ArmourAtCapacity)
        );
    }

    #[test]
    fn test_weapons_at_capacity() {
        let mut set = new_set();
        set.add_item(&item("staff", ItemClass::Staff, 70), true).unwrap();
        assert_eq!(
            set.add_item(&item("wand", ItemClass::Wand, 70), true),
            Err(AllocationError::WeaponsAtCapacity)
        );
        assert_eq!(
            set.add_item(&item("bow", ItemClass::Bow, 70), true),
            Err(AllocationError::WeaponsAtCapacity)
        );
        assert_eq!(set.weapon_count(), 2);
    }

    #[test]
    fn test_greedy_two_hander_evicts_one_hander() {
        let mut set = new_set();
        set.add_item(&item("ring", ItemClass::Ring, 70), true).unwrap();
        set.add_item(&item("dagger", ItemClass::Dagger, 70), true).unwrap();
        assert_eq!(set.weapon_count(), 1);

        set.add_item(&item("axe", ItemClass::TwoHandAxe, 70), true).unwrap();
        assert_eq!(set.weapon_count(), 2);
        assert!(!set.contains("dagger"));
        assert!(set.contains("axe"));
        assert!(set.contains("ring"));
        assert_eq!(set.armour_count(), 1);
        let weapons: Vec<_> = set.items().filter(|i| i.class.is_weapon()).collect();
        assert_eq!(weapons.len(), 1);
    }

    #[test]
    fn test_non_greedy_two_hander_rejected() {
        let mut set = new_set();
        set.add_item(&item("dagger", ItemClass::Dagger, 70), false).unwrap();
        assert_eq!(
            set.add_item(&item("axe", ItemClass::TwoHandAxe, 70), false),
            Err(AllocationError::HandednessMismatch)
        );
        assert_eq!(set.weapon_count(), 1);
        assert!(set.contains("dagger"));
    }

    #[test]
    fn test_pinned_weapon_survives_greedy_two_hander() {
        let mut set = new_set();
        let dagger = item("dagger", ItemClass::Dagger, 65);
        set.add_item(&dagger, true).unwrap();
        set.pin(&dagger.id);

        assert_eq!(
            set.add_item(&item("bow", ItemClass::Bow, 80), true),
            Err(AllocationError::HandednessMismatch)
        );
        assert!(set.contains("dagger"));
        assert_eq!(set.weapon_count(), 1);

        set.add_item(&item("wand", ItemClass::Wand, 80), true).unwrap();
        assert_eq!(set.weapon_count(), 2);
    }

    #[test]
    fn test_pinned_armour_does_not_block_eviction() {
        let mut set = new_set();
        set.add_item(&item("ring", ItemClass::Ring, 65), true).unwrap();
        set.pin("ring");
        set.add_item(&item("dagger", ItemClass::Dagger, 80), true).unwrap();
        set.add_item(&item("bow", ItemClass::Bow, 80), true).unwrap();
        assert!(!set.contains("dagger"));
        assert!(set.contains("ring"));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut set = new_set();
        let ring = item("ring", ItemClass::Ring, 70);
        set.add_item(&ring, true).unwrap();
        assert_eq!(
            set.add_item(&ring, true),
            Err(AllocationError::DuplicateItem("ring".to_string()))
        );
        assert_eq!(set.armour_count(), 1);
    }

    #[test]
    fn test_counts_never_exceed_capacity() {
        let mut set = new_set();
        let classes = ItemClass::ALL;
        for round in 0..4 {
            for (i, class) in classes.iter().enumerate() {
                let _ = set.add_item(&item(&format!("{round}-{i}"), *class, 70), round % 2 == 0);
                assert!(set.armour_count() <= ARMOUR_CAPACITY);
                assert!(set.weapon_count() <= WEAPON_CAPACITY);
                assert_eq!(
                    set.is_full(),
                    set.armour_count() == ARMOUR_CAPACITY && set.weapon_count() == WEAPON_CAPACITY
                );
            }
        }
        assert!(set.is_full());
    }

    #[test]
    fn test_set_ids_are_unique() {
        assert_ne!(new_set().id(), new_set().id());
    }
}
