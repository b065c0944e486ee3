use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::base_types::BASE_TYPES;

/// Equipment class of an item, as named by the game client
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ItemClass {
    Amulet,
    Belt,
    Boots,
    Bow,
    #[serde(rename = "Body Armour")]
    BodyArmour,
    Claw,
    Dagger,
    Gloves,
    Helmet,
    #[serde(rename = "One Hand Axe")]
    OneHandAxe,
    #[serde(rename = "One Hand Mace")]
    OneHandMace,
    #[serde(rename = "One Hand Sword")]
    OneHandSword,
    Quiver,
    Ring,
    Sceptre,
    Shield,
    Staff,
    #[serde(rename = "Two Hand Axe")]
    TwoHandAxe,
    #[serde(rename = "Two Hand Mace")]
    TwoHandMace,
    #[serde(rename = "Two Hand Sword")]
    TwoHandSword,
    Wand,
    Warstaff,
}

/// Which recipe slot group an item class occupies
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SlotKind {
    Armour,
    Weapon { two_handed: bool },
    Other,
}

static BASE_TYPE_LOOKUP: LazyLock<FxHashMap<&'static str, ItemClass>> = LazyLock::new(|| {
    BASE_TYPES
        .iter()
        .flat_map(|(class, names)| names.iter().map(move |name| (*name, *class)))
        .collect()
});

impl ItemClass {
    pub const ALL: [ItemClass; 22] = [
        ItemClass::Amulet,
        ItemClass::Belt,
        ItemClass::Boots,
        ItemClass::Bow,
        ItemClass::BodyArmour,
        ItemClass::Claw,
        ItemClass::Dagger,
        ItemClass::Gloves,
        ItemClass::Helmet,
        ItemClass::OneHandAxe,
        ItemClass::OneHandMace,
        ItemClass::OneHandSword,
        ItemClass::Quiver,
        ItemClass::Ring,
        ItemClass::Sceptre,
        ItemClass::Shield,
        ItemClass::Staff,
        ItemClass::TwoHandAxe,
        ItemClass::TwoHandMace,
        ItemClass::TwoHandSword,
        ItemClass::Wand,
        ItemClass::Warstaff,
    ];

    /// Resolve a base type name (already stripped of quality prefixes)
    pub fn from_base_type(base_type: &str) -> Option<ItemClass> {
        BASE_TYPE_LOOKUP.get(base_type).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemClass::Amulet => "Amulet",
            ItemClass::Belt => "Belt",
            ItemClass::Boots => "Boots",
            ItemClass::Bow => "Bow",
            ItemClass::BodyArmour => "Body Armour",
            ItemClass::Claw => "Claw",
            ItemClass::Dagger => "Dagger",
            ItemClass::Gloves => "Gloves",
            ItemClass::Helmet => "Helmet",
            ItemClass::OneHandAxe => "One Hand Axe",
            ItemClass::OneHandMace => "One Hand Mace",
            ItemClass::OneHandSword => "One Hand Sword",
            ItemClass::Quiver => "Quiver",
            ItemClass::Ring => "Ring",
            ItemClass::Sceptre => "Sceptre",
            ItemClass::Shield => "Shield",
            ItemClass::Staff => "Staff",
            ItemClass::TwoHandAxe => "Two Hand Axe",
            ItemClass::TwoHandMace => "Two Hand Mace",
            ItemClass::TwoHandSword => "Two Hand Sword",
            ItemClass::Wand => "Wand",
            ItemClass::Warstaff => "Warstaff",
        }
    }

    /// Parse a class from its display name
    pub fn from_name(name: &str) -> Option<ItemClass> {
        Self::ALL.into_iter().find(|class| class.name().eq_ignore_ascii_case(name))
    }

    pub fn slot(self) -> SlotKind {
        match self {
            ItemClass::Amulet
            | ItemClass::Belt
            | ItemClass::Boots
            | ItemClass::BodyArmour
            | ItemClass::Gloves
            | ItemClass::Helmet
            | ItemClass::Ring => SlotKind::Armour,
            ItemClass::Claw
            | ItemClass::Dagger
            | ItemClass::OneHandAxe
            | ItemClass::OneHandMace
            | ItemClass::OneHandSword
            | ItemClass::Sceptre
            | ItemClass::Shield
            | ItemClass::Wand => SlotKind::Weapon { two_handed: false },
            ItemClass::Bow
            | ItemClass::Staff
            | ItemClass::TwoHandAxe
            | ItemClass::TwoHandMace
            | ItemClass::TwoHandSword
            | ItemClass::Warstaff => SlotKind::Weapon { two_handed: true },
            ItemClass::Quiver => SlotKind::Other,
        }
    }

    #[inline]
    pub fn is_weapon(self) -> bool {
        matches!(self.slot(), SlotKind::Weapon { .. })
    }

    #[inline]
    pub fn is_two_handed(self) -> bool {
        matches!(self.slot(), SlotKind::Weapon { two_handed: true })
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_type_lookup() {
        assert_eq!(ItemClass::from_base_type("Vaal Regalia"), Some(ItemClass::BodyArmour));
        assert_eq!(ItemClass::from_base_type("Two-Stone Ring"), Some(ItemClass::Ring));
        assert_eq!(ItemClass::from_base_type("Imbued Wand"), Some(ItemClass::Wand));
        assert_eq!(ItemClass::from_base_type("Chaos Orb"), None);
    }

    #[test]
    fn test_every_class_has_base_types() {
        for class in ItemClass::ALL {
            assert!(
                BASE_TYPES.iter().any(|(c, names)| *c == class && !names.is_empty()),
                "no base types for {}",
                class
            );
        }
    }

    #[test]
    fn test_base_type_names_are_unique() {
        let total: usize = BASE_TYPES.iter().map(|(_, names)| names.len()).sum();
        assert_eq!(BASE_TYPE_LOOKUP.len(), total);
    }

    #[test]
    fn test_slot_kinds() {
        assert_eq!(ItemClass::Helmet.slot(), SlotKind::Armour);
        assert_eq!(ItemClass::Ring.slot(), SlotKind::Armour);
        assert_eq!(ItemClass::Shield.slot(), SlotKind::Weapon { two_handed: false });
        assert_eq!(ItemClass::Bow.slot(), SlotKind::Weapon { two_handed: true });
        assert_eq!(ItemClass::Quiver.slot(), SlotKind::Other);
        assert!(ItemClass::Warstaff.is_two_handed());
        assert!(!ItemClass::Sceptre.is_two_handed());
    }

    #[test]
    fn test_name_roundtrip() {
        for class in ItemClass::ALL {
            assert_eq!(ItemClass::from_name(class.name()), Some(class));
        }
        assert_eq!(ItemClass::from_name("body armour"), Some(ItemClass::BodyArmour));
        assert_eq!(ItemClass::from_name("Flask"), None);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ItemClass::OneHandSword).unwrap();
        assert_eq!(json, "\"One Hand Sword\"");
        let class: ItemClass = serde_json::from_str("\"Body Armour\"").unwrap();
        assert_eq!(class, ItemClass::BodyArmour);
    }
}
