// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use stashvision::model::{CanonicalItem, ItemClass, Rarity};
use stashvision::normalize::RawItem;
use stashvision::repository::Database;

/// Create an in-memory test database with initialized schema
pub async fn create_test_db() -> Database {
    let db = Database::new(":memory:").await.unwrap();
    db.init_schema().await.unwrap();
    db
}

/// An unidentified rare at grid column `x`
pub fn item(id: &str, class: ItemClass, level: u32, x: u32) -> CanonicalItem {
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
        type_line: format!("{class} base"),
        width: 1,
        height: 1,
        x,
        y: 0,
        icon: String::new(),
        league: "Standard".to_string(),
        inventory_id: "Stash1".to_string(),
        properties: Vec::new(),
    }
}

pub const ARMOUR_CLASSES: [ItemClass; 8] = [
    ItemClass::Amulet,
    ItemClass::Ring,
    ItemClass::Ring,
    ItemClass::Belt,
    ItemClass::Boots,
    ItemClass::Gloves,
    ItemClass::BodyArmour,
    ItemClass::Helmet,
];

/// One item per armour slot, ids `{prefix}-0..8`, laid out from column `x`
pub fn armour_set(prefix: &str, level: u32, x: u32) -> Vec<CanonicalItem> {
    ARMOUR_CLASSES
        .into_iter()
        .enumerate()
        .map(|(i, class)| item(&format!("{prefix}-{i}"), class, level, x + i as u32))
        .collect()
}

/// Same items moved to `tab`
pub fn in_tab(items: Vec<CanonicalItem>, tab: u32) -> Vec<CanonicalItem> {
    items
        .into_iter()
        .map(|mut item| {
            item.tab_index = tab;
            item
        })
        .collect()
}

/// A raw payload as the stash API returns it
pub fn raw_item(id: &str, type_line: &str, frame_type: i64, ilvl: u32, x: u32) -> RawItem {
    RawItem {
        id: id.to_string(),
        type_line: type_line.to_string(),
        frame_type: Some(frame_type),
        ilvl,
        identified: Some(false),
        w: 1,
        h: 1,
        x,
        ..RawItem::default()
    }
}
