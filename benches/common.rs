// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use stashvision::model::{CanonicalItem, ItemClass, Rarity};
use stashvision::repository::Database;

const CLASSES: [ItemClass; 12] = [
    ItemClass::Amulet,
    ItemClass::Ring,
    ItemClass::Ring,
    ItemClass::Belt,
    ItemClass::Boots,
    ItemClass::Gloves,
    ItemClass::BodyArmour,
    ItemClass::Helmet,
    ItemClass::Bow,
    ItemClass::Wand,
    ItemClass::Shield,
    ItemClass::Dagger,
];

/// Generate unidentified rares cycling through every recipe slot,
/// with item levels spread over 55..=84
pub fn generate_items(num_items: usize) -> Vec<CanonicalItem> {
    (0..num_items)
        .map(|i| {
            let class = CLASSES[i % CLASSES.len()];
            CanonicalItem {
                id: format!("item_{:08x}", i),
                class,
                rarity: Rarity::Rare,
                item_level: 55 + (i % 30) as u32,
                identified: false,
                corrupted: false,
                verified: false,
                sockets: (i % 7) as u32,
                links: (i % 4) as u32,
                tab_index: (i % 4) as u32,
                name: String::new(),
                type_line: format!("{class} base"),
                width: 1,
                height: 1,
                x: (i % 24) as u32,
                y: ((i / 24) % 24) as u32,
                icon: String::new(),
                league: "Standard".to_string(),
                inventory_id: "Stash1".to_string(),
                properties: Vec::new(),
            }
        })
        .collect()
}

/// Create in-memory database for benchmarks
pub async fn setup_bench_db() -> Database {
    let db = Database::new(":memory:").await.unwrap();
    db.init_schema().await.unwrap();
    db
}
