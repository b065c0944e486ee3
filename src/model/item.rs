use serde::{Deserialize, Serialize};
use std::fmt;

use super::ItemClass;

/// Rarity tier of an item (the API's `frameType`)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    DivinationCard,
    QuestItem,
    Prophecy,
    Relic,
}

impl Rarity {
    const BY_CODE: [Rarity; 10] = [
        Rarity::Normal,
        Rarity::Magic,
        Rarity::Rare,
        Rarity::Unique,
        Rarity::Gem,
        Rarity::Currency,
        Rarity::DivinationCard,
        Rarity::QuestItem,
        Rarity::Prophecy,
        Rarity::Relic,
    ];

    /// Map a raw frame type code, `None` when out of range
    pub fn from_code(code: i64) -> Option<Rarity> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::BY_CODE.get(i).copied())
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Name used in the index and in textual queries
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Normal => "normal",
            Rarity::Magic => "magic",
            Rarity::Rare => "rare",
            Rarity::Unique => "unique",
            Rarity::Gem => "gem",
            Rarity::Currency => "currency",
            Rarity::DivinationCard => "divination_card",
            Rarity::QuestItem => "quest_item",
            Rarity::Prophecy => "prophecy",
            Rarity::Relic => "relic",
        }
    }

    pub fn from_name(name: &str) -> Option<Rarity> {
        Self::BY_CODE.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value of an item property, e.g. `("+12%", 0)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValue {
    pub value: String,
    pub value_type: i64,
    /// Fractional form of a percentage value ("40%" => 0.40)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProperty {
    pub name: String,
    pub display_mode: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    pub values: Vec<ItemValue>,
}

/// A normalized stash item as stored in the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalItem {
    pub id: String,
    pub class: ItemClass,
    #[serde(rename = "frameType")]
    pub rarity: Rarity,
    #[serde(rename = "ilvl")]
    pub item_level: u32,
    #[serde(with = "flag")]
    pub identified: bool,
    #[serde(with = "flag")]
    pub corrupted: bool,
    #[serde(with = "flag")]
    pub verified: bool,
    #[serde(rename = "numSockets")]
    pub sockets: u32,
    #[serde(rename = "numLinks")]
    pub links: u32,
    pub tab_index: u32,
    pub name: String,
    pub type_line: String,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    pub x: u32,
    pub y: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub inventory_id: String,
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
}

impl CanonicalItem {
    /// Short human readable line: item level, name and base type
    pub fn summary(&self) -> String {
        let name = if self.name.is_empty() { "[unid]" } else { self.name.as_str() };
        format!("{} {} {}", self.item_level, name, self.type_line)
    }

    /// Dimensions and stash grid position as `WxH:X,Y`
    pub fn position(&self) -> String {
        format!("{}x{}:{},{}", self.width, self.height, self.x, self.y)
    }
}

/// Serializes a boolean flag as 0/1
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanonicalItem {
        CanonicalItem {
            id: "abc".to_string(),
            class: ItemClass::Helmet,
            rarity: Rarity::Rare,
            item_level: 68,
            identified: false,
            corrupted: true,
            verified: false,
            sockets: 4,
            links: 3,
            tab_index: 2,
            name: String::new(),
            type_line: "Hubris Circlet".to_string(),
            width: 2,
            height: 2,
            x: 10,
            y: 4,
            icon: String::new(),
            league: "Standard".to_string(),
            inventory_id: "Stash3".to_string(),
            properties: Vec::new(),
        }
    }

    #[test]
    fn test_rarity_codes() {
        assert_eq!(Rarity::from_code(0), Some(Rarity::Normal));
        assert_eq!(Rarity::from_code(2), Some(Rarity::Rare));
        assert_eq!(Rarity::from_code(9), Some(Rarity::Relic));
        assert_eq!(Rarity::from_code(10), None);
        assert_eq!(Rarity::from_code(-1), None);
        assert_eq!(Rarity::Rare.code(), 2);
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(Rarity::from_name("divination_card"), Some(Rarity::DivinationCard));
        assert_eq!(Rarity::from_name("legendary"), None);
    }

    #[test]
    fn test_flags_serialize_as_integers() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["identified"], 0);
        assert_eq!(json["corrupted"], 1);
        assert_eq!(json["frameType"], "rare");
        assert_eq!(json["class"], "Helmet");

        let back: CanonicalItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_summary_and_position() {
        let item = sample();
        assert_eq!(item.summary(), "68 [unid] Hubris Circlet");
        assert_eq!(item.position(), "2x2:10,4");
    }
}
