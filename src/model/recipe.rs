use serde::Serialize;

use super::CanonicalItem;

/// A currency stack, e.g. 2 Chaos Orb
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub value: u32,
    pub name: String,
}

/// What a vendor hands back for a completed recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reward {
    Currency(Currency),
    Item(String),
}

impl Reward {
    pub fn currency(value: u32, name: &str) -> Self {
        Reward::Currency(Currency { value, name: name.to_string() })
    }
}

/// One completed recipe set and its reward
#[derive(Debug, Clone, Serialize)]
pub struct RecipeResult {
    pub items: Vec<CanonicalItem>,
    pub reward: Reward,
}
