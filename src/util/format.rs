use std::collections::BTreeMap;

use crate::model::{RecipeResult, Reward};

/// Rewards of a recipe scan, summed per currency
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewardTotals {
    pub currency: BTreeMap<String, u32>,
    pub items: usize,
}

impl RewardTotals {
    pub fn from_results(results: &[RecipeResult]) -> Self {
        let mut totals = Self::default();
        for result in results {
            match &result.reward {
                Reward::Currency(currency) => {
                    *totals.currency.entry(currency.name.clone()).or_default() += currency.value;
                }
                Reward::Item(_) => totals.items += 1,
            }
        }
        totals
    }
}

/// Currency totals as `4 Chaos Orb, 1 Regal Orb`, or `none`
pub fn format_totals(totals: &RewardTotals) -> String {
    if totals.currency.is_empty() {
        return "none".to_string();
    }
    totals
        .currency
        .iter()
        .map(|(name, value)| format!("{value} {name}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `WxH:X,Y` line per item, each set followed by `---`
pub fn format_positions(results: &[RecipeResult]) -> String {
    let mut out = String::new();
    for result in results {
        for item in &result.items {
            out.push_str(&item.position());
            out.push('\n');
        }
        out.push_str("---\n");
    }
    out
}
