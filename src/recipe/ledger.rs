use rustc_hash::FxHashSet;

/// Ids of items already claimed by a completed set during one scan.
/// Only grows.
#[derive(Debug, Default)]
pub struct ItemLedger {
    claimed: FxHashSet<String>,
}

impl ItemLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }

    /// Returns false if the id was already claimed
    pub fn claim(&mut self, id: &str) -> bool {
        self.claimed.insert(id.to_string())
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
