mod format;

pub use format::{format_positions, format_totals, RewardTotals};
