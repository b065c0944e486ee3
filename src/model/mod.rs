mod base_types;
mod class;
mod item;
mod recipe;

pub use class::{ItemClass, SlotKind};
pub use item::{CanonicalItem, ItemProperty, ItemValue, Rarity};
pub use recipe::{Currency, RecipeResult, Reward};
