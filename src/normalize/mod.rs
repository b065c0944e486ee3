//! Item normalization
//!
//! Turns raw stash API payloads into [`CanonicalItem`]s. Pure: no I/O and no
//! access to the index.

mod raw;

pub use raw::{RawItem, RawItemValue, RawProperty, RawSocket};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

use crate::model::{CanonicalItem, ItemClass, ItemProperty, ItemValue, Rarity};

const QUALITY_PREFIX: &str = "Superior ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("item without an id (type line {type_line:?})")]
    MissingId { type_line: String },

    #[error("item {id}: missing frame type")]
    MissingFrameType { id: String },

    #[error("item {id}: no equipment class for base type {type_line:?}")]
    UnmappedClass { id: String, type_line: String },

    #[error("item {id}: invalid frame type {code}")]
    InvalidRarity { id: String, code: i64 },
}

/// Context shared by every payload normalized from one fetch
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext {
    pub tab_index: u32,
}

/// A raw payload shape that can be normalized
pub trait Normalize {
    type Output;

    fn normalize(&self, ctx: &NormalizeContext) -> Result<Self::Output, NormalizationError>;
}

impl Normalize for RawItemValue {
    type Output = ItemValue;

    fn normalize(&self, _ctx: &NormalizeContext) -> Result<ItemValue, NormalizationError> {
        let RawItemValue(value, value_type) = self;
        Ok(ItemValue {
            effective_value: parse_percentage(value),
            value: value.clone(),
            value_type: *value_type,
        })
    }
}

impl Normalize for RawItem {
    type Output = CanonicalItem;

    fn normalize(&self, ctx: &NormalizeContext) -> Result<CanonicalItem, NormalizationError> {
        let type_line = strip_markup(&self.type_line);
        if self.id.is_empty() {
            return Err(NormalizationError::MissingId { type_line: type_line.to_string() });
        }
        let base_type = type_line.strip_prefix(QUALITY_PREFIX).unwrap_or(type_line);
        let class = ItemClass::from_base_type(base_type).ok_or_else(|| {
            NormalizationError::UnmappedClass {
                id: self.id.clone(),
                type_line: type_line.to_string(),
            }
        })?;

        let code = self
            .frame_type
            .ok_or_else(|| NormalizationError::MissingFrameType { id: self.id.clone() })?;
        let rarity = Rarity::from_code(code)
            .ok_or_else(|| NormalizationError::InvalidRarity { id: self.id.clone(), code })?;

        let properties = self
            .properties
            .iter()
            .map(|prop| -> Result<ItemProperty, NormalizationError> {
                Ok(ItemProperty {
                    name: prop.name.clone(),
                    display_mode: prop.display_mode,
                    kind: prop.kind,
                    values: prop
                        .values
                        .iter()
                        .map(|v| v.normalize(ctx))
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CanonicalItem {
            id: self.id.clone(),
            class,
            rarity,
            item_level: self.ilvl,
            identified: self.identified.unwrap_or(false),
            corrupted: self.corrupted.unwrap_or(false),
            verified: self.verified.unwrap_or(false),
            sockets: self.sockets.len() as u32,
            links: link_count(&self.sockets),
            tab_index: ctx.tab_index,
            name: strip_markup(&self.name).to_string(),
            type_line: type_line.to_string(),
            width: self.w,
            height: self.h,
            x: self.x,
            y: self.y,
            icon: self.icon.clone(),
            league: self.league.clone(),
            inventory_id: self.inventory_id.clone(),
            properties,
        })
    }
}

/// Normalize one raw item fetched from tab `tab_index`
pub fn normalize(raw: &RawItem, tab_index: u32) -> Result<CanonicalItem, NormalizationError> {
    raw.normalize(&NormalizeContext { tab_index })
}

/// Normalize a whole fetch. Items that fail are logged and skipped; the
/// second element is the number skipped.
pub fn normalize_batch(raw_items: &[RawItem], tab_index: u32) -> (Vec<CanonicalItem>, usize) {
    let ctx = NormalizeContext { tab_index };
    let mut items = Vec::with_capacity(raw_items.len());
    let mut skipped = 0;

    for raw in raw_items {
        match raw.normalize(&ctx) {
            Ok(item) => items.push(item),
            Err(err) => {
                warn!(error = %err, "skipping item");
                skipped += 1;
            }
        }
    }

    (items, skipped)
}

/// Size of the largest group of linked sockets
pub fn link_count(sockets: &[RawSocket]) -> u32 {
    let mut groups: FxHashMap<u32, u32> = FxHashMap::default();
    let mut max = 0;
    for socket in sockets {
        let count = groups.entry(socket.group).or_insert(0);
        *count += 1;
        max = max.max(*count);
    }
    max
}

/// "40%" => 0.40, anything else => None
pub fn parse_percentage(value: &str) -> Option<f64> {
    value
        .strip_suffix('%')
        .and_then(|number| number.trim().parse::<f64>().ok())
        .map(|pct| pct / 100.0)
}

/// Drop leading `<<set:...>>` display markup
fn strip_markup(text: &str) -> &str {
    let mut rest = text;
    while let Some(tail) = rest.strip_prefix("<<") {
        match tail.find(">>") {
            Some(end) => rest = &tail[end + 2..],
            None => break,
        }
    }
    rest
}
