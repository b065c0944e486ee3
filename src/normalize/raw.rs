//! Raw payload shapes as returned by the stash API
//!
//! Only fields the normalizer reads are declared; everything else in the
//! payload is ignored by serde. Missing fields default so one incomplete
//! item fails normalization instead of the whole response.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub frame_type: Option<i64>,
    #[serde(default)]
    pub ilvl: u32,
    #[serde(default)]
    pub identified: Option<bool>,
    #[serde(default)]
    pub corrupted: Option<bool>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub sockets: Vec<RawSocket>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub inventory_id: String,
    #[serde(default)]
    pub w: u32,
    #[serde(default)]
    pub h: u32,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSocket {
    pub group: u32,
    #[serde(default)]
    pub attr: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub name: String,
    #[serde(default)]
    pub display_mode: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub values: Vec<RawItemValue>,
}

/// A `[value, valueType]` pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemValue(pub String, pub i64);
