//! Item filter expressions
//!
//! Boolean AND/OR trees of field comparisons, compiled to parameterized SQL
//! against the `items` table. Also parses the textual query syntax used by the
//! CLI: `field:value` terms are ANDed, `OR` separates groups.

use sqlx::{QueryBuilder, Sqlite};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{ItemClass, Rarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TabIndex,
    Rarity,
    Identified,
    Corrupted,
    Verified,
    ItemLevel,
    Sockets,
    Links,
    Class,
    Name,
    TypeLine,
    X,
    Y,
}

impl Field {
    pub fn column(self) -> &'static str {
        match self {
            Field::TabIndex => "tab_index",
            Field::Rarity => "rarity",
            Field::Identified => "identified",
            Field::Corrupted => "corrupted",
            Field::Verified => "verified",
            Field::ItemLevel => "item_level",
            Field::Sockets => "sockets",
            Field::Links => "links",
            Field::Class => "class",
            Field::Name => "name",
            Field::TypeLine => "type_line",
            Field::X => "x",
            Field::Y => "y",
        }
    }

    /// Resolve a query field name. Accepts the column names and the payload
    /// names (`tabIndex`, `frameType`, `ilvl`, `numLinks`, ...).
    pub fn from_alias(name: &str) -> Option<Field> {
        let field = match name.to_ascii_lowercase().as_str() {
            "tab" | "tabindex" | "tab_index" => Field::TabIndex,
            "rarity" | "frametype" | "frame_type" => Field::Rarity,
            "identified" => Field::Identified,
            "corrupted" => Field::Corrupted,
            "verified" => Field::Verified,
            "ilvl" | "itemlevel" | "item_level" | "level" => Field::ItemLevel,
            "sockets" | "numsockets" => Field::Sockets,
            "links" | "numlinks" => Field::Links,
            "class" | "itemclass" => Field::Class,
            "name" => Field::Name,
            "typeline" | "type_line" | "type" => Field::TypeLine,
            "x" => Field::X,
            "y" => Field::Y,
            _ => return None,
        };
        Some(field)
    }

    fn is_ordered(self) -> bool {
        !matches!(
            self,
            Field::Rarity | Field::Class | Field::Name | Field::TypeLine
                | Field::Identified | Field::Corrupted | Field::Verified
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    fn sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    /// Split a leading operator off a query value
    fn split(value: &str) -> (CmpOp, &str) {
        for (prefix, op) in [
            (">=", CmpOp::Ge),
            ("<=", CmpOp::Le),
            ("!=", CmpOp::Ne),
            (">", CmpOp::Gt),
            ("<", CmpOp::Lt),
            ("=", CmpOp::Eq),
        ] {
            if let Some(rest) = value.strip_prefix(prefix) {
                return (op, rest);
            }
        }
        (CmpOp::Eq, value)
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Int(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Int(i64::from(value))
    }
}

impl From<Rarity> for FilterValue {
    fn from(value: Rarity) -> Self {
        FilterValue::Text(value.name().to_string())
    }
}

impl From<ItemClass> for FilterValue {
    fn from(value: ItemClass) -> Self {
        FilterValue::Text(value.name().to_string())
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFilter {
    /// Matches every item
    All,
    Compare { field: Field, op: CmpOp, value: FilterValue },
    And(Vec<ItemFilter>),
    Or(Vec<ItemFilter>),
}

impl ItemFilter {
    pub fn compare(field: Field, op: CmpOp, value: impl Into<FilterValue>) -> Self {
        ItemFilter::Compare { field, op, value: value.into() }
    }

    pub fn eq(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Eq, value)
    }

    pub fn ne(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Ne, value)
    }

    pub fn lt(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Lt, value)
    }

    pub fn le(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Le, value)
    }

    pub fn gt(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Gt, value)
    }

    pub fn ge(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, CmpOp::Ge, value)
    }

    /// Inclusive range
    pub fn range(field: Field, min: impl Into<FilterValue>, max: impl Into<FilterValue>) -> Self {
        Self::ge(field, min).and(Self::le(field, max))
    }

    pub fn and(self, other: ItemFilter) -> Self {
        match (self, other) {
            (ItemFilter::All, other) | (other, ItemFilter::All) => other,
            (ItemFilter::And(mut terms), ItemFilter::And(more)) => {
                terms.extend(more);
                ItemFilter::And(terms)
            }
            (ItemFilter::And(mut terms), other) => {
                terms.push(other);
                ItemFilter::And(terms)
            }
            (this, other) => ItemFilter::And(vec![this, other]),
        }
    }

    pub fn or(self, other: ItemFilter) -> Self {
        match (self, other) {
            (ItemFilter::All, _) | (_, ItemFilter::All) => ItemFilter::All,
            (ItemFilter::Or(mut groups), other) => {
                groups.push(other);
                ItemFilter::Or(groups)
            }
            (this, other) => ItemFilter::Or(vec![this, other]),
        }
    }

    /// Append this filter as a SQL boolean expression with bound parameters
    pub fn push_sql(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            ItemFilter::All => {
                qb.push("1 = 1");
            }
            ItemFilter::Compare { field, op, value } => {
                qb.push(field.column()).push(" ").push(op.sql()).push(" ");
                match value {
                    FilterValue::Int(n) => qb.push_bind(*n),
                    FilterValue::Text(s) => qb.push_bind(s.clone()),
                };
            }
            ItemFilter::And(terms) => Self::push_joined(qb, terms, " AND ", "1 = 1"),
            ItemFilter::Or(groups) => Self::push_joined(qb, groups, " OR ", "1 = 0"),
        }
    }

    fn push_joined(qb: &mut QueryBuilder<'_, Sqlite>, filters: &[ItemFilter], sep: &str, empty: &str) {
        if filters.is_empty() {
            qb.push(empty);
            return;
        }
        qb.push("(");
        for (i, filter) in filters.iter().enumerate() {
            if i > 0 {
                qb.push(sep);
            }
            filter.push_sql(qb);
        }
        qb.push(")");
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("expected field:value, got {0:?}")]
    MissingSeparator(String),

    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },

    #[error("operator {op} not supported for field {field}")]
    UnsupportedOperator { field: String, op: CmpOp },

    #[error("empty group around OR")]
    EmptyGroup,

    #[error("unterminated quote")]
    UnterminatedQuote,
}

impl FromStr for ItemFilter {
    type Err = FilterParseError;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(query)?;
        if tokens.is_empty() {
            return Ok(ItemFilter::All);
        }

        let mut groups = Vec::new();
        for group in tokens.split(|t| t == "OR") {
            if group.is_empty() {
                return Err(FilterParseError::EmptyGroup);
            }
            let terms = group
                .iter()
                .map(|t| parse_term(t))
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(terms.into_iter().fold(ItemFilter::All, ItemFilter::and));
        }

        Ok(match groups.len() {
            1 => groups.remove(0),
            _ => ItemFilter::Or(groups),
        })
    }
}

/// Split on whitespace, keeping double-quoted runs together
fn tokenize(query: &str) -> Result<Vec<String>, FilterParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in query.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if quoted {
        return Err(FilterParseError::UnterminatedQuote);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_term(term: &str) -> Result<ItemFilter, FilterParseError> {
    let (name, raw) = term
        .split_once(':')
        .ok_or_else(|| FilterParseError::MissingSeparator(term.to_string()))?;
    let field = Field::from_alias(name).ok_or_else(|| FilterParseError::UnknownField(name.to_string()))?;
    let (op, raw) = CmpOp::split(raw);

    if !field.is_ordered() && !matches!(op, CmpOp::Eq | CmpOp::Ne) {
        return Err(FilterParseError::UnsupportedOperator { field: name.to_string(), op });
    }

    let invalid = || FilterParseError::InvalidValue { field: name.to_string(), value: raw.to_string() };
    let value = match field {
        Field::Rarity => {
            let rarity = match raw.parse::<i64>() {
                Ok(code) => Rarity::from_code(code),
                Err(_) => Rarity::from_name(&raw.to_ascii_lowercase()),
            };
            FilterValue::from(rarity.ok_or_else(invalid)?)
        }
        Field::Class => FilterValue::from(ItemClass::from_name(raw).ok_or_else(invalid)?),
        Field::Identified | Field::Corrupted | Field::Verified => match raw {
            "1" | "true" => FilterValue::Int(1),
            "0" | "false" => FilterValue::Int(0),
            _ => return Err(invalid()),
        },
        Field::Name | Field::TypeLine => FilterValue::from(raw),
        _ => FilterValue::Int(raw.parse().map_err(|_| invalid())?),
    };

    Ok(ItemFilter::Compare { field, op, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(filter: &ItemFilter) -> String {
        let mut qb = QueryBuilder::<Sqlite>::new("");
        filter.push_sql(&mut qb);
        qb.sql().to_string()
    }

    #[test]
    fn test_compare_sql() {
        let filter = ItemFilter::ge(Field::ItemLevel, 60u32);
        assert_eq!(sql(&filter), "item_level >= ?");
    }

    #[test]
    fn test_and_flattens() {
        let filter = ItemFilter::eq(Field::Rarity, Rarity::Rare)
            .and(ItemFilter::eq(Field::Identified, false))
            .and(ItemFilter::ge(Field::ItemLevel, 60u32));
        assert!(matches!(&filter, ItemFilter::And(terms) if terms.len() == 3));
        assert_eq!(sql(&filter), "(rarity = ? AND identified = ? AND item_level >= ?)");
    }

    #[test]
    fn test_all_is_identity_for_and() {
        let term = ItemFilter::eq(Field::X, 1u32);
        assert_eq!(ItemFilter::All.and(term.clone()), term);
        assert_eq!(sql(&ItemFilter::All), "1 = 1");
        assert_eq!(sql(&ItemFilter::Or(Vec::new())), "1 = 0");
    }

    #[test]
    fn test_parse_terms_and_groups() {
        let filter: ItemFilter = "frameType:rare ilvl:>=60 OR tabIndex:3".parse().unwrap();
        assert_eq!(
            filter,
            ItemFilter::Or(vec![
                ItemFilter::eq(Field::Rarity, Rarity::Rare).and(ItemFilter::ge(Field::ItemLevel, 60i64)),
                ItemFilter::eq(Field::TabIndex, 3i64),
            ])
        );
    }

    #[test]
    fn test_parse_rarity_code_and_flags() {
        let filter: ItemFilter = "frameType:2 identified:false".parse().unwrap();
        assert_eq!(
            filter,
            ItemFilter::eq(Field::Rarity, Rarity::Rare).and(ItemFilter::eq(Field::Identified, false))
        );
    }

    #[test]
    fn test_parse_quoted_class() {
        let filter: ItemFilter = r#"class:"body armour" links:!=6"#.parse().unwrap();
        assert_eq!(
            filter,
            ItemFilter::eq(Field::Class, ItemClass::BodyArmour).and(ItemFilter::ne(Field::Links, 6i64))
        );
    }

    #[test]
    fn test_parse_empty_is_all() {
        assert_eq!("  ".parse::<ItemFilter>().unwrap(), ItemFilter::All);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ilvl".parse::<ItemFilter>().unwrap_err(),
            FilterParseError::MissingSeparator("ilvl".to_string())
        );
        assert_eq!(
            "colour:red".parse::<ItemFilter>().unwrap_err(),
            FilterParseError::UnknownField("colour".to_string())
        );
        assert!(matches!(
            "ilvl:high".parse::<ItemFilter>().unwrap_err(),
            FilterParseError::InvalidValue { .. }
        ));
        assert!(matches!(
            "rarity:>=rare".parse::<ItemFilter>().unwrap_err(),
            FilterParseError::UnsupportedOperator { .. }
        ));
        assert_eq!("x:1 OR".parse::<ItemFilter>().unwrap_err(), FilterParseError::EmptyGroup);
        assert_eq!(
            "name:\"open".parse::<ItemFilter>().unwrap_err(),
            FilterParseError::UnterminatedQuote
        );
    }
}
