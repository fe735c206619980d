//! Library of Congress Classification parsing
//!
//! Splits a normalized call number into its shelving components and derives a
//! key whose ordering follows the shelf. Strings that do not look like an LCC
//! call number get a plain-text key that sorts after every shelved key.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use super::call_number::normalize;

/// Subdivision value reported for call numbers that have none.
pub const NO_SUBDIVISION: i64 = -1;

static LCC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        ([A-Z]{1,3})            # class letters
        ([0-9]{1,4})            # class number
        \.?
        ([0-9]{1,3})?           # subdivision
        \s*\.?
        ([A-Z])                 # first cutter letter
        ([0-9]+)                # first cutter number
        \s*
        (?:
            ([A-Z]{1,2})        # second cutter letters
            ([0-9]+)?           # second cutter number
        )?
        \s*
        ([0-9]{4})?             # year
        (.*)                    # media / volume text
        ",
    )
    .unwrap()
});

/// Shelving components of a call number that matched the LCC grammar.
///
/// Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CallNumberKey {
    pub class_letters: String,
    pub class_number: u16,
    /// `None` sorts before `Some(0)`: an undivided class precedes its subdivisions.
    pub subdivision: Option<u16>,
    pub cutter1_letter: String,
    pub cutter1_number: u64,
    pub cutter2_letter: String,
    pub cutter2_number: u64,
    pub year: u16,
    pub trailing: String,
}

/// Sort key for one row.
///
/// Variant order is part of the contract: every `Shelved` key sorts before
/// every `Unshelved` key, and unshelved keys order as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Shelved(CallNumberKey),
    Unshelved(String),
}

/// One field of the flattened key view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KeyField {
    Text(String),
    Number(i64),
}

impl SortKey {
    pub fn is_shelved(&self) -> bool {
        matches!(self, SortKey::Shelved(_))
    }

    /// Flat field view: nine fields for a shelved key, one for the fallback.
    pub fn fields(&self) -> Vec<KeyField> {
        match self {
            SortKey::Shelved(key) => vec![
                KeyField::Text(key.class_letters.clone()),
                KeyField::Number(key.class_number.into()),
                KeyField::Number(key.subdivision.map_or(NO_SUBDIVISION, i64::from)),
                KeyField::Text(key.cutter1_letter.clone()),
                KeyField::Number(i64::try_from(key.cutter1_number).unwrap_or(i64::MAX)),
                KeyField::Text(key.cutter2_letter.clone()),
                KeyField::Number(i64::try_from(key.cutter2_number).unwrap_or(i64::MAX)),
                KeyField::Number(key.year.into()),
                KeyField::Text(key.trailing.clone()),
            ],
            SortKey::Unshelved(text) => vec![KeyField::Text(text.clone())],
        }
    }
}

impl PartialOrd for KeyField {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (KeyField::Text(a), KeyField::Text(b)) => Some(a.cmp(b)),
            (KeyField::Number(a), KeyField::Number(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Derive the sort key of an already normalized call number.
pub fn derive_key(normalized: &str) -> SortKey {
    let Some(caps) = LCC_PATTERN.captures(normalized) else {
        return SortKey::Unshelved(normalized.to_string());
    };

    SortKey::Shelved(CallNumberKey {
        class_letters: text(&caps, 1),
        class_number: number(&caps, 2).unwrap_or(0),
        subdivision: number(&caps, 3),
        cutter1_letter: text(&caps, 4),
        cutter1_number: cutter(&caps, 5),
        cutter2_letter: text(&caps, 6),
        cutter2_number: cutter(&caps, 7),
        year: number(&caps, 8).unwrap_or(0),
        trailing: text(&caps, 9).trim().to_string(),
    })
}

/// Normalize then derive in one step.
pub fn shelf_key(call_number: Option<&str>) -> SortKey {
    derive_key(&normalize(call_number))
}

fn text(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// Bounded digit groups always fit their target type.
fn number(caps: &Captures<'_>, group: usize) -> Option<u16> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

// Cutter digit runs are unbounded; saturate rather than fail.
fn cutter(caps: &Captures<'_>, group: usize) -> u64 {
    caps.get(group)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}
