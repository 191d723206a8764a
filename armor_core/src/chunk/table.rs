//! KdTable - Required KD per AP step

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// An AP value on the 0.1 grid, stored as whole tenths so keys never drift
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApValue(u32);

impl ApValue {
    /// First AP step (0.1); AP is never zero so the AC ratio stays finite
    pub const FIRST: ApValue = ApValue(1);

    pub const fn from_tenths(tenths: u32) -> Self {
        ApValue(tenths)
    }

    pub fn tenths(self) -> u32 {
        self.0
    }

    /// AP as a float, equal to the nearest double to `tenths / 10`
    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    pub fn next(self) -> Self {
        ApValue(self.0 + 1)
    }
}

impl fmt::Display for ApValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for ApValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Required KD for each AP step, in ascending AP order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdTable {
    entries: BTreeMap<ApValue, i64>,
}

#[derive(serde::Serialize)]
struct KdRow {
    ap: ApValue,
    kd: i64,
}

impl KdTable {
    pub fn new() -> Self {
        KdTable::default()
    }

    pub fn insert(&mut self, ap: ApValue, kd: i64) {
        self.entries.insert(ap, kd);
    }

    pub fn get(&self, ap: ApValue) -> Option<i64> {
        self.entries.get(&ap).copied()
    }

    /// Entries in ascending AP order
    pub fn iter(&self) -> impl Iterator<Item = (ApValue, i64)> + Clone + '_ {
        self.entries.iter().map(|(ap, kd)| (*ap, *kd))
    }

    pub fn keys(&self) -> impl Iterator<Item = ApValue> + '_ {
        self.entries.keys().copied()
    }

    pub fn first(&self) -> Option<(ApValue, i64)> {
        self.entries.first_key_value().map(|(ap, kd)| (*ap, *kd))
    }

    pub fn last(&self) -> Option<(ApValue, i64)> {
        self.entries.last_key_value().map(|(ap, kd)| (*ap, *kd))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KdTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(ap, kd)| KdRow { ap, kd }))
    }
}
