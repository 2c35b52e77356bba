use std::collections::BTreeMap;

/// One (ingredient, unit, amount) triple taken from a recipe in a user's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub unit: String,
    pub amount: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
        }
    }
}

/// Merged shopping list entry, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ordinal: usize,
    pub name: String,
    pub unit: String,
    pub amount: u64,
}

/// Merges cart lines sharing the exact same (name, unit) pair and sums their
/// amounts.
///
/// Names and units are compared byte for byte: "Сахар" and "сахар" stay apart,
/// and so do "г" and "кг". The result is ordered by name, then unit, so the
/// output only depends on the multiset of input lines.
pub fn aggregate(lines: impl IntoIterator<Item = CartLine>) -> Vec<AggregatedLine> {
    let mut groups: BTreeMap<(String, String), u64> = BTreeMap::new();

    for line in lines {
        *groups.entry((line.name, line.unit)).or_default() += u64::from(line.amount);
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, ((name, unit), amount))| AggregatedLine {
            ordinal: index + 1,
            name,
            unit,
            amount,
        })
        .collect()
}
