use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::Sex;

/// One population count for an (age, sex) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRow {
    pub age: u8,
    pub sex: Sex,
    pub population: u64,
}

/// Population counts keyed by (age, sex).
///
/// Lookups return `None` for groups with no census row; callers propagate the
/// absence rather than substituting zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationTable {
    counts: BTreeMap<(u8, Sex), u64>,
}

impl PopulationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from census rows. A duplicate (age, sex) pair keeps the
    /// last row seen.
    pub fn from_rows(rows: impl IntoIterator<Item = PopulationRow>) -> Self {
        let mut counts = BTreeMap::new();
        for row in rows {
            counts.insert((row.age, row.sex), row.population);
        }
        Self { counts }
    }

    pub fn insert(&mut self, age: u8, sex: Sex, population: u64) {
        self.counts.insert((age, sex), population);
    }

    /// Population for an (age, sex) group, or `None` when the group is
    /// missing from the table.
    pub fn get(&self, age: u8, sex: Sex) -> Option<u64> {
        self.counts.get(&(age, sex)).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PopulationRow, PopulationTable, Sex};

    #[test]
    fn missing_group_returns_none() {
        let table = PopulationTable::from_rows(vec![PopulationRow {
            age: 30,
            sex: Sex::Female,
            population: 12_000,
        }]);

        assert_eq!(table.get(30, Sex::Female), Some(12_000));
        assert_eq!(table.get(30, Sex::Male), None);
        assert_eq!(table.get(31, Sex::Female), None);
    }

    #[test]
    fn duplicate_rows_keep_last() {
        let table = PopulationTable::from_rows(vec![
            PopulationRow {
                age: 5,
                sex: Sex::Male,
                population: 100,
            },
            PopulationRow {
                age: 5,
                sex: Sex::Male,
                population: 200,
            },
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(5, Sex::Male), Some(200));
    }
}
