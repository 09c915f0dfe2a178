use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::{PopulationTable, Record, Sex};

/// Injuries per this many people of an (age, sex) group.
pub const RATE_SCALE: f64 = 10_000.0;

/// Weighted injury count, population, and rate for one (age, sex) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSexRate {
    pub age: u8,
    pub sex: Sex,
    /// Weighted number of injuries in the selection for this group
    pub injury_count: f64,
    /// Census population for this group, when a row exists
    pub population: Option<u64>,
    /// Injuries per 10,000 population; `None` when the population is missing
    pub rate: Option<f64>,
}

/// Groups records by (age, sex) and joins each group against the population
/// table.
///
/// Returns one row per distinct (age, sex) pair present in `records`, sorted
/// by age then sex. Pairs with no population row keep an explicit missing
/// rate so a chart can skip exactly those points.
pub fn rate_by_age_sex(records: &[Record], population: &PopulationTable) -> Vec<AgeSexRate> {
    let mut counts: BTreeMap<(u8, Sex), f64> = BTreeMap::new();
    for record in records {
        *counts.entry((record.age, record.sex)).or_insert(0.0) += record.weight;
    }

    counts
        .into_iter()
        .map(|((age, sex), injury_count)| {
            let group_population = population.get(age, sex);
            if group_population.is_none() {
                log::debug!("No population row for age {age} sex {sex}");
            }
            let rate = group_population.map(|p| injury_count / p as f64 * RATE_SCALE);
            AgeSexRate {
                age,
                sex,
                injury_count,
                population: group_population,
                rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{rate_by_age_sex, RATE_SCALE};
    use crate::data::{PopulationRow, PopulationTable, Record, Sex};

    fn record(age: u8, sex: Sex, weight: f64) -> Record {
        Record {
            treatment_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            age,
            sex,
            race: "white".to_string(),
            body_part: "head".to_string(),
            location: "home".to_string(),
            diagnosis: "contusion".to_string(),
            product_code: 1842,
            weight,
            narrative: String::new(),
        }
    }

    fn population() -> PopulationTable {
        PopulationTable::from_rows(vec![
            PopulationRow {
                age: 30,
                sex: Sex::Female,
                population: 2_000_000,
            },
            PopulationRow {
                age: 30,
                sex: Sex::Male,
                population: 1_000_000,
            },
        ])
    }

    #[test]
    fn one_row_per_distinct_age_sex_pair() {
        let records = vec![
            record(30, Sex::Female, 10.0),
            record(30, Sex::Female, 20.0),
            record(30, Sex::Male, 5.0),
            record(45, Sex::Female, 1.0),
        ];

        let rows = rate_by_age_sex(&records, &population());

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].age, rows[0].sex), (30, Sex::Female));
        assert_eq!(rows[0].injury_count, 30.0);
        assert_eq!((rows[1].age, rows[1].sex), (30, Sex::Male));
        assert_eq!((rows[2].age, rows[2].sex), (45, Sex::Female));
    }

    #[test]
    fn rate_is_per_ten_thousand() {
        let records = vec![record(30, Sex::Male, 500.0)];

        let rows = rate_by_age_sex(&records, &population());

        assert_eq!(rows[0].population, Some(1_000_000));
        assert_eq!(rows[0].rate, Some(500.0 / 1_000_000.0 * RATE_SCALE));
    }

    #[test]
    fn missing_population_propagates_as_none() {
        let records = vec![record(45, Sex::Female, 3.0), record(30, Sex::Male, 2.0)];

        let rows = rate_by_age_sex(&records, &population());

        // the unmatched row is kept, not dropped or zeroed
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].age, 45);
        assert_eq!(rows[1].injury_count, 3.0);
        assert_eq!(rows[1].population, None);
        assert_eq!(rows[1].rate, None);
    }

    #[test]
    fn empty_selection_yields_no_rows() {
        assert!(rate_by_age_sex(&[], &population()).is_empty());
    }
}
