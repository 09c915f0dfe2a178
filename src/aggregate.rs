use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::Record;

/// Label of the collapsed bucket holding everything outside the top k.
pub const OTHER_LABEL: &str = "Other";

/// Categorical record field a summary table can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    BodyPart,
    Location,
    Diagnosis,
    Race,
}

impl CategoryField {
    fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            CategoryField::BodyPart => &record.body_part,
            CategoryField::Location => &record.location,
            CategoryField::Diagnosis => &record.diagnosis,
            CategoryField::Race => &record.race,
        }
    }
}

/// One row of a weighted frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub category: String,
    pub weighted_count: f64,
}

/// Weighted frequency table over one categorical field, truncated to the `k`
/// heaviest categories plus an `"Other"` bucket.
///
/// The top k rows are ordered by descending total weight (ties broken by
/// category name). Everything else collapses into `"Other"`, which is always
/// appended after the top k; its own weight never repositions it. A field
/// with at most k distinct categories yields no `"Other"` row.
pub fn top_k_frequency(records: &[Record], field: CategoryField, k: usize) -> Vec<FrequencyRow> {
    let mut weights: HashMap<&str, f64> = HashMap::new();
    for record in records {
        *weights.entry(field.value(record)).or_insert(0.0) += record.weight;
    }

    let mut rows: Vec<(&str, f64)> = weights.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut table: Vec<FrequencyRow> = rows
        .iter()
        .take(k)
        .map(|(category, weighted_count)| FrequencyRow {
            category: (*category).to_string(),
            weighted_count: *weighted_count,
        })
        .collect();

    if rows.len() > k {
        let other: f64 = rows[k..].iter().map(|(_, weight)| weight).sum();
        table.push(FrequencyRow {
            category: OTHER_LABEL.to_string(),
            weighted_count: other,
        });
    }

    table
}
