use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex of the injured person, as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
            Sex::Unknown => write!(f, "unknown"),
        }
    }
}

/// One row of the injury dataset: a single accident case.
///
/// The `weight` field is the statistical multiplier that scales this sampled
/// case to a population-level estimate; all aggregation in this crate is
/// weighted by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Date the injury was treated
    pub treatment_date: NaiveDate,
    /// Age in years
    pub age: u8,
    pub sex: Sex,
    pub race: String,
    /// Body part affected, e.g. "head"
    pub body_part: String,
    /// Where the accident happened, e.g. "home"
    pub location: String,
    pub diagnosis: String,
    /// Code of the consumer product involved
    pub product_code: u32,
    /// Statistical weight for population-level estimates
    pub weight: f64,
    /// Free-text description of the accident
    pub narrative: String,
}
