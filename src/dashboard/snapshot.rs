use serde::{Deserialize, Serialize};

use crate::aggregate::FrequencyRow;
use crate::data::Sex;
use crate::session::AxisMode;

/// The three weighted summary tables shown beside the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summaries {
    pub diagnosis: Vec<FrequencyRow>,
    pub body_part: Vec<FrequencyRow>,
    pub location: Vec<FrequencyRow>,
}

/// One point of the age/sex chart series.
///
/// `value` is `None` when the point cannot be computed (rate mode with no
/// population row for the group); charts skip exactly those points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub age: u8,
    pub sex: Sex,
    pub value: Option<f64>,
}

/// Everything a renderer needs to draw the dashboard for the current inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub product_code: Option<u32>,
    pub product_title: Option<String>,
    pub selection_size: usize,
    pub axis: AxisMode,
    pub summaries: Summaries,
    pub series: Vec<SeriesPoint>,
    /// Current narrative, or `None` when the selection is empty
    pub narrative: Option<String>,
}
