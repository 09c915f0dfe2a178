//! Explicit data-flow graph over the loaded dataset.
//!
//! The original UI recomputed derived values through an implicit reactive
//! runtime. Here the dependencies are a fixed four-stage graph re-evaluated
//! on input change, so every stage stays testable without a UI host:
//!
//! ```text
//! product code ──> selection ──> summaries   (selection, row count)
//!                      │    ───> series      (selection, axis mode)
//!                      └───────> narrative   (selection, net position)
//! ```
//!
//! Setters recompute only the stages downstream of the input they change.

mod builder;
mod snapshot;

pub use builder::DashboardBuilder;
pub use snapshot::{DashboardSnapshot, SeriesPoint, Summaries};

use rand::Rng;

use crate::aggregate::{top_k_frequency, CategoryField};
use crate::data::{PopulationTable, ProductCatalog, Record};
use crate::rate::rate_by_age_sex;
use crate::selection::filter_by_product;
use crate::session::{AxisMode, Session};
use crate::stepper::{wrapped_index, WrapPolicy};

/// One user's view over the immutable dataset.
#[derive(Debug)]
pub struct Dashboard {
    records: Vec<Record>,
    population: PopulationTable,
    products: ProductCatalog,
    session: Session,
    selection: Vec<Record>,
    summaries: Summaries,
    series: Vec<SeriesPoint>,
    narrative: Option<String>,
}

impl Dashboard {
    pub(crate) fn new(
        records: Vec<Record>,
        population: PopulationTable,
        products: ProductCatalog,
        session: Session,
    ) -> Self {
        let mut dashboard = Self {
            records,
            population,
            products,
            session,
            selection: Vec::new(),
            summaries: Summaries::default(),
            series: Vec::new(),
            narrative: None,
        };
        dashboard.recompute_selection();
        dashboard
    }

    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The product lookup table, for selector controls.
    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    /// The currently filtered record set.
    pub fn selection(&self) -> &[Record] {
        &self.selection
    }

    pub fn summaries(&self) -> &Summaries {
        &self.summaries
    }

    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    /// Narrative of the current record, or `None` for an empty selection.
    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    /// Selects a product and recomputes everything downstream.
    pub fn select_product(&mut self, code: u32) {
        self.session.select_product(code);
        self.recompute_selection();
        if self.selection.is_empty() {
            log::debug!("No records for product code {code}");
        }
    }

    /// Selects a product by its human-readable title.
    pub fn select_product_by_title(&mut self, title: &str) -> bool {
        match self.products.code_for_title(title) {
            Some(code) => {
                self.select_product(code);
                true
            }
            None => false,
        }
    }

    pub fn set_axis(&mut self, axis: AxisMode) {
        self.session.set_axis(axis);
        self.recompute_series();
    }

    pub fn set_summary_rows(&mut self, rows: usize) {
        self.session.set_summary_rows(rows);
        self.recompute_summaries();
    }

    pub fn set_wrap_policy(&mut self, wrap: WrapPolicy) {
        self.session.set_wrap_policy(wrap);
        self.recompute_narrative();
    }

    /// One "next narrative" click.
    pub fn next_narrative(&mut self) -> Option<&str> {
        self.session.advance();
        self.recompute_narrative();
        self.narrative()
    }

    /// One "previous narrative" click.
    pub fn previous_narrative(&mut self) -> Option<&str> {
        self.session.step_back();
        self.recompute_narrative();
        self.narrative()
    }

    /// A uniformly random narrative from the current selection, leaving the
    /// step position untouched.
    pub fn random_narrative<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        if self.selection.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.selection.len());
        Some(&self.selection[index].narrative)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let product_code = self.session.product();
        DashboardSnapshot {
            product_code,
            product_title: product_code
                .and_then(|code| self.products.title_of(code))
                .map(str::to_string),
            selection_size: self.selection.len(),
            axis: self.session.axis(),
            summaries: self.summaries.clone(),
            series: self.series.clone(),
            narrative: self.narrative.clone(),
        }
    }

    fn recompute_selection(&mut self) {
        self.selection = match self.session.product() {
            Some(code) => filter_by_product(&self.records, code),
            None => Vec::new(),
        };
        self.recompute_summaries();
        self.recompute_series();
        self.recompute_narrative();
    }

    fn recompute_summaries(&mut self) {
        let rows = self.session.summary_rows();
        self.summaries = Summaries {
            diagnosis: top_k_frequency(&self.selection, CategoryField::Diagnosis, rows),
            body_part: top_k_frequency(&self.selection, CategoryField::BodyPart, rows),
            location: top_k_frequency(&self.selection, CategoryField::Location, rows),
        };
    }

    fn recompute_series(&mut self) {
        let axis = self.session.axis();
        self.series = rate_by_age_sex(&self.selection, &self.population)
            .into_iter()
            .map(|row| SeriesPoint {
                age: row.age,
                sex: row.sex,
                value: match axis {
                    AxisMode::Rate => row.rate,
                    AxisMode::Count => Some(row.injury_count),
                },
            })
            .collect();
    }

    fn recompute_narrative(&mut self) {
        self.narrative = wrapped_index(
            self.session.net_position(),
            self.selection.len(),
            self.session.wrap_policy(),
        )
        .map(|index| self.selection[index - 1].narrative.clone());
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
