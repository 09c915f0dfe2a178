//! # injury-explorer
//!
//! Core logic for an interactive exploration dashboard over a fixed tabular
//! dataset of injury records.
//!
//! A host picks a consumer product; the crate filters the record set to that
//! product, computes weighted summary tables (diagnosis, body part,
//! location), joins the selection against census population counts for a
//! per-10,000 injury-rate series, and steps through the accident narratives
//! one click at a time with wraparound at both ends.
//!
//! The reactive recomputation of the original UI is modeled as an explicit
//! data-flow graph in [`dashboard`]; no UI framework is assumed. Rendering,
//! charting, and file ingestion stay with the host.
//!
//! ```
//! use injury_explorer::{Dashboard, InMemoryDataset};
//!
//! let dashboard = Dashboard::builder()
//!     .source(InMemoryDataset::default())
//!     .build()
//!     .unwrap();
//! assert_eq!(dashboard.narrative(), None);
//! ```

pub mod aggregate;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod rate;
pub mod selection;
pub mod session;
pub mod stepper;

pub use aggregate::{top_k_frequency, CategoryField, FrequencyRow, OTHER_LABEL};
pub use dashboard::{Dashboard, DashboardBuilder, DashboardSnapshot, SeriesPoint, Summaries};
pub use data::{
    DatasetSource, InMemoryDataset, PopulationRow, PopulationTable, ProductCatalog,
    ProductEntry, Record, Sex,
};
pub use error::ExplorerError;
pub use rate::{rate_by_age_sex, AgeSexRate, RATE_SCALE};
pub use selection::filter_by_product;
pub use session::{AxisMode, Session, SessionConfig, DEFAULT_SUMMARY_ROWS};
pub use stepper::{checked_index, wrapped_index, WrapPolicy};

/// Initializes `env_logger` for binaries and examples that want log output.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(false).try_init();
}
