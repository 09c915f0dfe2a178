use crate::data::DatasetSource;
use crate::error::ExplorerError;
use crate::session::{Session, SessionConfig};

use super::Dashboard;

/// Builder for a [`Dashboard`].
///
/// Loads the dataset exactly once at `build` time; the loaded tables are
/// immutable for the dashboard's lifetime.
pub struct DashboardBuilder {
    source: Option<Box<dyn DatasetSource>>,
    config: Option<SessionConfig>,
}

impl DashboardBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            config: None,
        }
    }

    /// The dataset to explore.
    pub fn source(mut self, source: impl DatasetSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Startup defaults for the session.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Dashboard, ExplorerError> {
        let source = self.source.ok_or_else(|| {
            ExplorerError::InvalidRequest("No dataset source set".to_string())
        })?;

        let session = match self.config {
            Some(config) => Session::with_config(config)?,
            None => Session::new(),
        };

        let records = source.load()?;
        let population = source.load_population()?;
        let products = source.load_products()?;
        log::debug!(
            "Loaded {} records, {} population rows, {} products",
            records.len(),
            population.len(),
            products.len()
        );

        Ok(Dashboard::new(records, population, products, session))
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
