use serde::Deserialize;

use crate::error::ExplorerError;

use super::population::{PopulationRow, PopulationTable};
use super::products::{ProductCatalog, ProductEntry};
use super::record::Record;

/// Provider of the three tables the dashboard is built over.
///
/// Implementations own ingestion and validation; once loaded the data is
/// treated as immutable for the lifetime of the process.
pub trait DatasetSource {
    /// The full injury record set, in stable source order.
    fn load(&self) -> Result<Vec<Record>, ExplorerError>;

    /// Census population counts keyed by (age, sex).
    fn load_population(&self) -> Result<PopulationTable, ExplorerError>;

    /// The product code to title lookup table.
    fn load_products(&self) -> Result<ProductCatalog, ExplorerError>;
}

#[derive(Debug, Deserialize)]
struct DatasetDoc {
    records: Vec<Record>,
    population: Vec<PopulationRow>,
    products: Vec<ProductEntry>,
}

/// Dataset source over already-materialized tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    records: Vec<Record>,
    population: PopulationTable,
    products: ProductCatalog,
}

impl InMemoryDataset {
    pub fn new(
        records: Vec<Record>,
        population: PopulationTable,
        products: ProductCatalog,
    ) -> Self {
        Self {
            records,
            population,
            products,
        }
    }

    /// Parses a JSON document with `records`, `population`, and `products`
    /// arrays into an in-memory dataset.
    pub fn from_json_str(json: &str) -> Result<Self, ExplorerError> {
        let doc: DatasetDoc = serde_json::from_str(json)?;
        Ok(Self {
            records: doc.records,
            population: PopulationTable::from_rows(doc.population),
            products: ProductCatalog::from_entries(doc.products),
        })
    }
}

impl DatasetSource for InMemoryDataset {
    fn load(&self) -> Result<Vec<Record>, ExplorerError> {
        Ok(self.records.clone())
    }

    fn load_population(&self) -> Result<PopulationTable, ExplorerError> {
        Ok(self.population.clone())
    }

    fn load_products(&self) -> Result<ProductCatalog, ExplorerError> {
        Ok(self.products.clone())
    }
}
