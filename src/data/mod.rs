mod population;
mod products;
mod record;
mod source;

pub use population::{PopulationRow, PopulationTable};
pub use products::{ProductCatalog, ProductEntry};
pub use record::{Record, Sex};
pub use source::{DatasetSource, InMemoryDataset};
