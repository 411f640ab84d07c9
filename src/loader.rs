use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    model::{Platform, Price, PriceHistory, PriceObservation, Product},
};

pub trait CatalogLoader {
    fn load(&self) -> Result<Vec<Product>>;
}

/// The three listings the dashboard ships with.
pub struct SampleCatalog {}

const SAMPLES: [(u64, &str, Platform, [(&str, Price); 3]); 3] = [
    (
        1,
        "Smartphone X",
        Platform::Tokopedia,
        [
            ("2024-06-01", 3_650_000.0),
            ("2024-06-08", 3_700_000.0),
            ("2024-06-15", 3_500_000.0),
        ],
    ),
    (
        2,
        "Laptop Y",
        Platform::Shopee,
        [
            ("2024-06-01", 8_100_000.0),
            ("2024-06-08", 7_990_000.0),
            ("2024-06-15", 7_640_000.0),
        ],
    ),
    (
        3,
        "Sendal Jepit",
        Platform::Bukalapak,
        [
            ("2024-06-01", 29_500.0),
            ("2024-06-08", 29_000.0),
            ("2024-06-15", 30_000.0),
        ],
    ),
];

impl CatalogLoader for SampleCatalog {
    fn load(&self) -> Result<Vec<Product>> {
        SAMPLES
            .iter()
            .map(|(id, name, platform, history)| {
                let history = history
                    .iter()
                    .map(|(date, price)| {
                        Ok(PriceObservation::new(
                            NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
                            *price,
                        ))
                    })
                    .collect::<Result<PriceHistory>>()?;

                let product = Product::new(*id, *name, *platform, 0.0, history);
                product.validate()?;
                Ok(product)
            })
            .collect()
    }
}

/// A JSON array of products on disk.
pub struct JsonCatalog {
    pub path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogLoader for JsonCatalog {
    fn load(&self) -> Result<Vec<Product>> {
        let file = File::open(&self.path)?;
        let products: Vec<Product> = serde_json::from_reader(BufReader::new(file))?;

        if let Some(id) = products.iter().map(|p| p.id).duplicates().next() {
            return Err(Error::DuplicateProduct(id));
        }

        for product in &products {
            product.validate().map_err(|err| {
                warn!(id = %product.id, %err, "rejecting catalog");
                err
            })?;
        }

        debug!(path = %self.path.display(), products = products.len(), "catalog loaded");

        Ok(products)
    }
}
