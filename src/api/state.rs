use std::sync::Arc;

use crate::config::Config;
use crate::models::accessory::Accessory;
use crate::models::product::Product;
use crate::store::{catalog, SubmissionStore};

/// Shared application state: immutable catalog snapshots plus the
/// append-only submission log.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<Vec<Product>>,
    pub accessories: Arc<Vec<Accessory>>,
    pub submissions: Arc<SubmissionStore>,
}

impl AppState {
    /// Builds state from already-loaded collections.
    pub fn new(
        products: Vec<Product>,
        accessories: Vec<Accessory>,
        submissions: SubmissionStore,
    ) -> Self {
        Self {
            products: Arc::new(products),
            accessories: Arc::new(accessories),
            submissions: Arc::new(submissions),
        }
    }

    /// Loads the catalog snapshots and opens the submission log per `config`.
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let products = catalog::load_products(&config.products_path()).await?;
        let accessories = catalog::load_accessories(&config.accessories_path()).await?;
        let submissions = SubmissionStore::open(config.submissions_path()).await?;

        tracing::info!(
            products = products.len(),
            accessories = accessories.len(),
            "catalog snapshots loaded"
        );

        Ok(Self::new(products, accessories, submissions))
    }
}
