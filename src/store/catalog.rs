use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;

use crate::models::accessory::Accessory;
use crate::models::product::Product;

/// Loads the product catalog from its flat JSON file.
///
/// A missing file is an empty catalog; malformed JSON is a configuration
/// fault of the data collaborator and aborts startup.
pub async fn load_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    read_collection(path)
        .await
        .with_context(|| format!("reading product catalog from {}", path.display()))
}

/// Loads the accessory catalog from its flat JSON file.
pub async fn load_accessories(path: &Path) -> anyhow::Result<Vec<Accessory>> {
    read_collection(path)
        .await
        .with_context(|| format!("reading accessory catalog from {}", path.display()))
}

async fn read_collection<T>(path: &Path) -> anyhow::Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
