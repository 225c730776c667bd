use serde::{Deserialize, Serialize};

/// An accessory catalog entry, owned by the accessory collaborator and
/// consumed read-only here. Categories are an open set curated in the data
/// (hats, jewelry, bags, beauty, outerwear, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessory {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
