use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A size/color variant of a catalog product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub stock: u32,
}

/// Product imagery as stored in the catalog: either a keyed object with a
/// `main` entry or a bare list of URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductImages {
    List(Vec<String>),
    Keyed {
        #[serde(default)]
        main: Option<String>,
    },
}

impl ProductImages {
    fn primary(&self) -> Option<&str> {
        match self {
            ProductImages::List(urls) => urls.first().map(String::as_str),
            ProductImages::Keyed { main } => main.as_deref(),
        }
    }
}

/// Coarse silhouette length inferred from the product's free text.
/// Informational metadata only; never filtered on, never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DressLength {
    Maxi,
    Midi,
    Mini,
}

/// A catalog product, owned by the product catalog collaborator and
/// consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub occasion: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "dominantColor")]
    pub dominant_color: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<ProductImages>,
}

impl Product {
    /// Distinct upper-cased size codes across the top-level list and all
    /// variants.
    pub fn size_codes(&self) -> BTreeSet<String> {
        self.sizes
            .iter()
            .map(String::as_str)
            .chain(self.variants.iter().filter_map(|v| v.size.as_deref()))
            .map(str::to_uppercase)
            .collect()
    }

    /// Lower-cased occasion-bearing terms: the category, the occasion tags,
    /// and the free-form tags.
    pub fn occasion_terms(&self) -> Vec<String> {
        std::iter::once(self.category.as_str())
            .chain(self.occasion.iter().map(String::as_str))
            .chain(self.tags.iter().map(String::as_str))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Lower-cased terms from every field that can carry a color: the
    /// explicit color, the dominant color, the color list, the free-form
    /// tags, and each variant's color.
    pub fn color_terms(&self) -> Vec<String> {
        self.color
            .iter()
            .chain(self.dominant_color.iter())
            .chain(self.colors.iter())
            .chain(self.tags.iter())
            .map(String::as_str)
            .chain(self.variants.iter().filter_map(|v| v.color.as_deref()))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Best-effort primary image for listings.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(ProductImages::primary)
            .or(self.image.as_deref())
    }

    /// Infers the silhouette length from the title, tags, and description.
    pub fn dress_length(&self) -> Option<DressLength> {
        let blob = format!("{} {} {}", self.title, self.tags.join(" "), self.description)
            .to_lowercase();
        if blob.contains("maxi") {
            Some(DressLength::Maxi)
        } else if blob.contains("midi") {
            Some(DressLength::Midi)
        } else if blob.contains("mini") {
            Some(DressLength::Mini)
        } else {
            None
        }
    }
}
