use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogImage {
    /// 1-based position in filename order.
    pub id: usize,
    pub filename: String,
    pub url: String,
}

impl CatalogImage {
    pub fn new(position: usize, filename: String) -> Self {
        let url = format!("/static/catalog/{filename}");
        Self {
            id: position + 1,
            filename,
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogListing {
    pub images: Vec<CatalogImage>,
    pub total: usize,
}

impl From<Vec<CatalogImage>> for CatalogListing {
    fn from(images: Vec<CatalogImage>) -> Self {
        let total = images.len();
        Self { images, total }
    }
}
