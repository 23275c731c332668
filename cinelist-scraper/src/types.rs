//! Wire types for the catalog search API.
//!
//! The endpoint nests the listing three levels deep
//! (`content.products.content`); everything we don't read is left out and
//! ignored by serde. All fields are optional because the listing is
//! best-effort: the parser decides what is usable.

use serde::{Deserialize, Serialize};

/// Sort order requested from the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortType {
    PublicationDate,
    Title,
}

impl std::fmt::Display for SortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortType::PublicationDate => write!(f, "publication date"),
            SortType::Title => write!(f, "title"),
        }
    }
}

/// JSON body POSTed to the search endpoint for one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub with_aggregations: bool,
    pub included_product_categories_uuids: Vec<String>,
    pub sort_type: SortType,
    pub page_number: u32,
    pub page_size: u32,
}

/// Top-level response wrapper from the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub content: SearchContent,
}

#[derive(Debug, Deserialize)]
pub struct SearchContent {
    pub products: ProductPage,
}

#[derive(Debug, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub content: Vec<RawProduct>,
}

/// One product as listed by the source, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub directors: Option<Vec<String>>,
    #[serde(default)]
    pub production_year: Option<u16>,
    /// "PROGRAM" for films, "SERIE"/"PACK" otherwise.
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub seasons_count: Option<u32>,
    /// Runtime in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
}
