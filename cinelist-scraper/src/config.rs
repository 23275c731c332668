//! Source endpoint configuration.
//!
//! Built once at process start and handed to [`crate::CatalogClient`] at
//! construction; nothing in this crate reads globals or the environment.

/// Search endpoint of the Médiathèque numérique proxy API.
pub const DEFAULT_ENDPOINT: &str =
    "https://vod.mediatheque-numerique.com/api/proxy/api/product/search";

/// Product-category UUID of the "Cinema" section.
pub const DEFAULT_CATEGORY_UUID: &str = "5fcf8750-bada-442c-84b4-fe05b949fba2";

/// Name of the category the default UUID corresponds to.
pub const DEFAULT_CATEGORY_NAME: &str = "Cinema";

pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Where and how to fetch the catalog.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub endpoint: String,
    /// Category UUID the search is scoped to.
    pub category_uuid: String,
    /// Category name stamped onto entries parsed from this source. The
    /// search itself is already scoped to `category_uuid`, so every product
    /// in the response belongs to this category.
    pub category_name: String,
    pub page_size: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            category_uuid: DEFAULT_CATEGORY_UUID.to_string(),
            category_name: DEFAULT_CATEGORY_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
