//! Catalog fetching and parsing for cinelist: a paginated HTTP client for
//! the source's search API and a strict-or-drop parser turning raw
//! products into [`cinelist_catalog::FilmEntry`] values.

pub mod client;
pub mod config;
pub mod error;
pub mod geo;
pub mod parse;
pub mod types;

pub use client::CatalogClient;
pub use config::{
    DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_UUID, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE,
    SourceConfig,
};
pub use error::FetchError;
pub use geo::{LICENSED_COUNTRY, current_country};
pub use parse::{DropReason, EntryParser, ParseStats};
pub use types::{RawProduct, SortType};
