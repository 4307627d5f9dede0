//! ScrapWave: structured data extraction from HTML pages
//!
//! Turns an HTML document into structured products:
//! - Page metadata (title, description, OpenGraph, Twitter Card)
//! - Link and image inventories with URL normalization
//! - Table matrices and form descriptors
//! - Contact identifiers (emails, phone numbers)
//! - JSON-LD blocks (best-effort decode)
//!
//! [`Page`] wraps one parsed document; all extractors are read-only queries
//! against it and never error on missing elements. [`Client`] is the
//! retrieval facade: URL validation, GET/POST fetching with rotating
//! user-agents, and concurrent image downloads.
//!
//! ```
//! use scrapwave::Page;
//!
//! let page = Page::parse("<html><head><title>Demo</title></head></html>");
//! assert_eq!(page.title(), "Demo");
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod page;
pub mod urls;

pub use client::{Client, FetchConfig, ImageOutcome};
pub use error::ScrapeError;
pub use extractors::{ContactInfo, FormDetails, ImageData, Metadata, TableMatrix};
pub use page::Page;
pub use urls::{is_absolute, resolve};
