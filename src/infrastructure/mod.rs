//! 基础设施层：持有页面资源与网络资源，只暴露能力

pub mod fetcher;
pub mod page_document;

pub use fetcher::{Fetcher, HttpFetcher};
pub use page_document::{NodeQuery, PageDocument};
