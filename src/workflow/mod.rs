pub mod contract_flow;
pub mod page_ctx;

pub use contract_flow::PageExtractor;
pub use page_ctx::PageCtx;
