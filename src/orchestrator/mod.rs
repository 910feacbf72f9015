//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责列表遍历和并发调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `crawler` - 合同抓取器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 逐页遍历列表页（ListingTraversal）
//! - 控制并发数量（Semaphore）
//! - 按页面顺序把记录交给输出端（RecordSink）
//!
//! ### `page_processor` - 单个详情页处理器
//! - 抓取一个详情页
//! - 调用 PageExtractor 生成一条记录
//!
//! ## 层次关系
//!
//! ```text
//! crawler (处理列表页 → Vec<详情页 URL>)
//!     ↓
//! page_processor (处理单个详情页)
//!     ↓
//! workflow::PageExtractor (抽取一条 ContractRecord)
//!     ↓
//! services (能力层：header / dates / documents / contacts)
//!     ↓
//! infrastructure (基础设施：Fetcher、PageDocument)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：crawler 管遍历和并发，page_processor 管单个页面
//! 2. **资源隔离**：只有编排层持有 Fetcher
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod crawler;
pub mod page_processor;

// 重新导出主要类型
pub use crawler::{App, CrawlStats, Crawler};
pub use page_processor::process_page;
