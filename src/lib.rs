//! # Sourcewell Scraper
//!
//! 抓取 Sourcewell 合作采购合同列表，并把每个合同详情页转换为一条结构化记录
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有网络资源和已解析的页面，只暴露能力
//! - `Fetcher` / `HttpFetcher` - 按 URL 取回页面 HTML
//! - `PageDocument` / `NodeQuery` - 只读的选择器查询能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能抽取什么"，只处理单个页面
//! - `HeaderExtractor` - 供应商、标题、合同编号、摘要
//! - `TermDateReconciler` - 到期日核对（唯一的硬失败）
//! - `DocumentClassifier` - 合同文档分类与价格文件
//! - `ContactExtractor` - 供应商 / 采购方联系人
//! - `ListingTraversal` - 列表页详情链接与分页
//! - `RecordWriter` - 写入 JSON Lines 输出
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个详情页"的完整抽取流程
//! - `PageCtx` - 上下文封装（url + 序号）
//! - `PageExtractor` - 流程编排（页头 → 日期 → 文档 → 联系人）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/crawler` - 列表遍历，管理资源和并发
//! - `orchestrator/page_processor` - 单个详情页处理器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, DateError, ExtractError};
pub use infrastructure::{Fetcher, HttpFetcher, PageDocument};
pub use models::{ContractRecord, SiteProfile};
pub use orchestrator::{App, CrawlStats, Crawler};
pub use services::{RecordSink, RecordWriter};
pub use workflow::{PageCtx, PageExtractor};
