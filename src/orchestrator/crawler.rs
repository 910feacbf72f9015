//! 合同抓取器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责列表遍历、详情页并发处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载站点配置、创建 HTTP 抓取器和抽取器
//! 2. **列表遍历**：从起始页开始，沿 "下一页" 链接逐页前进
//! 3. **并发控制**：使用 Semaphore 限制同时处理的详情页数量
//! 4. **分批处理**：每个列表页的详情页作为一批，完成后再进入下一页
//! 5. **失败隔离**：单个页面的抓取或日期硬失败只记录并计数
//! 6. **全局统计**：汇总所有页面的处理结果

use crate::config::Config;
use crate::error::{AppError, AppResult, ExtractError};
use crate::infrastructure::{Fetcher, HttpFetcher, PageDocument};
use crate::models::{load_site_profile, SiteProfile};
use crate::orchestrator::page_processor;
use crate::services::{ListingPage, ListingTraversal, RecordSink, RecordWriter};
use crate::utils::logging::{log_batch_complete, log_listing_page, log_startup, print_final_stats};
use crate::workflow::{PageCtx, PageExtractor};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};
use url::Url;

/// 抓取统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// 成功遍历的列表页数
    pub listing_pages: usize,
    /// 发现的详情页数
    pub contracts_found: usize,
    /// 成功输出的记录数
    pub extracted: usize,
    /// 失败的详情页数
    pub failed: usize,
    /// 其中因日期核对失败的页数
    pub date_failures: usize,
}

/// 一个列表页批次的处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    date_failures: usize,
}

/// 列表遍历 + 详情页并发抓取
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<PageExtractor>,
    listing: ListingTraversal,
    max_concurrent_pages: usize,
    max_listing_pages: Option<usize>,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, profile: &SiteProfile, config: &Config) -> AppResult<Self> {
        let base_url = Url::parse(&profile.base_url).map_err(|source| ExtractError::InvalidBaseUrl {
            url: profile.base_url.clone(),
            source,
        })?;

        Ok(Self {
            fetcher,
            extractor: Arc::new(PageExtractor::new(profile)?),
            listing: ListingTraversal::new(base_url)?,
            max_concurrent_pages: config.max_concurrent_pages.max(1),
            max_listing_pages: config.max_listing_pages,
        })
    }

    /// 从起始列表页开始抓取，直到没有下一页
    ///
    /// 起始页抓取失败返回错误；之后的列表页失败只结束遍历。
    /// 输出端写入失败是致命错误。
    pub async fn crawl(&self, start_url: &str, sink: &dyn RecordSink) -> AppResult<CrawlStats> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_pages));
        let mut stats = CrawlStats::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut next = Some(start_url.to_string());

        while let Some(page_url) = next.take() {
            if let Some(limit) = self.max_listing_pages {
                if stats.listing_pages >= limit {
                    info!("📄 已达到列表页上限 {}，停止遍历", limit);
                    break;
                }
            }

            if !visited.insert(page_url.clone()) {
                warn!("⚠️ 列表页重复出现，停止遍历: {}", page_url);
                break;
            }

            let body = match self.fetcher.fetch(&page_url).await {
                Ok(body) => body,
                Err(e) if stats.listing_pages == 0 => return Err(e),
                Err(e) => {
                    error!("❌ 列表页抓取失败，停止遍历: {}", e);
                    break;
                }
            };

            stats.listing_pages += 1;
            let listing = self.parse_listing(&body, &page_url);
            log_listing_page(
                stats.listing_pages,
                listing.contract_urls.len(),
                listing.next_page.is_some(),
            );

            let total = listing.contract_urls.len();
            let first_index = stats.contracts_found + 1;
            stats.contracts_found += total;

            let batch = self
                .process_batch(
                    listing.contract_urls,
                    first_index,
                    stats.listing_pages,
                    semaphore.clone(),
                    sink,
                )
                .await?;

            stats.extracted += batch.success;
            stats.failed += batch.failed;
            stats.date_failures += batch.date_failures;
            log_batch_complete(stats.listing_pages, batch.success, total);

            next = listing.next_page;
        }

        Ok(stats)
    }

    /// 列表页文档只在这个同步调用内存在
    fn parse_listing(&self, body: &str, page_url: &str) -> ListingPage {
        let doc = PageDocument::parse(body);
        self.listing.parse_listing(&doc, page_url)
    }

    /// 处理一个列表页上的所有详情页
    async fn process_batch(
        &self,
        urls: Vec<String>,
        first_index: usize,
        listing_page: usize,
        semaphore: Arc<Semaphore>,
        sink: &dyn RecordSink,
    ) -> AppResult<BatchResult> {
        let mut handles = Vec::with_capacity(urls.len());

        // 为本批创建并发任务
        for (offset, url) in urls.into_iter().enumerate() {
            let ctx = PageCtx::new(url, first_index + offset, listing_page);
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| AppError::Task(e.to_string()))?;

            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);
            let task_ctx = ctx.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                page_processor::process_page(fetcher.as_ref(), &extractor, &task_ctx).await
            });
            handles.push((ctx, handle));
        }

        // 按页面顺序等待并输出
        let mut result = BatchResult::default();

        let mut pending = handles.into_iter();
        while let Some((ctx, handle)) = pending.next() {
            match handle.await {
                Ok(Ok(record)) => {
                    if let Err(e) = sink.accept(&record).await {
                        error!("{} ❌ 记录写入失败，取消本批剩余任务: {}", ctx, e);
                        for (_, rest) in pending.by_ref() {
                            rest.abort();
                        }
                        return Err(e);
                    }
                    result.success += 1;
                }
                Ok(Err(e)) => {
                    if e.is_date_failure() {
                        result.date_failures += 1;
                        error!("{} ❌ 日期核对失败，页面结构可能已变化: {}", ctx, e);
                    } else {
                        error!("{} ❌ 处理失败: {}", ctx, e);
                    }
                    result.failed += 1;
                }
                Err(e) => {
                    error!("{} 任务执行失败: {}", ctx, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    crawler: Crawler,
    writer: RecordWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let profile = match &config.site_profile_path {
            Some(path) => load_site_profile(Path::new(path))
                .await
                .with_context(|| format!("无法加载站点配置: {}", path))?,
            None => SiteProfile::sourcewell(),
        };

        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config)?);
        let crawler = Crawler::new(fetcher, &profile, &config)?;

        let writer = RecordWriter::with_path(config.output_file.clone());
        writer
            .truncate()
            .await
            .with_context(|| format!("无法创建输出文件: {}", config.output_file))?;

        Ok(Self {
            config,
            crawler,
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<CrawlStats> {
        let stats = self
            .crawler
            .crawl(&self.config.start_url, &self.writer)
            .await
            .context("抓取失败")?;

        print_final_stats(
            stats.listing_pages,
            stats.extracted,
            stats.failed,
            stats.contracts_found,
            self.writer.path(),
        );

        if stats.date_failures > 0 {
            warn!(
                "⚠️ {} 个页面日期核对失败，请检查页面结构",
                stats.date_failures
            );
        }

        Ok(stats)
    }
}
