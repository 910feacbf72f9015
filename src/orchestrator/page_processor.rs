//! 单个详情页处理器 - 编排层
//!
//! ## 职责
//!
//! 抓取一个合同详情页并交给抽取流程，输出一条记录或一个错误。
//! 错误只影响这一个页面，由上层计数后继续处理其他页面。

use crate::error::AppResult;
use crate::infrastructure::Fetcher;
use crate::models::ContractRecord;
use crate::utils::logging::truncate_text;
use crate::workflow::{PageCtx, PageExtractor};
use tracing::{debug, info};

/// 处理单个详情页
///
/// # 参数
/// - `fetcher`: 页面抓取器
/// - `extractor`: 详情页抽取器
/// - `ctx`: 页面上下文
///
/// # 返回
/// 返回抽取出的合同记录
pub async fn process_page(
    fetcher: &dyn Fetcher,
    extractor: &PageExtractor,
    ctx: &PageCtx,
) -> AppResult<ContractRecord> {
    debug!("{} 📥 正在抓取详情页", ctx);

    let body = fetcher.fetch(&ctx.url).await?;
    let record = extractor.extract_html(&body, &ctx.url)?;

    info!(
        "{} ✓ {} | {}",
        ctx,
        record.contract_number.as_deref().unwrap_or("-"),
        truncate_text(record.title.as_deref().unwrap_or("-"), 60)
    );

    Ok(record)
}
