/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::error::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 日志过滤器：优先使用 RUST_LOG，否则按 verbose 选择 debug / info
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// 只输出到终端（测试和库使用）
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .try_init();
}

/// 同时输出到终端和日志文件
///
/// # 参数
/// - `verbose`: 是否输出 debug 日志
/// - `log_file_path`: 日志文件路径（会先写入文件头）
pub fn init_with_file(verbose: bool, log_file_path: &str) -> AppResult<()> {
    init_log_file(log_file_path)?;

    let file = OpenOptions::new()
        .append(true)
        .open(log_file_path)
        .map_err(|e| AppError::io(log_file_path, e))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(())
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n合同抓取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header).map_err(|e| AppError::io(log_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 合同列表抓取模式");
    info!("🌐 起始页: {}", config.start_url);
    info!("📊 最大并发数: {}", config.max_concurrent_pages);
    if let Some(limit) = config.max_listing_pages {
        info!("📄 最多遍历 {} 个列表页", limit);
    }
    info!("{}", "=".repeat(60));
}

/// 记录列表页解析结果
///
/// # 参数
/// - `page_num`: 列表页序号
/// - `found`: 本页合同数量
/// - `has_next`: 是否还有下一页
pub fn log_listing_page(page_num: usize, found: usize, has_next: bool) {
    info!("\n{}", "=".repeat(60));
    info!("📦 第 {} 个列表页: 找到 {} 个合同", page_num, found);
    if !has_next {
        info!("🏁 没有下一页，分页结束");
    }
    info!("{}", "=".repeat(60));
}

/// 记录列表页批次完成信息
pub fn log_batch_complete(page_num: usize, success: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 个列表页完成: 成功 {}/{}", page_num, success, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `listing_pages`: 遍历的列表页数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `output_path`: 记录输出文件
pub fn print_final_stats(
    listing_pages: usize,
    success: usize,
    failed: usize,
    total: usize,
    output_path: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 列表页: {}", listing_pages);
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n记录已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
