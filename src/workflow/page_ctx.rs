//! 详情页处理上下文
//!
//! 封装"我正在处理第几个合同的哪个页面"这一信息

use std::fmt::Display;

/// 详情页处理上下文
#[derive(Debug, Clone)]
pub struct PageCtx {
    /// 详情页 URL（记录的 source_url）
    pub url: String,

    /// 全局序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 所在列表页序号（从1开始）
    pub listing_page: usize,
}

impl PageCtx {
    pub fn new(url: String, index: usize, listing_page: usize) -> Self {
        Self {
            url,
            index,
            listing_page,
        }
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[合同 #{} 列表页 {}] {}",
            self.index, self.listing_page, self.url
        )
    }
}
