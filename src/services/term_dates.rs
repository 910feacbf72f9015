//! 合同有效期核对 - 业务能力层
//!
//! 页面上有两个互相独立的日期来源：
//! 1. 页头中的 `Maturity Date: <date>`
//! 2. 合同文档区中的 `Effective <start> - <end>` 文本
//!
//! 生效日期取 2 的开始日期；到期日期取 1 和 2 的结束日期中较晚的一个，
//! 返回的是原始字符串而不是重新格式化的日期。
//!
//! 与其他抽取器不同，这里任一来源缺失或日期无法解析都是硬失败：
//! 说明页面结构发生了变化，需要让调用方看到。

use crate::error::{DateError, ExtractError};
use crate::infrastructure::{NodeQuery, PageDocument};
use crate::services::selectors;
use chrono::NaiveDate;
use regex::Regex;
use scraper::Selector;
use tracing::debug;

/// 两个日期来源共用的 月/日/年 格式
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// 核对后的合同有效期
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractTerm {
    /// 生效日期（原始字符串）
    pub effective: Option<String>,
    /// 到期日期（原始字符串）
    pub expiration: String,
}

/// 有效期核对器
pub struct TermDateReconciler {
    header_paragraphs: Selector,
    documents_text: Selector,
    maturity: Regex,
    term_start: Regex,
    term_end: Regex,
}

impl TermDateReconciler {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            header_paragraphs: selectors::compile(selectors::HEADER_PARAGRAPHS)?,
            documents_text: selectors::compile(selectors::CONTRACT_DOCUMENTS_TEXT)?,
            maturity: selectors::pattern(selectors::MATURITY_DATE_PATTERN)?,
            term_start: selectors::pattern(selectors::TERM_START_PATTERN)?,
            term_end: selectors::pattern(selectors::TERM_END_PATTERN)?,
        })
    }

    /// 一次性得到生效日期和到期日期
    ///
    /// 到期日期缺失或无法解析时返回错误；生效日期找不到只是省略。
    pub fn reconcile(&self, doc: &PageDocument) -> Result<ContractTerm, ExtractError> {
        Ok(ContractTerm {
            effective: self.effective(doc),
            expiration: self.expiration(doc)?,
        })
    }

    /// 生效日期：`Effective` 与最后一个 `-` 之间的文本，不做日期解析
    fn effective(&self, doc: &PageDocument) -> Option<String> {
        doc.re_first(&self.documents_text, &self.term_start)
            .filter(|s| !s.is_empty())
    }

    /// 到期日期：两个来源中较晚的一个
    fn expiration(&self, doc: &PageDocument) -> Result<String, DateError> {
        let maturity = doc
            .re_first(&self.header_paragraphs, &self.maturity)
            .ok_or(DateError::MissingMaturityDate)?;
        let term_end = doc
            .re_first(&self.documents_text, &self.term_end)
            .ok_or(DateError::MissingTermDates)?;

        let expiration = later_expiration(&maturity, &term_end)?;
        debug!(
            "到期日核对: maturity={} term_end={} -> {}",
            maturity, term_end, expiration
        );
        Ok(expiration)
    }
}

/// 比较两个到期日期，返回较晚者的原始字符串（去首尾空白）
///
/// 只有 `term_end` 严格晚于 `maturity` 时才返回 `term_end`，相等时返回 `maturity`。
pub fn later_expiration(maturity: &str, term_end: &str) -> Result<String, DateError> {
    let maturity = maturity.trim();
    let term_end = term_end.trim();

    let maturity_date = parse_date("maturity", maturity)?;
    let term_end_date = parse_date("term_end", term_end)?;

    if term_end_date > maturity_date {
        Ok(term_end.to_string())
    } else {
        Ok(maturity.to_string())
    }
}

/// 按 月/日/年 解析日期，失败即报错，不做任何默认值回退
///
/// 年份必须是四位数字：chrono 的 `%Y` 也接受 `25` 这样的短年份并解析为公元 25 年。
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();
    let invalid = |reason: String| DateError::InvalidDate {
        field,
        value: value.to_string(),
        reason,
    };

    if !has_four_digit_year(value) {
        return Err(invalid("年份必须是四位数字".to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

fn has_four_digit_year(value: &str) -> bool {
    value
        .rsplit('/')
        .next()
        .map_or(false, |year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}
