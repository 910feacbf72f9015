//! 页头与摘要抽取 - 业务能力层
//!
//! 供应商、合同标题、合同编号、产品/服务摘要。全部是软失败：找不到就省略。

use crate::error::{ExtractError, FieldResult};
use crate::infrastructure::{NodeQuery, PageDocument};
use crate::services::selectors;
use regex::Regex;
use scraper::Selector;

/// 页头抽取器
pub struct HeaderExtractor {
    h1: Selector,
    lead: Selector,
    paragraphs: Selector,
    summary_items: Selector,
    contract_number: Regex,
}

impl HeaderExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            h1: selectors::compile(selectors::HEADER_H1)?,
            lead: selectors::compile(selectors::HEADER_LEAD)?,
            paragraphs: selectors::compile(selectors::HEADER_PARAGRAPHS)?,
            summary_items: selectors::compile(selectors::SUMMARY_ITEMS)?,
            contract_number: selectors::pattern(selectors::CONTRACT_NUMBER_PATTERN)?,
        })
    }

    /// 供应商名称（页头 h1）
    pub fn suppliers(&self, doc: &PageDocument) -> FieldResult<String> {
        Ok(doc.first_text(&self.h1))
    }

    /// 合同标题（页头 p.lead）
    pub fn title(&self, doc: &PageDocument) -> FieldResult<String> {
        Ok(doc.first_text(&self.lead))
    }

    /// 合同编号：页头段落中以 `#` 开头的片段
    pub fn contract_number(&self, doc: &PageDocument) -> FieldResult<String> {
        Ok(doc
            .re_first(&self.paragraphs, &self.contract_number)
            .filter(|n| !n.is_empty()))
    }

    /// 产品/服务摘要：所有列表项以 ", " 连接
    pub fn summary(&self, doc: &PageDocument) -> FieldResult<String> {
        let items = doc.texts(&self.summary_items);
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
        <div class="vendor-contract-header__content">
          <h1>ACME Roofing Inc.</h1>
          <p class="lead">Roofing, Siding, and Related Products</p>
          <p>Contract #020817-ACR</p>
          <p>Maturity Date: 06/30/2024</p>
        </div>
        <div class="field--name-field-ps-summary">
          <ul><li>Roofing</li><li>Siding</li><li>Gutters</li></ul>
        </div>
    "#;

    #[test]
    fn test_header_fields() {
        let extractor = HeaderExtractor::new().unwrap();
        let doc = PageDocument::parse(HEADER);

        assert_eq!(extractor.suppliers(&doc).unwrap().as_deref(), Some("ACME Roofing Inc."));
        assert_eq!(
            extractor.title(&doc).unwrap().as_deref(),
            Some("Roofing, Siding, and Related Products")
        );
        assert_eq!(
            extractor.contract_number(&doc).unwrap().as_deref(),
            Some("#020817-ACR")
        );
        assert_eq!(
            extractor.summary(&doc).unwrap().as_deref(),
            Some("Roofing, Siding, Gutters")
        );
    }

    #[test]
    fn test_missing_header_yields_nothing() {
        let extractor = HeaderExtractor::new().unwrap();
        let doc = PageDocument::parse("<html><body><p>Contract #123</p></body></html>");

        assert_eq!(extractor.suppliers(&doc).unwrap(), None);
        assert_eq!(extractor.title(&doc).unwrap(), None);
        assert_eq!(extractor.contract_number(&doc).unwrap(), None);
        assert_eq!(extractor.summary(&doc).unwrap(), None);
    }

    #[test]
    fn test_header_without_number() {
        let extractor = HeaderExtractor::new().unwrap();
        let doc = PageDocument::parse(
            r#"<div class="vendor-contract-header__content"><p>No number here</p></div>"#,
        );
        assert_eq!(extractor.contract_number(&doc).unwrap(), None);
    }
}
