//! Sourcewell 页面选择器
//!
//! 所有选择器和正则在抽取器创建时编译一次，之后只读共享。

use crate::error::ExtractError;
use regex::Regex;
use scraper::Selector;

pub const HEADER_H1: &str = ".vendor-contract-header__content h1";
pub const HEADER_LEAD: &str = ".vendor-contract-header__content p.lead";
pub const HEADER_PARAGRAPHS: &str = ".vendor-contract-header__content p";
pub const SUMMARY_ITEMS: &str = ".field--name-field-ps-summary li";
pub const CONTRACT_DOCUMENTS_TEXT: &str = "#tab-contract-documents div";
pub const FILE_LINKS: &str = ".file-icon + .file-link a";
pub const PRICING_LINKS: &str = "#tab-pricing a";

pub const SUPPLIER_CONTACT_SCOPE: &str = ".field--name-field-vendor-contact-info + article";
pub const BUYER_CONTACT_SCOPE: &str = ".field--name-field-sourcewell-contact-info + article";
pub const CONTACT_NAME: &str = "strong";
pub const CONTACT_PHONE: &str = ".field--label-inline .field--item";
pub const CONTACT_EMAIL: &str = ".field--label-inline .field--item a";

pub const LISTING_CONTRACT_LINKS: &str = "div a.component__search-vendors-contracts-title";
pub const LISTING_NEXT_PAGE: &str = r#"a[rel="next"]"#;

pub const CONTRACT_NUMBER_PATTERN: &str = r"(#.+)";
pub const MATURITY_DATE_PATTERN: &str = r"Maturity Date:(.+)";
pub const TERM_START_PATTERN: &str = r"Effective(.+)-";
pub const TERM_END_PATTERN: &str = r"Effective.+-(.+)";

/// 编译单个选择器
pub fn compile(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::invalid_selector(css, e))
}

/// 编译单个正则
pub fn pattern(re: &str) -> Result<Regex, ExtractError> {
    Regex::new(re).map_err(|source| ExtractError::InvalidPattern {
        pattern: re.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_compile() {
        for css in [
            HEADER_H1,
            HEADER_LEAD,
            HEADER_PARAGRAPHS,
            SUMMARY_ITEMS,
            CONTRACT_DOCUMENTS_TEXT,
            FILE_LINKS,
            PRICING_LINKS,
            SUPPLIER_CONTACT_SCOPE,
            BUYER_CONTACT_SCOPE,
            CONTACT_NAME,
            CONTACT_PHONE,
            CONTACT_EMAIL,
            LISTING_CONTRACT_LINKS,
            LISTING_NEXT_PAGE,
        ] {
            assert!(compile(css).is_ok(), "选择器无法编译: {}", css);
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        for re in [
            CONTRACT_NUMBER_PATTERN,
            MATURITY_DATE_PATTERN,
            TERM_START_PATTERN,
            TERM_END_PATTERN,
        ] {
            assert!(pattern(re).is_ok(), "正则无法编译: {}", re);
        }
        assert!(pattern("(unclosed").is_err());
    }

    #[test]
    fn test_invalid_selector_reports_source() {
        let err = compile("div[").unwrap_err();
        assert!(err.to_string().contains("div["));
    }
}
