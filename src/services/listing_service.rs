//! 合同列表遍历 - 业务能力层
//!
//! 只负责从一个列表页中找出详情页 URL 和下一页 URL，不负责抓取和调度。

use crate::error::ExtractError;
use crate::infrastructure::{NodeQuery, PageDocument};
use crate::services::selectors;
use scraper::Selector;
use tracing::warn;
use url::Url;

/// 一个列表页的遍历结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// 详情页绝对 URL（文档顺序）
    pub contract_urls: Vec<String>,
    /// 下一页绝对 URL，没有则分页结束
    pub next_page: Option<String>,
}

/// 列表遍历器
pub struct ListingTraversal {
    base_url: Url,
    contract_links: Selector,
    next_page: Selector,
}

impl ListingTraversal {
    pub fn new(base_url: Url) -> Result<Self, ExtractError> {
        Ok(Self {
            base_url,
            contract_links: selectors::compile(selectors::LISTING_CONTRACT_LINKS)?,
            next_page: selectors::compile(selectors::LISTING_NEXT_PAGE)?,
        })
    }

    /// 惰性产出详情页 URL，相对链接以站点根地址解析
    ///
    /// 无法解析的链接记录警告后跳过；没有任何链接不是错误。
    pub fn contract_urls<'a>(&'a self, doc: &'a PageDocument) -> impl Iterator<Item = String> + 'a {
        doc.matching(&self.contract_links)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(move |href| match self.base_url.join(href.trim()) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    warn!("详情页链接无法解析, 已跳过: {} ({})", href, e);
                    None
                }
            })
    }

    /// 下一页 URL：`rel="next"` 链接，以当前列表页地址解析（常见的是 `?page=N` 这类相对查询串）
    pub fn next_page(&self, doc: &PageDocument, page_url: &str) -> Option<String> {
        let href = doc.first_attr(&self.next_page, "href")?;
        let base = Url::parse(page_url).unwrap_or_else(|_| self.base_url.clone());
        match base.join(href.trim()) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!("下一页链接无法解析: {} ({})", href, e);
                None
            }
        }
    }

    /// 一次性遍历整个列表页
    pub fn parse_listing(&self, doc: &PageDocument, page_url: &str) -> ListingPage {
        ListingPage {
            contract_urls: self.contract_urls(doc).collect(),
            next_page: self.next_page(doc, page_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://www.sourcewell-mn.gov/contract-search?category=All&keyword=";

    fn traversal() -> ListingTraversal {
        ListingTraversal::new(Url::parse("https://www.sourcewell-mn.gov").unwrap()).unwrap()
    }

    #[test]
    fn test_contract_urls_resolved_in_order() {
        let doc = PageDocument::parse(
            r#"
            <div class="result"><a class="component__search-vendors-contracts-title" href="/cooperative-purchasing/020817-acr">ACR</a></div>
            <div class="result"><a class="component__search-vendors-contracts-title" href="/cooperative-purchasing/081419-kba">KBA</a></div>
            <a class="component__search-vendors-contracts-title" href="/outside-div">Outside</a>
            <nav><a rel="next" href="?category=All&amp;keyword=&amp;page=1">Next</a></nav>
            "#,
        );

        let page = traversal().parse_listing(&doc, PAGE_URL);
        assert_eq!(
            page.contract_urls,
            vec![
                "https://www.sourcewell-mn.gov/cooperative-purchasing/020817-acr",
                "https://www.sourcewell-mn.gov/cooperative-purchasing/081419-kba",
            ]
        );
        assert_eq!(
            page.next_page.as_deref(),
            Some("https://www.sourcewell-mn.gov/contract-search?category=All&keyword=&page=1")
        );
    }

    #[test]
    fn test_last_page_has_no_follow_up() {
        let doc = PageDocument::parse(
            r#"<div><a class="component__search-vendors-contracts-title" href="/cooperative-purchasing/1">One</a></div>"#,
        );
        let page = traversal().parse_listing(&doc, PAGE_URL);
        assert_eq!(page.contract_urls.len(), 1);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_empty_listing_is_not_an_error() {
        let doc = PageDocument::parse("<html><body><p>No results</p></body></html>");
        let page = traversal().parse_listing(&doc, PAGE_URL);
        assert!(page.contract_urls.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn test_contract_urls_is_lazy_iterator() {
        let doc = PageDocument::parse(
            r#"<div>
                 <a class="component__search-vendors-contracts-title" href="/a">A</a>
                 <a class="component__search-vendors-contracts-title" href="/b">B</a>
               </div>"#,
        );
        let t = traversal();
        let mut urls = t.contract_urls(&doc);
        assert_eq!(urls.next().as_deref(), Some("https://www.sourcewell-mn.gov/a"));
    }
}
