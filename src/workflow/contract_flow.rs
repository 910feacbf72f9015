//! 详情页抽取流程 - 流程层
//!
//! 核心职责：定义"一个合同详情页"的完整抽取流程
//!
//! 流程顺序：
//! 1. 页头：供应商 → 标题 → 合同编号
//! 2. 到期日核对（唯一的硬失败步骤）→ 摘要 → 生效日期
//! 3. 文档分类：合同 / 修订 / 招标 / 评标 / 其他 / 价格
//! 4. 供应商联系人 → 采购方联系人
//!
//! 各抽取器互不依赖，只共享同一个只读文档；缺失的字段直接省略。

use crate::error::{ExtractError, FieldResult};
use crate::infrastructure::PageDocument;
use crate::models::contract::{non_empty_list, non_empty_text};
use crate::models::{ContractMetadata, ContractRecord, DocumentCategory, SiteProfile};
use crate::services::{ContactExtractor, DocumentClassifier, HeaderExtractor, TermDateReconciler};
use tracing::debug;
use url::Url;

/// 合同详情页抽取器
///
/// - 纯函数式：不做 I/O，不持有可变状态
/// - 可以通过 `Arc` 在多个抓取任务间共享
pub struct PageExtractor {
    metadata: ContractMetadata,
    header: HeaderExtractor,
    dates: TermDateReconciler,
    classifier: DocumentClassifier,
    contacts: ContactExtractor,
}

impl PageExtractor {
    /// 按站点配置创建抽取器，编译所有选择器
    pub fn new(profile: &SiteProfile) -> Result<Self, ExtractError> {
        let base_url = Url::parse(&profile.base_url).map_err(|source| {
            ExtractError::InvalidBaseUrl {
                url: profile.base_url.clone(),
                source,
            }
        })?;

        Ok(Self {
            metadata: profile.metadata.clone(),
            header: HeaderExtractor::new()?,
            dates: TermDateReconciler::new()?,
            classifier: DocumentClassifier::new(
                profile.categories.clone(),
                profile.classification_mode,
                base_url,
            )?,
            contacts: ContactExtractor::new()?,
        })
    }

    /// 解析 HTML 并抽取记录
    ///
    /// 文档只在本次调用内存在。
    pub fn extract_html(&self, body: &str, source_url: &str) -> Result<ContractRecord, ExtractError> {
        let doc = PageDocument::parse(body);
        self.extract(&doc, source_url)
    }

    /// 从一个详情页文档抽取一条合同记录
    ///
    /// 日期核对失败时返回错误，整条记录不输出。
    pub fn extract(&self, doc: &PageDocument, source_url: &str) -> Result<ContractRecord, ExtractError> {
        let mut record = ContractRecord::new(self.metadata.clone(), source_url);

        // ========== 页头 ==========
        record.suppliers = text_field(self.header.suppliers(doc))?;
        record.title = text_field(self.header.title(doc))?;
        record.contract_number = text_field(self.header.contract_number(doc))?;

        // ========== 日期 / 摘要 ==========
        let term = self.dates.reconcile(doc)?;
        record.expiration = non_empty_text(Some(term.expiration));
        record.summary = text_field(self.header.summary(doc))?;
        record.effective = non_empty_text(term.effective);

        // ========== 文档 ==========
        let files = self.classifier.file_links(doc);
        let classified = self.classifier.classify(&files);

        record.contract_files = single(classified.get(DocumentCategory::Contract));
        record.amendments_files = single(classified.get(DocumentCategory::Amendments));
        record.bid_solicitation_files = single(classified.get(DocumentCategory::BidSolicitation));
        record.bid_tabulation_files = single(classified.get(DocumentCategory::BidTabulation));
        record.other_docs_files = non_empty_list(Some(classified.other));
        record.pricing_files = non_empty_list(self.classifier.pricing_files(doc)?);

        // ========== 联系人 ==========
        record.supplier_contacts = non_empty_list(self.contacts.supplier_contacts(doc)?);
        record.buyer_contacts = non_empty_list(self.contacts.buyer_contacts(doc)?);

        debug!(
            "抽取完成: {} (文件 {} 个, 其他 {} 个)",
            source_url,
            files.len(),
            record.other_docs_files.as_ref().map_or(0, Vec::len)
        );

        Ok(record)
    }
}

fn text_field(result: FieldResult<String>) -> Result<Option<String>, ExtractError> {
    Ok(non_empty_text(result?))
}

/// 首个匹配分类以单元素列表输出
fn single<T: Clone>(item: Option<&T>) -> Option<Vec<T>> {
    item.map(|i| vec![i.clone()])
}
