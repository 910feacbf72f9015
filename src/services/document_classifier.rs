//! 文档分类 - 业务能力层
//!
//! 把通用文档区的文件链接按关键词规则表归入各个分类：
//! - `first_match`：按文档顺序扫描，命中即停，最多一个结果
//! - `accumulate_unmatched`：收集所有分类都未命中的文件（"其他"）
//!
//! 价格文件来自单独的价格标签页，不经过关键词过滤。

use crate::error::{ExtractError, FieldResult};
use crate::infrastructure::{NodeQuery, PageDocument};
use crate::models::{CategoryRules, ClassificationMode, DocumentCategory, FileReference};
use crate::services::selectors;
use scraper::Selector;
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

/// 各分类的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedDocuments {
    pub amendments: Option<FileReference>,
    pub bid_solicitation: Option<FileReference>,
    pub bid_tabulation: Option<FileReference>,
    pub contract: Option<FileReference>,
    pub other: Vec<FileReference>,
}

impl ClassifiedDocuments {
    pub fn get(&self, category: DocumentCategory) -> Option<&FileReference> {
        match category {
            DocumentCategory::Amendments => self.amendments.as_ref(),
            DocumentCategory::BidSolicitation => self.bid_solicitation.as_ref(),
            DocumentCategory::BidTabulation => self.bid_tabulation.as_ref(),
            DocumentCategory::Contract => self.contract.as_ref(),
        }
    }

    fn set(&mut self, category: DocumentCategory, file: Option<FileReference>) {
        match category {
            DocumentCategory::Amendments => self.amendments = file,
            DocumentCategory::BidSolicitation => self.bid_solicitation = file,
            DocumentCategory::BidTabulation => self.bid_tabulation = file,
            DocumentCategory::Contract => self.contract = file,
        }
    }
}

/// 文档分类器
pub struct DocumentClassifier {
    rules: CategoryRules,
    mode: ClassificationMode,
    base_url: Url,
    file_links: Selector,
    pricing_links: Selector,
}

impl DocumentClassifier {
    pub fn new(
        rules: CategoryRules,
        mode: ClassificationMode,
        base_url: Url,
    ) -> Result<Self, ExtractError> {
        Ok(Self {
            rules,
            mode,
            base_url,
            file_links: selectors::compile(selectors::FILE_LINKS)?,
            pricing_links: selectors::compile(selectors::PRICING_LINKS)?,
        })
    }

    /// 通用文档区的所有文件链接（文档顺序，URL 保持页面原样）
    pub fn file_links(&self, doc: &PageDocument) -> Vec<FileReference> {
        doc.links(&self.file_links)
            .into_iter()
            .map(|(name, href)| FileReference::new(name, href))
            .collect()
    }

    /// 第一个文件名包含该分类任一关键词的文件
    pub fn first_match(
        &self,
        category: DocumentCategory,
        files: &[FileReference],
    ) -> Option<FileReference> {
        let rule = self.rules.get(category)?;
        files
            .iter()
            .find(|file| rule.matches(&file.name.to_lowercase()))
            .cloned()
    }

    /// 文件名不包含任何分类关键词的所有文件，保持原顺序
    pub fn accumulate_unmatched(&self, files: &[FileReference]) -> Vec<FileReference> {
        files
            .iter()
            .filter(|file| !self.rules.matches_any(&file.name.to_lowercase()))
            .cloned()
            .collect()
    }

    /// 按配置的分类方式对文件列表分类
    pub fn classify(&self, files: &[FileReference]) -> ClassifiedDocuments {
        let mut result = ClassifiedDocuments {
            other: self.accumulate_unmatched(files),
            ..Default::default()
        };

        match self.mode {
            ClassificationMode::Independent => {
                for rule in self.rules.rules() {
                    result.set(rule.category, self.first_match(rule.category, files));
                }
            }
            ClassificationMode::Exclusive => {
                let mut claimed: HashSet<usize> = HashSet::new();
                for rule in self.rules.rules() {
                    let hit = files.iter().enumerate().find(|(idx, file)| {
                        !claimed.contains(idx) && rule.matches(&file.name.to_lowercase())
                    });
                    if let Some((idx, file)) = hit {
                        claimed.insert(idx);
                        result.set(rule.category, Some(file.clone()));
                    }
                }
            }
        }

        debug!(
            "文档分类: 共 {} 个文件, 其他 {} 个",
            files.len(),
            result.other.len()
        );
        result
    }

    /// 价格标签页中的所有链接，URL 以站点根地址解析为绝对地址
    pub fn pricing_files(&self, doc: &PageDocument) -> FieldResult<Vec<FileReference>> {
        let files: Vec<FileReference> = doc
            .links(&self.pricing_links)
            .into_iter()
            .filter_map(|(name, href)| match self.base_url.join(&href) {
                Ok(url) => Some(FileReference::new(name, url.to_string())),
                Err(e) => {
                    warn!("价格文件链接无法解析, 已跳过: {} ({})", href, e);
                    None
                }
            })
            .collect();

        Ok(Some(files).filter(|f| !f.is_empty()))
    }
}
