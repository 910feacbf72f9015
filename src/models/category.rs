//! 文档分类规则表
//!
//! 有序的 "分类 → 关键词集合" 映射。关键词统一为小写，与小写化后的文件名做子串匹配。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 按关键词匹配的文档分类（"其他" 不在此列，它是所有分类都未命中的集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// 修订 / 续期
    Amendments,
    /// 招标文件
    BidSolicitation,
    /// 评标结果
    BidTabulation,
    /// 合同正文
    Contract,
}

/// 分类方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// 每个分类独立地在完整文件列表上做首个匹配，同一文件可以出现在多个分类中
    #[default]
    Independent,
    /// 按规则表顺序依次匹配，已被前面分类认领的文件不再参与后续分类
    Exclusive,
}

/// 单个分类规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: DocumentCategory,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: DocumentCategory, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `lowered_name` 必须已经小写化
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|k| lowered_name.contains(k.as_str()))
    }
}

/// 有序的分类规则表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    /// 校验并创建规则表
    ///
    /// 关键词会被小写化；空关键词、空分类和重复分类都视为配置错误。
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self, ConfigError> {
        let mut normalized: Vec<CategoryRule> = Vec::with_capacity(rules.len());

        for rule in rules {
            if normalized.iter().any(|r| r.category == rule.category) {
                return Err(ConfigError::InvalidProfile(format!(
                    "分类 {:?} 重复定义",
                    rule.category
                )));
            }

            let keywords: Vec<String> = rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .collect();

            if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                return Err(ConfigError::InvalidProfile(format!(
                    "分类 {:?} 的关键词不能为空",
                    rule.category
                )));
            }

            normalized.push(CategoryRule {
                category: rule.category,
                keywords,
            });
        }

        Ok(Self { rules: normalized })
    }

    /// Sourcewell 站点的规则表，顺序即扫描顺序
    pub fn sourcewell() -> Self {
        Self {
            rules: vec![
                CategoryRule::new(
                    DocumentCategory::Amendments,
                    &["extension", "modification", "renewal"],
                ),
                CategoryRule::new(
                    DocumentCategory::BidSolicitation,
                    &[
                        "request for proposal",
                        "rfp",
                        "solicitation",
                        "bid doc",
                        "request for quote",
                        "rfq",
                        "rfb",
                        "request for bid",
                        "bid solicitation",
                    ],
                ),
                CategoryRule::new(
                    DocumentCategory::BidTabulation,
                    &["bid tabulation", "bid tab", "evaluation"],
                ),
                CategoryRule::new(DocumentCategory::Contract, &["contract"]),
            ],
        }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn get(&self, category: DocumentCategory) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// 文件名是否命中任一分类的任一关键词
    pub fn matches_any(&self, lowered_name: &str) -> bool {
        self.rules.iter().any(|r| r.matches(lowered_name))
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::sourcewell()
    }
}

impl<'de> Deserialize<'de> for CategoryRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rules = Vec::<CategoryRule>::deserialize(deserializer)?;
        CategoryRules::new(rules).map_err(serde::de::Error::custom)
    }
}
