use crate::error::ConfigError;
use crate::models::category::{CategoryRules, ClassificationMode};
use crate::models::contract::ContractMetadata;
use serde::{Deserialize, Serialize};
use url::Url;

/// Sourcewell 站点根地址
pub const SOURCEWELL_BASE_URL: &str = "https://www.sourcewell-mn.gov";

/// 站点配置
///
/// 抽取器依赖但不拥有的站点常量：相对链接的基础地址、固定元数据、文档分类规则表。
/// 结构相似的站点只需替换这份配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub base_url: String,
    pub metadata: ContractMetadata,
    pub categories: CategoryRules,
    pub classification_mode: ClassificationMode,
}

impl SiteProfile {
    pub fn sourcewell() -> Self {
        Self {
            base_url: SOURCEWELL_BASE_URL.to_string(),
            metadata: ContractMetadata::default(),
            categories: CategoryRules::sourcewell(),
            classification_mode: ClassificationMode::Independent,
        }
    }

    /// 校验基础地址是否为可用作 join 基准的绝对 URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::InvalidProfile(format!("base_url '{}' 无效: {}", self.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidProfile(format!(
                "base_url '{}' 不能作为基础地址",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::sourcewell()
    }
}
