use crate::error::{AppError, AppResult};
use crate::models::site_profile::SiteProfile;
use std::path::Path;
use tokio::fs;

/// 从 TOML 字符串解析站点配置，未写出的字段使用 Sourcewell 默认值
pub fn parse_site_profile(content: &str, origin: &str) -> AppResult<SiteProfile> {
    let profile: SiteProfile = toml::from_str(content).map_err(|source| AppError::Toml {
        path: origin.to_string(),
        source,
    })?;
    profile.validate()?;
    Ok(profile)
}

/// 从 TOML 文件加载站点配置
pub async fn load_site_profile(path: &Path) -> AppResult<SiteProfile> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(path.display().to_string(), e))?;

    let profile = parse_site_profile(&content, &path.display().to_string())?;

    tracing::info!(
        "已加载站点配置: {} ({} 个分类)",
        path.display(),
        profile.categories.rules().len()
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{ClassificationMode, DocumentCategory};

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let profile = parse_site_profile(r#"classification_mode = "exclusive""#, "inline").unwrap();
        assert_eq!(profile.classification_mode, ClassificationMode::Exclusive);
        assert_eq!(profile.base_url, "https://www.sourcewell-mn.gov");
        assert_eq!(profile.categories.rules().len(), 4);
    }

    #[test]
    fn test_custom_categories_replace_table() {
        let content = r#"
base_url = "https://contracts.example.org"

[metadata]
buyer_lead_agency = "Example Co-op"
cooperative_language = true
buyer_lead_agency_state = "WI"
cooperative_affiliation = "Example Co-op"
contract_type = "COMPETITIVELY_BID_CONTRACT"
service_area_national = false

[[categories]]
category = "contract"
keywords = ["Agreement", "contract"]
"#;
        let profile = parse_site_profile(content, "inline").unwrap();
        assert_eq!(profile.metadata.buyer_lead_agency_state, "WI");
        assert_eq!(profile.categories.rules().len(), 1);
        let rule = profile.categories.get(DocumentCategory::Contract).unwrap();
        assert_eq!(rule.keywords, vec!["agreement", "contract"]);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        assert!(parse_site_profile(r#"base_url = "not a url""#, "inline").is_err());
        assert!(parse_site_profile("categories = 3", "inline").is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = tokio_test::block_on(load_site_profile(Path::new("/nonexistent/profile.toml")));
        assert!(matches!(result, Err(AppError::Io { .. })));
    }
}
