use crate::error::ConfigError;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 合同列表起始页
    pub start_url: String,
    /// 同时处理的详情页数量
    pub max_concurrent_pages: usize,
    /// 最多遍历的列表页数（None 表示直到没有下一页）
    pub max_listing_pages: Option<usize>,
    /// 输出记录文件（JSON Lines）
    pub output_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 站点配置 TOML 路径（None 表示使用内置的 Sourcewell 配置）
    pub site_profile_path: Option<String>,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: "https://www.sourcewell-mn.gov/contract-search?category=All&keyword="
                .to_string(),
            max_concurrent_pages: 8,
            max_listing_pages: None,
            output_file: "contracts.jsonl".to_string(),
            output_log_file: "crawl_log.txt".to_string(),
            site_profile_path: None,
            request_timeout_secs: 30,
            user_agent: concat!("sourcewell_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源构建配置，未设置的项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let max_concurrent_pages: usize =
            parse_var(&lookup, "MAX_CONCURRENT_PAGES", "usize")?.unwrap_or(default.max_concurrent_pages);
        if max_concurrent_pages == 0 {
            return Err(ConfigError::EnvVarParseFailed {
                var_name: "MAX_CONCURRENT_PAGES".to_string(),
                value: "0".to_string(),
                expected_type: "正整数".to_string(),
            });
        }

        Ok(Self {
            start_url: lookup("CRAWL_START_URL").unwrap_or(default.start_url),
            max_concurrent_pages,
            max_listing_pages: parse_var(&lookup, "MAX_LISTING_PAGES", "usize")?
                .or(default.max_listing_pages),
            output_file: lookup("OUTPUT_FILE").unwrap_or(default.output_file),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            site_profile_path: lookup("SITE_PROFILE").or(default.site_profile_path),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(default.request_timeout_secs),
            user_agent: lookup("USER_AGENT").unwrap_or(default.user_agent),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.max_concurrent_pages, 8);
        assert_eq!(config.max_listing_pages, None);
        assert!(config.start_url.starts_with("https://www.sourcewell-mn.gov/contract-search"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_CONCURRENT_PAGES", "2"),
            ("MAX_LISTING_PAGES", "5"),
            ("VERBOSE_LOGGING", "true"),
            ("SITE_PROFILE", "profiles/sourcewell.toml"),
        ]))
        .unwrap();
        assert_eq!(config.max_concurrent_pages, 2);
        assert_eq!(config.max_listing_pages, Some(5));
        assert!(config.verbose_logging);
        assert_eq!(config.site_profile_path.as_deref(), Some("profiles/sourcewell.toml"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_CONCURRENT_PAGES", "many")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("MAX_CONCURRENT_PAGES", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("VERBOSE_LOGGING", "yes")])).is_err());
    }
}
