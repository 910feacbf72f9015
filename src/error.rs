use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 页面抽取错误
    #[error("抽取错误: {0}")]
    Extract(#[from] ExtractError),
    /// 网络请求失败
    #[error("请求 {url} 失败: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务端返回非成功状态码
    #[error("请求 {url} 返回状态码 {status}")]
    HttpStatus { url: String, status: u16 },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件读写失败
    #[error("文件错误 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 并发任务调度失败
    #[error("任务执行失败: {0}")]
    Task(String),
}

/// 单个页面的抽取错误
///
/// 只有日期核对会在页面结构缺失时产生错误，其余字段缺失时直接省略。
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 日期核对失败（硬失败，该页面不输出记录）
    #[error("日期抽取失败: {0}")]
    Date(#[from] DateError),
    /// CSS 选择器无法解析
    #[error("无效的选择器 `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// 正则表达式无法编译
    #[error("无效的正则 `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// 站点基础 URL 无效
    #[error("无效的基础URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// 日期核对错误
#[derive(Debug, Error)]
pub enum DateError {
    /// 页头中没有 "Maturity Date:" 标签
    #[error("页头中找不到到期日 (Maturity Date)")]
    MissingMaturityDate,
    /// 合同文档区中没有 "Effective <date> - <date>" 文本
    #[error("合同文档区找不到有效期 (Effective ... - ...)")]
    MissingTermDates,
    /// 日期不是 月/日/年 格式
    #[error("{field} 日期 '{value}' 无法解析: {reason}")]
    InvalidDate {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 站点配置内容非法
    #[error("站点配置无效: {0}")]
    InvalidProfile(String),
    /// HTTP 客户端无法构建
    #[error("HTTP客户端创建失败: {0}")]
    HttpClient(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求错误
    pub fn fetch_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch {
            url: url.into(),
            source,
        }
    }

    /// 创建文件读写错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为页面结构变化导致的日期硬失败
    pub fn is_date_failure(&self) -> bool {
        matches!(self, AppError::Extract(ExtractError::Date(_)))
    }
}

impl ExtractError {
    /// 创建选择器解析错误
    pub fn invalid_selector(selector: &str, reason: impl std::fmt::Display) -> Self {
        ExtractError::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 单个字段抽取结果：`Ok(Some)` 存在，`Ok(None)` 缺失（省略字段），`Err` 硬失败
pub type FieldResult<T> = Result<Option<T>, ExtractError>;
