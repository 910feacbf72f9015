//! 页面抓取 - 基础设施层
//!
//! 只负责"按 URL 取回 HTML 文本"，不做解析、不做重试

use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// 页面抓取能力
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 取回 `url` 对应页面的 HTML 文本
    async fn fetch(&self, url: &str) -> AppResult<String>;
}

/// 基于 reqwest 的 HTTP 抓取器
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// 按配置创建 HTTP 客户端（超时、User-Agent）
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))
    }
}
