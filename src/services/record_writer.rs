//! 记录写入服务 - 业务能力层
//!
//! 只负责"把一条合同记录追加到输出文件"，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::ContractRecord;
use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// 合同记录的输出端
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// 接收一条已完成的记录
    async fn accept(&self, record: &ContractRecord) -> AppResult<()>;
}

/// 记录写入服务
///
/// 每条记录序列化为一行 JSON（JSON Lines），写入同一个打开的文件句柄。
pub struct RecordWriter {
    output_path: String,
    file: Mutex<Option<File>>,
}

impl RecordWriter {
    /// 使用指定文件路径创建，文件在第一次写入或清空时打开
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &str {
        &self.output_path
    }

    /// 清空输出文件（每次运行开始时调用），之后的记录从文件开头写起
    pub async fn truncate(&self) -> AppResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.output_path)
            .await
            .map_err(|e| AppError::io(&self.output_path, e))?;

        *self.file.lock().await = Some(file);
        Ok(())
    }

    /// 追加写入一条记录
    pub async fn write(&self, record: &ContractRecord) -> AppResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        debug!("写入记录: {} ({} 字节)", record.source_url, line.len());

        let mut guard = self.file.lock().await;
        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.output_path)
                .await
                .map_err(|e| AppError::io(&self.output_path, e))?;
            *guard = Some(file);
        }

        if let Some(file) = guard.as_mut() {
            file.write_all(line.as_bytes())
                .await
                .map_err(|e| AppError::io(&self.output_path, e))?;
            file.flush()
                .await
                .map_err(|e| AppError::io(&self.output_path, e))?;
        }

        Ok(())
    }
}

#[async_trait]
impl RecordSink for RecordWriter {
    async fn accept(&self, record: &ContractRecord) -> AppResult<()> {
        self.write(record).await
    }
}
