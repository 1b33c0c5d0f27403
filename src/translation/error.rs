//! 翻译模块统一错误处理
//!
//! 调用方可见的错误只有 `TranslationError`；远程模型的错误 `RemoteError`
//! 在解析器内部被吸收并转为离线降级结果。

use thiserror::Error;

/// 调用方可见的翻译错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 请求缺少 text 或 targetLang
    #[error("请求无效: {0}")]
    InvalidRequest(String),

    /// 连离线降级都无法进行（例如请求体完全无法解析）
    #[error("无法执行离线降级: {0}")]
    UnrecoverableFallbackFailure(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl TranslationError {
    /// 是否属于客户端错误（对应 HTTP 4xx）
    pub fn is_client_error(&self) -> bool {
        matches!(self, TranslationError::InvalidRequest(_))
    }
}

/// 远程翻译客户端错误
///
/// 这些错误永远不会离开解析器，只用于日志和降级判断。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// 凭据缺失或无效
    #[error("远程模型不可用: {0}")]
    Unavailable(String),

    /// 网络、超时或服务端错误
    #[error("远程请求失败: {0}")]
    RequestFailed(String),

    /// 模型没有返回可用文本
    #[error("远程模型返回了空结果")]
    EmptyResponse,
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            RemoteError::RequestFailed(format!("请求超时: {}", error))
        } else if error.is_decode() {
            RemoteError::RequestFailed(format!("响应解析失败: {}", error))
        } else {
            RemoteError::RequestFailed(error.to_string())
        }
    }
}

impl From<tokio::time::error::Elapsed> for RemoteError {
    fn from(error: tokio::time::error::Elapsed) -> Self {
        RemoteError::RequestFailed(format!("异步操作超时: {}", error))
    }
}

impl From<tokio::task::JoinError> for RemoteError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_panic() {
            RemoteError::RequestFailed("远程翻译任务发生 panic".to_string())
        } else {
            RemoteError::RequestFailed("远程翻译任务被取消".to_string())
        }
    }
}

impl From<toml::de::Error> for TranslationError {
    fn from(error: toml::de::Error) -> Self {
        TranslationError::Config(format!("TOML解析错误: {}", error))
    }
}

impl From<crate::env::EnvError> for TranslationError {
    fn from(error: crate::env::EnvError) -> Self {
        TranslationError::Config(error.to_string())
    }
}

/// 错误处理助手函数
pub mod helpers {
    use super::*;
    use std::fmt;

    /// 创建输入验证错误
    pub fn validation_error<T: fmt::Display>(msg: T) -> TranslationError {
        TranslationError::InvalidRequest(msg.to_string())
    }

    /// 创建配置错误
    pub fn config_error<T: fmt::Display>(msg: T) -> TranslationError {
        TranslationError::Config(msg.to_string())
    }

    /// 记录远程错误（始终为 warn 级别，因为它会被降级吸收）
    pub fn log_remote_error(error: &RemoteError) {
        match error {
            RemoteError::Unavailable(_) => tracing::warn!("远程模型不可用，改用离线词典: {}", error),
            RemoteError::RequestFailed(_) => tracing::warn!("远程翻译失败，改用离线词典: {}", error),
            RemoteError::EmptyResponse => tracing::warn!("远程模型返回空结果，改用离线词典"),
        }
    }
}
