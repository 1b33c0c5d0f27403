//! Web 模块的数据类型定义

use std::sync::Arc;

use serde::Serialize;

use crate::translation::TranslationResolver;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TranslationResolver>,
}

impl AppState {
    pub fn new(resolver: TranslationResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
