//! # PollyGlot Library
//!
//! 短文本翻译服务：优先调用远程 AI 模型，失败或未配置时使用离线词典，
//! 保证每个合法请求都能得到结果。
//!
//! ## 模块组织
//!
//! - `translation` - 切分、词典、离线替换、远程客户端与解析器
//! - `env` - 类型安全的环境变量
//! - `logging` - 日志初始化
//! - `web` - HTTP 接口（可选）

pub mod env;
#[cfg(any(feature = "cli", feature = "web"))]
pub mod logging;
pub mod translation;
#[cfg(feature = "web")]
pub mod web;

pub use translation::{
    TargetLanguage, TranslationError, TranslationMode, TranslationRequest, TranslationResolver,
    TranslationResult,
};
