//! 翻译解析器
//!
//! 状态流转：校验输入 →（无凭据 | 尝试远程）→（远程成功 | 远程失败）→ 完成。
//!
//! 远程调用的结果是 `Result<String, RemoteError>`，其错误分支总是由
//! [`translate_offline`] 收尾，而后者不会失败。因此 [`TranslationResolver::resolve`]
//! 唯一可能返回的错误是 `InvalidRequest`。

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::config::{constants, TranslationConfig};
use crate::translation::dictionary::TargetLanguage;
use crate::translation::error::{helpers, RemoteError, TranslationError};
use crate::translation::offline::translate_offline;
use crate::translation::remote::{OpenAiTranslator, RemoteTranslator};

/// 翻译请求，字段名与 HTTP 接口一致
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "targetLang")]
    pub target_lang: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            target_lang: Some(target_lang.into()),
        }
    }

    /// 校验必填字段，返回 (text, targetLang)
    fn validate(&self) -> Result<(&str, &str), TranslationError> {
        let text = self.text.as_deref().filter(|t| !t.is_empty());
        let target = self
            .target_lang
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        match (text, target) {
            (Some(text), Some(target)) => Ok((text, target)),
            _ => Err(helpers::validation_error("Missing text/targetLang")),
        }
    }
}

/// 结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationMode {
    Online,
    Offline,
    OfflineFallback,
}

impl TranslationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationMode::Online => "online",
            TranslationMode::Offline => "offline",
            TranslationMode::OfflineFallback => "offline-fallback",
        }
    }

    pub fn is_degraded(self) -> bool {
        self != TranslationMode::Online
    }
}

/// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation: String,
    pub mode: TranslationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TranslationResult {
    pub fn online(translation: String) -> Self {
        Self {
            translation,
            mode: TranslationMode::Online,
            note: None,
        }
    }

    fn degraded(translation: String, mode: TranslationMode, note: &str) -> Self {
        Self {
            translation,
            mode,
            note: Some(note.to_string()),
        }
    }
}

/// 翻译解析器
///
/// 只持有不可变状态，可以放进 `Arc` 在多个请求间共享。
pub struct TranslationResolver {
    remote: Option<Arc<dyn RemoteTranslator>>,
    timeout: Duration,
}

impl TranslationResolver {
    pub fn new(remote: Option<Arc<dyn RemoteTranslator>>, timeout: Duration) -> Self {
        Self { remote, timeout }
    }

    /// 纯离线解析器
    pub fn offline() -> Self {
        Self::new(None, constants::DEFAULT_REMOTE_TIMEOUT)
    }

    /// 根据配置创建解析器
    ///
    /// 凭据缺失或远程被禁用时进入离线模式。客户端构建失败同样退回离线模式并记录警告。
    pub fn from_config(config: &TranslationConfig) -> Self {
        if !config.remote_configured() {
            return Self::new(None, config.timeout());
        }

        match OpenAiTranslator::from_config(config) {
            Ok(client) => Self::new(Some(Arc::new(client)), config.timeout()),
            Err(e) => {
                helpers::log_remote_error(&e);
                Self::new(None, config.timeout())
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.remote.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 解析一个翻译请求
    pub async fn resolve(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let (text, target) = request.validate()?;
        let language = TargetLanguage::parse(target);
        if language.is_none() {
            tracing::debug!("未知目标语言 '{}'，离线词典将原样返回", target);
        }

        let Some(remote) = &self.remote else {
            tracing::debug!("未配置远程模型，使用离线词典");
            return Ok(TranslationResult::degraded(
                translate_offline(text, language),
                TranslationMode::Offline,
                constants::OFFLINE_NOTE,
            ));
        };

        let label = language.map_or(target, |lang| lang.label());
        tracing::debug!("尝试远程翻译 ({})，目标语言: {}", remote.name(), label);

        match self.attempt_remote(Arc::clone(remote), text, label).await {
            Ok(translation) => {
                tracing::debug!("在线翻译成功 ({} 字符)", translation.chars().count());
                Ok(TranslationResult::online(translation))
            }
            Err(e) => {
                helpers::log_remote_error(&e);
                Ok(TranslationResult::degraded(
                    translate_offline(text, language),
                    TranslationMode::OfflineFallback,
                    constants::FALLBACK_NOTE,
                ))
            }
        }
    }

    /// 在独立任务中调用远程模型，并限制总耗时
    ///
    /// panic、取消与超时都会折叠为 `RequestFailed`。
    async fn attempt_remote(
        &self,
        remote: Arc<dyn RemoteTranslator>,
        text: &str,
        label: &str,
    ) -> Result<String, RemoteError> {
        let text = text.to_string();
        let label = label.to_string();
        let mut task = tokio::spawn(async move { remote.translate(&text, &label).await });

        match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => joined?,
            Err(elapsed) => {
                task.abort();
                Err(elapsed.into())
            }
        }
    }
}
