// 集成测试公共模块
//
// 提供远程翻译器桩实现和共享辅助工具

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pollyglot::translation::{RemoteError, RemoteTranslator, TranslationResolver};

/// 测试用的短超时
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

/// 总是返回指定错误的远程翻译器
pub struct FailingTranslator {
    error: RemoteError,
}

impl FailingTranslator {
    pub fn new(error: RemoteError) -> Self {
        Self { error }
    }

    /// 三种远程错误各一个
    pub fn every_kind() -> Vec<Self> {
        vec![
            Self::new(RemoteError::Unavailable("invalid api key".to_string())),
            Self::new(RemoteError::RequestFailed("connection refused".to_string())),
            Self::new(RemoteError::EmptyResponse),
        ]
    }
}

impl Default for FailingTranslator {
    fn default() -> Self {
        Self::new(RemoteError::RequestFailed("connection refused".to_string()))
    }
}

#[async_trait]
impl RemoteTranslator for FailingTranslator {
    async fn translate(&self, _text: &str, _target_label: &str) -> Result<String, RemoteError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// 永不返回的远程翻译器
pub struct HangingTranslator;

#[async_trait]
impl RemoteTranslator for HangingTranslator {
    async fn translate(&self, _text: &str, _target_label: &str) -> Result<String, RemoteError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("too late".to_string())
    }
}

/// 调用时 panic 的远程翻译器
pub struct PanickingTranslator;

#[async_trait]
impl RemoteTranslator for PanickingTranslator {
    async fn translate(&self, _text: &str, _target_label: &str) -> Result<String, RemoteError> {
        panic!("remote translator exploded");
    }
}

/// 返回固定译文并记录调用的远程翻译器
#[derive(Default)]
pub struct RecordingTranslator {
    answer: String,
    calls: AtomicUsize,
    last_label: std::sync::Mutex<Option<String>>,
}

impl RecordingTranslator {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_label(&self) -> Option<String> {
        self.last_label.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteTranslator for RecordingTranslator {
    async fn translate(&self, _text: &str, target_label: &str) -> Result<String, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_label.lock().unwrap() = Some(target_label.to_string());
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// 使用指定远程翻译器的解析器
pub fn resolver_with<T: RemoteTranslator + 'static>(remote: T) -> TranslationResolver {
    TranslationResolver::new(Some(Arc::new(remote)), SHORT_TIMEOUT)
}

/// 共享远程翻译器，便于测试后检查调用情况
pub fn resolver_with_shared(remote: Arc<RecordingTranslator>) -> TranslationResolver {
    TranslationResolver::new(Some(remote), SHORT_TIMEOUT)
}
