//! 远程翻译客户端
//!
//! 通过 OpenAI 兼容的 Responses 接口调用模型。只尝试一次，不重试；
//! 所有失败都以 `RemoteError` 返回，由解析器决定如何降级。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::translation::config::TranslationConfig;
use crate::translation::error::RemoteError;

/// 远程翻译能力
#[async_trait]
pub trait RemoteTranslator: Send + Sync {
    /// 把 `text` 翻译为 `target_label` 指定的语言
    async fn translate(&self, text: &str, target_label: &str) -> Result<String, RemoteError>;

    /// 用于日志的名称
    fn name(&self) -> &str {
        "remote"
    }
}

/// 构造发送给模型的指令
pub fn build_prompt(text: &str, target_label: &str) -> String {
    format!(
        "Translate the following text to {target_label}.\n\
         - Be natural and idiomatic.\n\
         - Keep punctuation and tone.\n\
         - Return only the translation.\n\
         \n\
         Text: {text}"
    )
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: String,
}

#[derive(Deserialize, Default)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponsesResponse {
    /// 优先使用聚合字段 `output_text`，否则拼接所有 `output_text` 片段
    fn into_text(self) -> String {
        match self.output_text {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => self
                .output
                .into_iter()
                .flat_map(|item| item.content)
                .filter(|part| part.kind == "output_text")
                .map(|part| part.text)
                .collect::<String>()
                .trim()
                .to_string(),
        }
    }
}

/// OpenAI Responses 接口客户端
pub struct OpenAiTranslator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiTranslator {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        if api_key.trim().is_empty() {
            return Err(RemoteError::Unavailable("未配置 API key".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Unavailable(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    /// 根据配置创建客户端；没有凭据时返回 `Unavailable`
    pub fn from_config(config: &TranslationConfig) -> Result<Self, RemoteError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| RemoteError::Unavailable("未配置 API key".to_string()))?;
        Self::new(&config.api_base_url, &config.model, api_key, config.timeout())
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}

#[async_trait]
impl RemoteTranslator for OpenAiTranslator {
    async fn translate(&self, text: &str, target_label: &str) -> Result<String, RemoteError> {
        let request = ResponsesRequest {
            model: &self.model,
            input: build_prompt(text, target_label),
        };

        tracing::debug!("调用远程模型 {}，目标语言: {}", self.model, target_label);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RemoteError::Unavailable(format!("凭据被拒绝 ({})", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::RequestFailed(format!(
                "模型接口返回 {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: ResponsesResponse = response.json().await?;
        let translation = parsed.into_text();

        if translation.is_empty() {
            return Err(RemoteError::EmptyResponse);
        }

        Ok(translation)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
