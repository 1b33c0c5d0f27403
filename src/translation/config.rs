//! 翻译配置管理
//!
//! 加载顺序：`.env` 文件 → 配置文件（TOML）→ 环境变量覆盖 → 校验。
//! API key 只从环境变量读取，不会写入或读取配置文件。

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::error::{helpers::config_error, TranslationError};

/// 配置常量
pub mod constants {
    use std::time::Duration;

    pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(15);
    pub const MAX_REMOTE_TIMEOUT: Duration = Duration::from_secs(300);

    pub const OFFLINE_NOTE: &str =
        "Offline dictionary-based translation (demo). Add OPENAI_API_KEY to enable AI mode.";
    pub const FALLBACK_NOTE: &str = "AI call failed; used offline dictionary-based translation.";

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "pollyglot.toml",
        ".pollyglot.toml",
        "~/.config/pollyglot/config.toml",
        "/etc/pollyglot/config.toml",
    ];
}

/// 翻译配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// 允许调用远程模型（仍需要 API key）
    pub remote_enabled: bool,
    pub api_base_url: String,
    pub model: String,
    pub timeout_secs: u64,

    /// 只来自环境变量
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            remote_enabled: true,
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            timeout_secs: constants::DEFAULT_REMOTE_TIMEOUT.as_secs(),
            api_key: None,
        }
    }
}

impl TranslationConfig {
    /// 带凭据的配置
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// 是否会尝试远程翻译
    pub fn remote_configured(&self) -> bool {
        self.remote_enabled
            && self
                .api_key
                .as_deref()
                .map_or(false, |key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), TranslationError> {
        if self.timeout_secs == 0 {
            return Err(config_error("超时时间必须大于0"));
        }

        if self.timeout() > constants::MAX_REMOTE_TIMEOUT {
            return Err(config_error(format!(
                "超时时间过长（最大 {} 秒）",
                constants::MAX_REMOTE_TIMEOUT.as_secs()
            )));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(config_error(format!("API 地址无效: {}", self.api_base_url)));
        }

        if self.model.trim().is_empty() {
            return Err(config_error("模型名称不能为空"));
        }

        Ok(())
    }

    /// 应用环境变量覆盖
    ///
    /// 凭据总是先读取；其余覆盖项互不影响，非法值保留原配置并汇总报错，而不是静默忽略。
    pub fn apply_env_overrides(&mut self) -> Result<(), TranslationError> {
        use crate::env::remote;

        self.api_key = remote::api_key();

        let mut errors = Vec::new();

        if let Some(enabled) = env_override::<remote::Enabled, _>(&mut errors) {
            self.remote_enabled = enabled;
        }

        if let Some(url) = env_override::<remote::ApiBaseUrl, _>(&mut errors) {
            tracing::info!("环境变量覆盖 API 地址: {}", url);
            self.api_base_url = url;
        }

        if let Some(model) = env_override::<remote::Model, _>(&mut errors) {
            self.model = model;
        }

        if let Some(timeout) = env_override::<remote::Timeout, _>(&mut errors) {
            self.timeout_secs = timeout.as_secs();
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(config_error(errors.join("; ")))
        }
    }
}

/// 读取一个已设置的覆盖变量；未设置返回 None，非法值记入 `errors`
fn env_override<V, T>(errors: &mut Vec<String>) -> Option<T>
where
    V: crate::env::EnvVar<T>,
{
    std::env::var(V::NAME).ok()?;
    match V::get() {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    }
}

/// 配置管理器
pub struct ConfigManager {
    config: TranslationConfig,
    config_path: Option<String>,
}

impl ConfigManager {
    /// 加载 `.env`、配置文件和环境变量
    pub fn new() -> Result<Self, TranslationError> {
        Self::load_dotenv();

        let (mut config, config_path) = Self::load_config()?;
        config.apply_env_overrides()?;
        config.validate()?;

        if config.remote_configured() {
            tracing::info!("已配置 API key，启用在线翻译（模型: {}）", config.model);
        } else {
            tracing::info!("未配置 API key 或已禁用远程翻译，使用离线词典");
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 加载配置；失败时记录警告并退回默认配置加环境变量覆盖
    ///
    /// 单个非法覆盖项不会丢失凭据等其余设置。
    pub fn load_or_default() -> TranslationConfig {
        match Self::new() {
            Ok(manager) => {
                if let Some(path) = manager.config_path() {
                    tracing::debug!("使用配置文件: {}", path);
                }
                manager.into_config()
            }
            Err(e) => {
                tracing::warn!("配置加载失败: {}，使用默认配置", e);
                let mut config = TranslationConfig::default();
                if let Err(e) = config.apply_env_overrides() {
                    tracing::warn!("环境变量覆盖失败: {}", e);
                }
                config
            }
        }
    }

    pub fn into_config(self) -> TranslationConfig {
        self.config
    }

    /// 实际加载的配置文件路径
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    fn load_config() -> Result<(TranslationConfig, Option<String>), TranslationError> {
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                let config = Self::load_from_file(&expanded_path)?;
                return Ok((config, Some(expanded_path.into_owned())));
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok((TranslationConfig::default(), None))
    }

    /// 从指定文件加载配置
    pub fn load_from_file(path: &str) -> Result<TranslationConfig, TranslationError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("读取配置文件失败: {}", e)))?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<TranslationConfig, TranslationError> {
        Ok(toml::from_str(content)?)
    }

    /// 加载 .env 文件（不覆盖已存在的变量，可重复调用）
    pub fn load_dotenv() {
        let env_files = [".env.local", ".env.development", ".env.production", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() {
                match dotenv::from_filename(env_file) {
                    Ok(_) => {
                        tracing::info!("已加载环境变量文件: {}", env_file);
                        break;
                    }
                    Err(e) => tracing::warn!("无法加载环境变量文件 {}: {}", env_file, e),
                }
            }
        }
    }

    /// 生成示例配置文件
    pub fn generate_example_config(path: &str) -> Result<(), TranslationError> {
        let content = toml::to_string_pretty(&TranslationConfig::default())
            .map_err(|e| config_error(format!("序列化配置失败: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| config_error(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }
}
