//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问。远程模型凭据按顺序在多个变量名中查找，
//! 缺失凭据不是错误，而是选择离线模式。

use std::env;
use std::time::Duration;

use thiserror::Error;

/// 环境变量解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Environment variable '{variable}': {message}")]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "POLLYGLOT_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid log level '{}'. Use: trace, debug, info, warn, error", value),
                }),
            }
        }
    }
}

/// 远程模型相关环境变量
pub mod remote {
    use super::*;

    /// 按优先级查找的凭据变量名
    pub const CREDENTIAL_VARS: &[&str] = &[
        "OPENAI_API_KEY",
        "OPENAI_API_KEY_GPT",
        "NEXT_PUBLIC_OPENAI_API_KEY",
    ];

    /// 返回第一个非空的凭据
    pub fn api_key() -> Option<String> {
        CREDENTIAL_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }

    /// 远程翻译启用状态
    pub struct Enabled;
    impl EnvVar<bool> for Enabled {
        const NAME: &'static str = "POLLYGLOT_REMOTE_ENABLED";
        const DEFAULT: Option<bool> = Some(true);
        const DESCRIPTION: &'static str = "Allow calling the remote model when a key is configured";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }

    /// API 基础地址
    pub struct ApiBaseUrl;
    impl EnvVar<String> for ApiBaseUrl {
        const NAME: &'static str = "POLLYGLOT_API_BASE_URL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::translation::config::constants::DEFAULT_API_BASE_URL.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Base URL of the OpenAI-compatible API";

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim().trim_end_matches('/');
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API URL must start with http:// or https://".to_string(),
                })
            }
        }
    }

    /// 模型名称
    pub struct Model;
    impl EnvVar<String> for Model {
        const NAME: &'static str = "POLLYGLOT_MODEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::translation::config::constants::DEFAULT_MODEL.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Model used for online translation";

        fn parse(value: &str) -> EnvResult<String> {
            let model = value.trim();
            if model.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Model name cannot be empty".to_string(),
                });
            }
            Ok(model.to_string())
        }
    }

    /// 远程调用超时
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "POLLYGLOT_REMOTE_TIMEOUT";
        const DEFAULT: Option<Duration> = Some(Duration::from_secs(15));
        const DESCRIPTION: &'static str = "Remote translation timeout in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            let seconds: u64 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid number of seconds".to_string(),
            })?;

            if seconds == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Timeout must be greater than 0".to_string(),
                });
            }

            if seconds > 300 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Timeout too long (max 300 seconds)".to_string(),
                });
            }

            Ok(Duration::from_secs(seconds))
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "POLLYGLOT_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("0.0.0.0".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Web server bind address";

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "PORT";
        const DEFAULT: Option<u16> = Some(4321);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }
}

/// 辅助函数
fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled", value),
        }),
    }
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,

    pub remote_enabled: bool,
    pub api_base_url: String,
    pub model: String,
    pub remote_timeout: Duration,
    pub api_key_configured: bool,

    pub web_bind_address: String,
    pub web_port: u16,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,

            remote_enabled: remote::Enabled::get()?,
            api_base_url: remote::ApiBaseUrl::get()?,
            model: remote::Model::get()?,
            remote_timeout: remote::Timeout::get()?,
            api_key_configured: remote::api_key().is_some(),

            web_bind_address: web::BindAddress::get()?,
            web_port: web::Port::get()?,
        })
    }

    /// 打印配置摘要（隐藏敏感信息）
    pub fn print_summary(&self) {
        tracing::info!("环境配置摘要:");
        tracing::info!("  日志级别: {}", self.log_level);
        tracing::info!(
            "  远程翻译: {}",
            if self.remote_enabled && self.api_key_configured { "enabled" } else { "offline" }
        );
        tracing::info!("  模型: {} @ {}", self.model, self.api_base_url);
        tracing::info!("  Web Server: {}:{}", self.web_bind_address, self.web_port);
        if self.api_key_configured {
            tracing::info!("  API Key: [configured]");
        }
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!("- `{}`: {} (default: \"info\")\n",
        core::LogLevel::NAME, core::LogLevel::DESCRIPTION));

    docs.push_str("\n## Remote Translation\n\n");
    docs.push_str(&format!("- `{}`: API key, checked in order; absence selects offline mode\n",
        remote::CREDENTIAL_VARS.join("` / `")));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        remote::Enabled::NAME, remote::Enabled::DESCRIPTION, remote::Enabled::DEFAULT));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        remote::ApiBaseUrl::NAME, remote::ApiBaseUrl::DESCRIPTION,
        crate::translation::config::constants::DEFAULT_API_BASE_URL));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        remote::Model::NAME, remote::Model::DESCRIPTION,
        crate::translation::config::constants::DEFAULT_MODEL));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        remote::Timeout::NAME, remote::Timeout::DESCRIPTION, remote::Timeout::DEFAULT));

    docs.push_str("\n## Web Server Configuration\n\n");
    docs.push_str(&format!("- `{}`: {} (default: \"0.0.0.0\")\n",
        web::BindAddress::NAME, web::BindAddress::DESCRIPTION));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        web::Port::NAME, web::Port::DESCRIPTION, web::Port::DEFAULT));

    docs
}
