//! 日志初始化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::env::{core::LogLevel, EnvVar};

/// 安装全局 tracing 订阅器
///
/// 优先使用 `RUST_LOG`，否则使用 `POLLYGLOT_LOG_LEVEL`（默认 info）。
/// 重复调用不会 panic。
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::get_or_default("info".to_string())));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
