//! Web 服务器模块
//!
//! 提供 `/api/translate` 等 HTTP 接口

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use handlers::*;
pub use routes::*;
pub use types::*;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::translation::{TranslationError, TranslationResolver};

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, resolver: TranslationResolver) -> Self {
        Self {
            config,
            state: AppState::new(resolver),
        }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), TranslationError> {
        let app = create_router(self.state.clone());
        let address = self.config.listen_address();

        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .map_err(|e| TranslationError::Config(format!("无法绑定 {}: {}", address, e)))?;

        tracing::info!(
            "Web 服务器启动: http://{} (模式: {})",
            address,
            if self.state.resolver.is_online() { "在线" } else { "离线" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TranslationError::Config(format!("服务器错误: {}", e)))?;

        Ok(())
    }
}

/// 创建路由器
pub fn create_router(state: AppState) -> Router {
    create_routes()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
