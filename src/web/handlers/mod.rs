//! Web 路由处理器

pub mod api;

pub use api::*;

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}
