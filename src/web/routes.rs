//! Web 路由定义

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/translate",
            post(translate).fallback(method_not_allowed),
        )
        .route("/api/languages", get(list_languages))
        .route("/health", get(health))
}
