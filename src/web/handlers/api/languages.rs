//! 语言列表

use axum::response::Json;

use crate::translation::{supported_languages, LanguageInfo};

/// GET /api/languages
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(supported_languages())
}
