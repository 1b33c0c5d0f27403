//! 翻译 API 处理器

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::translation::{TranslationError, TranslationRequest, TranslationResult};
use crate::web::types::{AppState, ErrorResponse};

pub const MISSING_FIELDS: &str = "Missing text/targetLang";
pub const TRANSLATION_FAILED: &str = "Translation failed.";

type ApiError = (StatusCode, Json<ErrorResponse>);

/// 解析请求体：空请求体视为 `{}`，无法解析时连离线降级都无法进行
pub fn parse_request(body: &[u8]) -> Result<TranslationRequest, TranslationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TranslationRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| TranslationError::UnrecoverableFallbackFailure(format!("请求体无法解析: {}", e)))
}

fn error_response(error: &TranslationError) -> ApiError {
    match error {
        TranslationError::InvalidRequest(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(MISSING_FIELDS)),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(TRANSLATION_FAILED)),
        ),
    }
}

/// POST /api/translate
///
/// 远程失败不会改变状态码，降级信息体现在 `mode`/`note` 中。
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResult>, ApiError> {
    let request = parse_request(&body).map_err(|e| {
        tracing::error!("翻译请求失败: {}", e);
        error_response(&e)
    })?;

    match state.resolver.resolve(&request).await {
        Ok(result) => {
            tracing::info!(
                "翻译完成: mode={}, target={}",
                result.mode.as_str(),
                request.target_lang.as_deref().unwrap_or_default()
            );
            Ok(Json(result))
        }
        Err(e) => {
            tracing::warn!("翻译请求被拒绝: {}", e);
            Err(error_response(&e))
        }
    }
}

/// 非 POST 方法
pub async fn method_not_allowed() -> ApiError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}
