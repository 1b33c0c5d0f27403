//! 解析器集成测试
//!
//! 覆盖离线、在线与降级三条路径

use std::sync::Arc;
use std::time::{Duration, Instant};

use pollyglot::translation::config::constants;
use pollyglot::{TranslationError, TranslationMode, TranslationRequest, TranslationResolver};

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

use common::{
    resolver_with, resolver_with_shared, FailingTranslator, HangingTranslator,
    PanickingTranslator, RecordingTranslator, SHORT_TIMEOUT,
};

#[tokio::test]
async fn test_offline_without_credentials() {
    let resolver = TranslationResolver::offline();
    let result = resolver
        .resolve(&TranslationRequest::new("hi", "Spanish"))
        .await
        .unwrap();

    assert_eq!(result.translation, "hola");
    assert_eq!(result.mode, TranslationMode::Offline);
    assert_eq!(result.note.as_deref(), Some(constants::OFFLINE_NOTE));
}

#[tokio::test]
async fn test_empty_text_never_reaches_remote() {
    let remote = Arc::new(RecordingTranslator::new("bonjour"));
    let resolver = resolver_with_shared(Arc::clone(&remote));

    let err = resolver
        .resolve(&TranslationRequest::new("", "French"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::InvalidRequest(_)));
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_missing_fields_are_invalid() {
    let resolver = TranslationResolver::offline();

    let cases = vec![
        TranslationRequest::default(),
        TranslationRequest {
            text: Some("hello".to_string()),
            target_lang: None,
        },
        TranslationRequest::new("hello", "   "),
    ];

    for request in cases {
        let err = resolver.resolve(&request).await.unwrap_err();
        assert!(err.is_client_error(), "unexpected error for {:?}", request);
    }
}

#[tokio::test]
async fn test_failing_remote_falls_back() {
    let resolver = resolver_with(FailingTranslator::default());
    let result = resolver
        .resolve(&TranslationRequest::new("good morning", "French"))
        .await
        .unwrap();

    assert_eq!(result.translation, "bon matin");
    assert_eq!(result.mode, TranslationMode::OfflineFallback);
    assert_eq!(result.note.as_deref(), Some(constants::FALLBACK_NOTE));
}

#[tokio::test]
async fn test_every_remote_error_kind_falls_back() {
    for remote in FailingTranslator::every_kind() {
        let resolver = resolver_with(remote);
        let result = resolver
            .resolve(&TranslationRequest::new("Where is the cat?", "Spanish"))
            .await
            .unwrap();

        assert_eq!(result.translation, "Dónde está el gato?");
        assert_eq!(result.mode, TranslationMode::OfflineFallback);
        assert_eq!(result.note.as_deref(), Some(constants::FALLBACK_NOTE));
    }
}

#[tokio::test]
async fn test_hanging_remote_times_out() {
    let resolver = resolver_with(HangingTranslator);
    let started = Instant::now();

    let result = resolver
        .resolve(&TranslationRequest::new("thank you", "Spanish"))
        .await
        .unwrap();

    assert_eq!(result.translation, "gracias tú");
    assert_eq!(result.mode, TranslationMode::OfflineFallback);
    assert!(started.elapsed() < SHORT_TIMEOUT + Duration::from_secs(5));
}

#[tokio::test]
async fn test_panicking_remote_falls_back() {
    let resolver = resolver_with(PanickingTranslator);
    let result = resolver
        .resolve(&TranslationRequest::new("Hello", "French"))
        .await
        .unwrap();

    assert_eq!(result.translation, "Bonjour");
    assert_eq!(result.mode, TranslationMode::OfflineFallback);
}

#[tokio::test]
async fn test_online_success() {
    let remote = Arc::new(RecordingTranslator::new("Bonjour tout le monde"));
    let resolver = resolver_with_shared(Arc::clone(&remote));

    let result = resolver
        .resolve(&TranslationRequest::new("Hello everyone", "french"))
        .await
        .unwrap();

    assert_eq!(result.translation, "Bonjour tout le monde");
    assert_eq!(result.mode, TranslationMode::Online);
    assert!(result.note.is_none());
    assert_eq!(remote.calls(), 1);
    // 已知语言使用规范名称
    assert_eq!(remote.last_label().as_deref(), Some("French"));
}

#[tokio::test]
async fn test_unknown_language_goes_to_remote_verbatim() {
    let remote = Arc::new(RecordingTranslator::new("Hallo"));
    let resolver = resolver_with_shared(Arc::clone(&remote));

    let result = resolver
        .resolve(&TranslationRequest::new("Hello", "German"))
        .await
        .unwrap();

    assert_eq!(result.mode, TranslationMode::Online);
    assert_eq!(remote.last_label().as_deref(), Some("German"));
}

#[tokio::test]
async fn test_unknown_language_offline_passes_through() {
    let resolver = resolver_with(FailingTranslator::default());
    let result = resolver
        .resolve(&TranslationRequest::new("Hello, world!", "Klingon"))
        .await
        .unwrap();

    assert_eq!(result.translation, "Hello, world!");
    assert_eq!(result.mode, TranslationMode::OfflineFallback);
}

#[tokio::test]
async fn test_concurrent_requests_share_resolver() {
    let resolver = Arc::new(resolver_with(FailingTranslator::default()));

    let handles: Vec<_> = ["hello", "cat", "water"]
        .into_iter()
        .map(|word| {
            let resolver = Arc::clone(&resolver);
            tokio::spawn(async move {
                resolver
                    .resolve(&TranslationRequest::new(word, "Japanese"))
                    .await
                    .unwrap()
                    .translation
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert_eq!(results, vec!["こんにちは", "猫", "水"]);
}
