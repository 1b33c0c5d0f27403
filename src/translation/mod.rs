//! 翻译核心模块
//!
//! 本模块是 Web 服务与命令行共用的唯一实现：词典、切分、替换算法和降级链
//! 都只存在一份。
//!
//! ## 模块依赖关系
//!
//! ```text
//! TranslationResolver (resolver.rs)
//!     ├── RemoteTranslator (remote.rs)
//!     └── translate_offline (offline.rs)
//!             ├── tokenize (tokenizer.rs)
//!             └── LanguageDictionary (dictionary.rs)
//! ```
//!
//! ## 使用示例
//!
//! ```no_run
//! use pollyglot::translation::{TranslationRequest, TranslationResolver};
//!
//! # async fn demo() {
//! let resolver = TranslationResolver::offline();
//! let result = resolver
//!     .resolve(&TranslationRequest::new("Hello", "French"))
//!     .await
//!     .expect("valid request");
//! assert_eq!(result.translation, "Bonjour");
//! # }
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod offline;
pub mod remote;
pub mod resolver;
pub mod tokenizer;

pub use config::{ConfigManager, TranslationConfig};
pub use dictionary::{lookup, supported_languages, LanguageDictionary, LanguageInfo, TargetLanguage};
pub use error::{RemoteError, TranslationError};
pub use offline::{substitute, translate_offline};
pub use remote::{build_prompt, OpenAiTranslator, RemoteTranslator};
pub use resolver::{TranslationMode, TranslationRequest, TranslationResolver, TranslationResult};
pub use tokenizer::{tokenize, Token};
