//! API 处理器

pub mod languages;
pub mod translation;

pub use languages::*;
pub use translation::*;
