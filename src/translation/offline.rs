//! 离线词典替换引擎
//!
//! 对每个单词段查词典并替换，保留源词首字母大写的风格。该引擎是全函数：
//! 不会失败，最坏情况原样返回输入。

use crate::translation::dictionary::{lookup, TargetLanguage};
use crate::translation::tokenizer::{tokenize, Token};

/// 用指定语言的词典替换片段序列
pub fn substitute(tokens: &[Token<'_>], language: Option<TargetLanguage>) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());

    for token in tokens {
        if token.is_boundary_marker {
            out.push_str(token.text);
            continue;
        }

        match lookup(language, &token.text.to_lowercase()) {
            Some(value) if starts_uppercase(token.text) && has_latin_letter(value) => {
                out.push_str(&capitalize_first(value));
            }
            Some(value) => out.push_str(value),
            None => out.push_str(token.text),
        }
    }

    out
}

/// 切分并替换
pub fn translate_offline(text: &str, language: Option<TargetLanguage>) -> String {
    substitute(&tokenize(text), language)
}

fn starts_uppercase(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_uppercase())
}

// 非拉丁文字没有大小写概念
fn has_latin_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
