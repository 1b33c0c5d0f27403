//! 词法切分
//!
//! 按单词边界把文本切成交替出现的"单词段"和"分隔段"，拼接后可以无损还原原文。
//! 单词字符沿用 ASCII `\b` 语义，即 `[A-Za-z0-9_]`。

use std::sync::OnceLock;

use regex::Regex;

/// 切分得到的一个片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 分隔段（空白、标点、非 ASCII 字符）为 true，单词段为 false
    pub is_boundary_marker: bool,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        !self.is_boundary_marker
    }
}

fn run_regex() -> &'static Regex {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    RUNS.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_]+|[^A-Za-z0-9_]+").expect("静态正则表达式无效")
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// 把文本切分为最大单词段与最大分隔段
///
/// 空字符串返回空序列。两个正则分支互补，因此匹配结果覆盖整个输入。
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    run_regex()
        .find_iter(text)
        .map(|m| {
            let segment = m.as_str();
            Token {
                text: segment,
                is_boundary_marker: !segment.starts_with(is_word_char),
            }
        })
        .collect()
}

/// 按顺序拼接片段
pub fn join(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}
