//! 离线词典
//!
//! 每种目标语言一张手写的小词表，键为小写英文单词。词表编译进二进制，
//! 首次使用时建立索引，之后只读。新增语言只需增加一个枚举成员和对应词表。

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;

type Entries = &'static [(&'static str, &'static str)];

const FRENCH: Entries = &[
    ("hello", "bonjour"),
    ("hi", "salut"),
    ("how", "comment"),
    ("are", "êtes"),
    ("you", "vous"),
    ("you?", "vous ?"),
    ("i", "je"),
    ("am", "suis"),
    ("fine", "bien"),
    ("thank", "merci"),
    ("thanks", "merci"),
    ("please", "s'il vous plaît"),
    ("good", "bon"),
    ("morning", "matin"),
    ("night", "nuit"),
    ("love", "amour"),
    ("cat", "chat"),
    ("dog", "chien"),
    ("food", "nourriture"),
    ("water", "eau"),
    ("where", "où"),
    ("is", "est"),
    ("the", "le"),
    ("a", "un"),
    ("this", "ceci"),
];

const SPANISH: Entries = &[
    ("hello", "hola"),
    ("hi", "hola"),
    ("how", "cómo"),
    ("are", "estás"),
    ("you", "tú"),
    ("you?", "tú?"),
    ("i", "yo"),
    ("am", "estoy"),
    ("fine", "bien"),
    ("thank", "gracias"),
    ("thanks", "gracias"),
    ("please", "por favor"),
    ("good", "buen"),
    ("morning", "día"),
    ("night", "noche"),
    ("love", "amor"),
    ("cat", "gato"),
    ("dog", "perro"),
    ("food", "comida"),
    ("water", "agua"),
    ("where", "dónde"),
    ("is", "está"),
    ("the", "el"),
    ("a", "un"),
    ("this", "esto"),
];

// 日语没有冠词，"the"/"a" 映射为空串
const JAPANESE: Entries = &[
    ("hello", "こんにちは"),
    ("hi", "やあ"),
    ("how", "どう"),
    ("are", "ですか"),
    ("you", "あなた"),
    ("you?", "あなた？"),
    ("i", "わたし"),
    ("am", "です"),
    ("fine", "元気"),
    ("thank", "ありがとう"),
    ("thanks", "ありがとう"),
    ("please", "お願いします"),
    ("good", "良い"),
    ("morning", "朝"),
    ("night", "夜"),
    ("love", "愛"),
    ("cat", "猫"),
    ("dog", "犬"),
    ("food", "食べ物"),
    ("water", "水"),
    ("where", "どこ"),
    ("is", "は"),
    ("the", ""),
    ("a", ""),
    ("this", "これ"),
];

/// 单一语言的静态描述
struct LanguageProfile {
    label: &'static str,
    code: &'static str,
    flag: &'static str,
    entries: Entries,
}

/// 支持的目标语言（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetLanguage {
    French,
    Spanish,
    Japanese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::French,
        TargetLanguage::Spanish,
        TargetLanguage::Japanese,
    ];

    fn profile(self) -> &'static LanguageProfile {
        match self {
            TargetLanguage::French => &LanguageProfile {
                label: "French",
                code: "fr",
                flag: "🇫🇷",
                entries: FRENCH,
            },
            TargetLanguage::Spanish => &LanguageProfile {
                label: "Spanish",
                code: "es",
                flag: "🇪🇸",
                entries: SPANISH,
            },
            TargetLanguage::Japanese => &LanguageProfile {
                label: "Japanese",
                code: "ja",
                flag: "🇯🇵",
                entries: JAPANESE,
            },
        }
    }

    /// 展示名称，同时也是请求里 `targetLang` 的规范取值
    pub fn label(self) -> &'static str {
        self.profile().label
    }

    /// ISO 639-1 代码
    pub fn code(self) -> &'static str {
        self.profile().code
    }

    pub fn flag(self) -> &'static str {
        self.profile().flag
    }

    /// 该语言的词典；全部词典在首次使用时一次性建立索引
    pub fn dictionary(self) -> &'static LanguageDictionary {
        static DICTIONARIES: OnceLock<HashMap<TargetLanguage, LanguageDictionary>> =
            OnceLock::new();

        let dictionaries = DICTIONARIES.get_or_init(|| {
            Self::ALL
                .into_iter()
                .map(|lang| (lang, LanguageDictionary::new(lang, lang.profile().entries)))
                .collect()
        });
        &dictionaries[&self]
    }

    /// 宽松解析：展示名（忽略大小写）或 ISO 代码，未知语言返回 None
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.label().eq_ignore_ascii_case(value) || lang.code().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("不支持的目标语言: {}", s))
    }
}

/// 单一语言的只读词典
#[derive(Debug)]
pub struct LanguageDictionary {
    language: TargetLanguage,
    entries: HashMap<&'static str, &'static str>,
}

impl LanguageDictionary {
    fn new(language: TargetLanguage, entries: Entries) -> Self {
        Self {
            language,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    /// 按小写键查找；键由调用方负责转小写
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 在指定语言的词典中查找，语言不受支持时返回 None
pub fn lookup(language: Option<TargetLanguage>, key: &str) -> Option<&'static str> {
    language.and_then(|lang| lang.dictionary().get(key))
}

/// 语言元数据，用于 `/api/languages`
#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub id: TargetLanguage,
    pub label: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

pub fn supported_languages() -> Vec<LanguageInfo> {
    TargetLanguage::ALL
        .into_iter()
        .map(|lang| LanguageInfo {
            id: lang,
            label: lang.label(),
            code: lang.code(),
            flag: lang.flag(),
        })
        .collect()
}
